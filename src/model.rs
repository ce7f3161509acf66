//! Core data models for the portfolio easter-egg hunt.
//! The achievement catalog is plain data; nothing in the tracker or the
//! responder assumes a particular number of entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub type AchievementId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    /// Short display label, e.g. "Konami Code".
    pub name: String,
    /// Clue shown when the visitor asks for help.
    pub hint: String,
    /// Where on the page the egg lives.
    #[serde(default)]
    pub location: String,
}

impl Achievement {
    pub fn new(id: AchievementId, name: &str, hint: &str, location: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            hint: hint.to_string(),
            location: location.to_string(),
        }
    }

    /// Hint line as the chat presents it.
    pub fn hint_text(&self) -> String {
        if self.location.is_empty() {
            format!("Hint for \"{}\": {}", self.name, self.hint)
        } else {
            format!(
                "Hint for \"{}\": {} (Location: {})",
                self.name, self.hint, self.location
            )
        }
    }
}

/// Fixed, validated list of discoverable achievements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Achievement>", into = "Vec<Achievement>")]
pub struct Catalog {
    entries: Vec<Achievement>,
}

impl Catalog {
    pub fn new(entries: Vec<Achievement>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (i, a) in entries.iter().enumerate() {
            if a.id == 0 {
                return Err(ConfigError::InvalidId(a.id));
            }
            if entries[..i].iter().any(|b| b.id == a.id) {
                return Err(ConfigError::DuplicateId(a.id));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: AchievementId) -> bool {
        self.get(id).is_some()
    }

    /// Entry at a catalog position (wrapping).
    pub fn at(&self, index: usize) -> &Achievement {
        &self.entries[index % self.entries.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    /// First achievement whose name appears in `lowered` (already lower-cased).
    pub fn find_named(&self, lowered: &str) -> Option<&Achievement> {
        self.entries
            .iter()
            .find(|a| lowered.contains(&a.name.to_lowercase()))
    }
}

impl TryFrom<Vec<Achievement>> for Catalog {
    type Error = ConfigError;

    fn try_from(entries: Vec<Achievement>) -> Result<Self, Self::Error> {
        Catalog::new(entries)
    }
}

impl From<Catalog> for Vec<Achievement> {
    fn from(c: Catalog) -> Self {
        c.entries
    }
}

/// One line of the chat transcript. Session-only, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub from_user: bool,
    pub timestamp: DateTime<Utc>,
}

/// Face shown by the chat avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expression {
    #[default]
    Idle,
    Thinking,
    Happy,
}

impl Expression {
    pub fn caption(&self, typing: bool) -> &'static str {
        if typing {
            return "Thinking...";
        }
        match self {
            Expression::Happy => "Happy to help!",
            _ => "Ask me anything!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg(id: AchievementId, name: &str) -> Achievement {
        Achievement::new(id, name, "look around", "Somewhere")
    }

    #[test]
    fn catalog_rejects_duplicates_and_zero() {
        assert_eq!(
            Catalog::new(vec![egg(1, "A"), egg(1, "B")]),
            Err(ConfigError::DuplicateId(1))
        );
        assert_eq!(Catalog::new(vec![egg(0, "A")]), Err(ConfigError::InvalidId(0)));
        assert_eq!(Catalog::new(vec![]), Err(ConfigError::EmptyCatalog));
    }

    #[test]
    fn catalog_deserialize_validates() {
        let bad = r#"[{"id":2,"name":"A","hint":"h"},{"id":2,"name":"B","hint":"h"}]"#;
        assert!(serde_json::from_str::<Catalog>(bad).is_err());
        let good = r#"[{"id":2,"name":"A","hint":"h"}]"#;
        let c: Catalog = serde_json::from_str(good).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(2).unwrap().location, "");
    }

    #[test]
    fn find_named_is_case_insensitive_on_lowered_input() {
        let c = Catalog::new(vec![egg(1, "Konami Code"), egg(2, "Secret Click")]).unwrap();
        assert_eq!(c.find_named("hint for secret click please").unwrap().id, 2);
        assert!(c.find_named("hint please").is_none());
    }

    #[test]
    fn hint_text_includes_location() {
        let a = egg(3, "Hidden Message");
        assert_eq!(
            a.hint_text(),
            "Hint for \"Hidden Message\": look around (Location: Somewhere)"
        );
    }

    #[test]
    fn at_wraps() {
        let c = Catalog::new(vec![egg(1, "A"), egg(2, "B")]).unwrap();
        assert_eq!(c.at(3).id, 2);
    }
}
