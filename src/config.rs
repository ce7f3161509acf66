//! Site configuration: the achievement catalog, chat reply tables and timings.
//!
//! Built-in defaults describe the portfolio as shipped. A page may override
//! them with a `<script id="site-config" type="application/json">` element;
//! an override that fails to parse or validate is ignored with a warning.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Achievement, AchievementId, Catalog};
use crate::profile::Profile;
use crate::util::{clog, cwarn};

pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-eggs-found";
/// Upper bound for every configured delay.
pub const MAX_TIMING_MS: u32 = 60_000;

/// Chat keyword that unlocks an achievement by itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicKeyword {
    pub keyword: String,
    pub egg_id: AchievementId,
    /// How long the full-screen effect stays up.
    pub effect_ms: u32,
}

/// Which catalog entry each page surface unlocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerIds {
    pub konami: AchievementId,
    pub avatar_click: AchievementId,
    pub footer_hover: AchievementId,
    pub midnight: AchievementId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
    /// Match keywords as whole words only ("hi" must not match "this").
    #[serde(default)]
    pub whole_word: bool,
    pub replies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyBook {
    /// First bot line of every session.
    pub welcome: String,
    /// Checked in order; the first topic with a matching keyword answers.
    pub topics: Vec<Topic>,
    pub fallback: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub storage_key: String,
    pub catalog: Catalog,
    pub magic: MagicKeyword,
    pub triggers: TriggerIds,
    pub typing_delay_ms: u32,
    pub typing_jitter_ms: u32,
    pub happy_ms: u32,
    pub avatar_clicks: u32,
    pub footer_hover_ms: u32,
    pub replies: ReplyBook,
    pub profile: Profile,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn topic(name: &str, keywords: &[&str], whole_word: bool, replies: &[&str]) -> Topic {
    Topic {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        whole_word,
        replies: replies.iter().map(|r| r.to_string()).collect(),
    }
}

fn default_catalog() -> Catalog {
    let entries = vec![
        Achievement::new(
            1,
            "Konami Code",
            "Try the classic gaming cheat code... Up, Up, Down, Down, Left, Right, Left, Right, B, A",
            "Anywhere on the page",
        ),
        Achievement::new(
            2,
            "Secret Click",
            "My avatar in the hero section holds a secret. Try clicking on it multiple times!",
            "Hero section",
        ),
        Achievement::new(
            3,
            "Hidden Message",
            "The footer might have something special if you hover over my name for a while...",
            "Footer",
        ),
        Achievement::new(
            4,
            "Color Shifter",
            "Try typing 'rainbow' in this chat to see something magical happen!",
            "This chatbot",
        ),
        Achievement::new(
            5,
            "Time Traveler",
            "Visit the site around midnight (00:00) for a special surprise!",
            "Any time",
        ),
    ];
    Catalog::new(entries).expect("built-in catalog is valid")
}

impl SiteConfig {
    /// Built-in configuration for the portfolio.
    pub fn portfolio() -> Self {
        let replies = ReplyBook {
            welcome: "Hey! I'm Ananya's portfolio assistant. Ask me anything about her work, or try to find the hidden easter eggs!".to_string(),
            topics: vec![
                topic(
                    "projects",
                    &["project", "portfolio work", "built"],
                    false,
                    &["Check out the Projects section! Highlights include Adaptive MR for healthcare, an award-winning Blood-Organ Donation app, and the official Lens Studio documentation guide."],
                ),
                topic(
                    "skills",
                    &["skill", "tech stack", "tools"],
                    false,
                    &["Ananya is skilled in Unity 6, AR/VR development, UX Design, React, Python, and AI/ML. She's particularly passionate about creating immersive XR experiences!"],
                ),
                topic(
                    "experience",
                    &["experience", "work history", "job", "snap"],
                    false,
                    &["Ananya has worked at Snap Inc. as a Lens Studio Specialist, conducted research at ADAPT Centre, and has 4+ years of experience in XR development."],
                ),
                topic(
                    "education",
                    &["education", "study", "degree", "university", "msc"],
                    false,
                    &["She's currently pursuing an MSc in Human-Computer Interaction at University College Dublin, Ireland."],
                ),
                topic(
                    "publications",
                    &["publication", "paper", "research"],
                    false,
                    &["Ananya has published research on adaptive MR interfaces for motor impairments and multimodal feedback in XR. Check the Publications section for more!"],
                ),
                topic(
                    "contact",
                    &["contact", "email", "linkedin", "reach", "hire"],
                    false,
                    &["You can reach Ananya via email at ananyachandraker02@gmail.com or connect on LinkedIn!"],
                ),
                topic(
                    "xr",
                    &["xr", "ar", "vr", "mr", "unity", "lens studio", "mixed reality"],
                    true,
                    &["Immersive tech is Ananya's home turf: Unity XR, Lens Studio AR lenses, and mixed reality prototypes for healthcare."],
                ),
                topic(
                    "greeting",
                    &["hello", "hi", "hey", "hiya", "greetings"],
                    true,
                    &[
                        "Hey there! I'm Ananya's portfolio assistant. Ask me about her skills, projects, or try to find the hidden easter eggs!",
                        "Hello! Welcome to Ananya's portfolio. I can help you navigate around or give you hints about hidden easter eggs. What would you like to know?",
                        "Hi! Curious about XR, research, or secrets? I know a bit about all three.",
                    ],
                ),
                topic(
                    "thanks",
                    &["thanks", "thank", "thx", "cheers"],
                    true,
                    &[
                        "You're welcome! Anything else you'd like to know?",
                        "Happy to help! Keep an eye out for secrets while you browse.",
                    ],
                ),
            ],
            fallback: vec![
                "That's interesting! Try asking about Ananya's projects, skills, or experience.".to_string(),
                "I'd love to help! You can ask about publications, education, or how to contact Ananya.".to_string(),
                "Hmm, I'm not sure about that. But did you know there are easter eggs hidden in this portfolio?".to_string(),
                "Great question! Check out the Projects section for Ananya's amazing work in AR/VR and healthcare tech.".to_string(),
            ],
        };
        Self {
            owner: "Ananya Chandraker".to_string(),
            tagline: "XR developer and HCI researcher building human-centered experiences.".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            catalog: default_catalog(),
            magic: MagicKeyword {
                keyword: "rainbow".to_string(),
                egg_id: 4,
                effect_ms: 5000,
            },
            triggers: TriggerIds {
                konami: 1,
                avatar_click: 2,
                footer_hover: 3,
                midnight: 5,
            },
            typing_delay_ms: 1000,
            typing_jitter_ms: 500,
            happy_ms: 2000,
            avatar_clicks: 5,
            footer_hover_ms: 3000,
            replies,
            profile: Profile::portfolio(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()
    }

    /// Check cross-field references and normalize keywords for matching.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.magic.keyword = self.magic.keyword.trim().to_lowercase();
        if self.magic.keyword.is_empty() {
            return Err(ConfigError::BlankMagicKeyword);
        }
        if !self.catalog.contains(self.magic.egg_id) {
            return Err(ConfigError::UnknownMagicEgg(self.magic.egg_id));
        }
        for t in &mut self.replies.topics {
            for k in &mut t.keywords {
                *k = k.trim().to_lowercase();
            }
            t.keywords.retain(|k| !k.is_empty());
        }
        if self.avatar_clicks == 0 {
            self.avatar_clicks = 1;
        }
        for ms in [
            &mut self.typing_delay_ms,
            &mut self.typing_jitter_ms,
            &mut self.happy_ms,
            &mut self.footer_hover_ms,
            &mut self.magic.effect_ms,
        ] {
            *ms = (*ms).min(MAX_TIMING_MS);
        }
        self.profile.normalize();
        Ok(self)
    }

    /// Read the page's override element, falling back to built-in defaults.
    pub fn load_from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(cfg) => {
                    clog("site config loaded from page");
                    cfg
                }
                Err(e) => {
                    cwarn(&format!("ignoring site config override: {e}"));
                    Self::portfolio()
                }
            },
            _ => Self::portfolio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_valid() {
        let cfg = SiteConfig::portfolio().validate().unwrap();
        assert_eq!(cfg.catalog.len(), 5);
        assert_eq!(cfg.magic.keyword, "rainbow");
        assert!(cfg.catalog.contains(cfg.triggers.konami));
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{"owner":"Someone Else","avatar_clicks":3}"#).unwrap();
        assert_eq!(cfg.owner, "Someone Else");
        assert_eq!(cfg.avatar_clicks, 3);
        assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(cfg.catalog.len(), 5);
    }

    #[test]
    fn override_with_smaller_catalog() {
        let json = r#"{
            "catalog": [
                {"id": 7, "name": "Tiny", "hint": "look"},
                {"id": 9, "name": "Magic", "hint": "type it"}
            ],
            "magic": {"keyword": "  ABRACADABRA ", "egg_id": 9, "effect_ms": 100}
        }"#;
        let cfg = SiteConfig::from_json(json).unwrap();
        assert_eq!(cfg.catalog.len(), 2);
        assert_eq!(cfg.magic.keyword, "abracadabra");
    }

    #[test]
    fn magic_must_reference_catalog() {
        let json = r#"{"magic": {"keyword": "rainbow", "egg_id": 42, "effect_ms": 1}}"#;
        assert_eq!(
            SiteConfig::from_json(json),
            Err(ConfigError::UnknownMagicEgg(42))
        );
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn huge_timings_are_clamped() {
        let cfg = SiteConfig::from_json(
            r#"{"typing_delay_ms":4294967295,"typing_jitter_ms":4294967295,"happy_ms":4294967295}"#,
        )
        .unwrap();
        assert_eq!(cfg.typing_delay_ms, MAX_TIMING_MS);
        assert_eq!(cfg.typing_jitter_ms, MAX_TIMING_MS);
        assert_eq!(cfg.happy_ms, MAX_TIMING_MS);
        assert_eq!(cfg.footer_hover_ms, 3000);
    }

    #[test]
    fn replies_only_point_at_rendered_sections() {
        let cfg = SiteConfig::portfolio();
        assert!(!cfg.profile.projects.is_empty());
        assert!(!cfg.profile.publications.is_empty());
        assert!(!cfg.profile.contact.is_empty());
    }

    #[test]
    fn profile_can_be_overridden() {
        let cfg = SiteConfig::from_json(
            r#"{"profile":{"about":["Hi."],"skills":[{"name":"Rust","level":101}]}}"#,
        )
        .unwrap();
        assert_eq!(cfg.profile.about, vec!["Hi.".to_string()]);
        assert_eq!(cfg.profile.skills[0].level, 100);
        assert_eq!(cfg.profile.experience.len(), 7);
    }
}
