//! Rule-based chat replies.
//!
//! Input is lower-cased and trimmed, then tested against an ordered list of
//! categories; the first match answers:
//!
//! 1. magic keyword (unlocks its achievement, requests the rainbow effect)
//! 2. answer to a pending "want a hint?" question
//! 3. explicit hint request (`hint`, `clue`)
//! 4. progress query (`progress`, `how many`, `score`, `found`)
//! 5. easter egg overview (`easter`, `egg`, `secret`), which asks "want a hint?"
//! 6. configured topics, in configuration order
//! 7. fallback pool
//!
//! A pending question only survives until the next message. If that message
//! is neither a yes nor a no, the question is dropped and the message is
//! matched from step 3 as a fresh query.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::tracker::{AchievementTracker, Discovery};
use crate::config::{MagicKeyword, ReplyBook, SiteConfig, Topic};
use crate::model::{Achievement, AchievementId};
use crate::util::{first_word, has_word, normalize};

const AFFIRMATIVE: &[&str] = &[
    "yes", "yeah", "yep", "yup", "sure", "ok", "okay", "please", "y", "absolutely", "definitely",
];
const NEGATIVE: &[&str] = &["no", "nope", "nah", "n", "nevermind"];

const HINT_WORDS: &[&str] = &["hint", "hints", "clue", "clues"];
const PROGRESS_WORDS: &[&str] = &["progress", "score", "found"];
const EGG_WORDS: &[&str] = &["easter", "egg", "eggs", "secret", "secrets"];

const NO_FALLBACK: &str = "I'm not sure about that one. Try asking about projects or easter eggs!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingHintConfirmation,
}

/// Presentation-layer request that accompanies a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Rainbow { duration_ms: u32 },
}

/// Which category produced a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyKind {
    Magic { first_time: bool },
    Hint(AchievementId),
    Declined,
    Progress,
    EggOverview,
    Topic(String),
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
    pub effects: Vec<Effect>,
}

impl Reply {
    fn plain(kind: ReplyKind, text: String) -> Self {
        Self {
            text,
            kind,
            effects: Vec::new(),
        }
    }
}

pub struct Responder<R = StdRng> {
    book: ReplyBook,
    magic: MagicKeyword,
    state: ConversationState,
    hint_cursor: usize,
    typing_delay_ms: u32,
    typing_jitter_ms: u32,
    rng: R,
}

impl Responder<StdRng> {
    pub fn from_entropy(config: &SiteConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Responder<R> {
    pub fn new(config: &SiteConfig, rng: R) -> Self {
        Self {
            book: config.replies.clone(),
            magic: config.magic.clone(),
            state: ConversationState::Idle,
            hint_cursor: 0,
            typing_delay_ms: config.typing_delay_ms,
            typing_jitter_ms: config.typing_jitter_ms,
            rng,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn hint_cursor(&self) -> usize {
        self.hint_cursor
    }

    /// Artificial "typing" pause before the next reply.
    pub fn typing_delay_ms(&mut self) -> u32 {
        self.typing_delay_ms
            .saturating_add(self.rng.gen_range(0..=self.typing_jitter_ms))
    }

    /// Pick the reply for `input`. Blank input gets a fallback line and
    /// leaves the conversation state untouched.
    pub fn respond(&mut self, input: &str, tracker: &AchievementTracker) -> Reply {
        let text = normalize(input);
        if text.is_empty() {
            return self.fallback();
        }
        let pending = std::mem::take(&mut self.state);

        if text.contains(&self.magic.keyword) {
            return self.magic_reply(tracker);
        }

        if pending == ConversationState::AwaitingHintConfirmation {
            let word = first_word(&text);
            if AFFIRMATIVE.contains(&word) {
                return self.generic_hint(tracker);
            }
            if NEGATIVE.contains(&word) {
                return Reply::plain(
                    ReplyKind::Declined,
                    "No problem! Let me know if you change your mind. Happy hunting!".to_string(),
                );
            }
        }

        if any_word(&text, HINT_WORDS) {
            if let Some(named) = tracker.catalog().find_named(&text) {
                let named = named.clone();
                return named_hint(&named, tracker.is_found(named.id));
            }
            return self.generic_hint(tracker);
        }

        if any_word(&text, PROGRESS_WORDS) || text.contains("how many") {
            return Reply::plain(ReplyKind::Progress, progress_text(tracker));
        }

        if any_word(&text, EGG_WORDS) {
            if tracker.is_complete() {
                return Reply::plain(ReplyKind::EggOverview, completion_text(tracker.total()));
            }
            self.state = ConversationState::AwaitingHintConfirmation;
            return Reply::plain(
                ReplyKind::EggOverview,
                format!(
                    "There are {total} secret easter eggs hidden throughout this portfolio and you've found {found}/{total}. Want me to give you a hint for one of them?",
                    found = tracker.count(),
                    total = tracker.total()
                ),
            );
        }

        let topic = self
            .book
            .topics
            .iter()
            .find(|t| !t.replies.is_empty() && topic_matches(t, &text));
        if let Some(t) = topic {
            let name = t.name.clone();
            let line = t
                .replies
                .choose(&mut self.rng)
                .cloned()
                .unwrap_or_default();
            return Reply::plain(ReplyKind::Topic(name), line);
        }

        self.fallback()
    }

    fn magic_reply(&mut self, tracker: &AchievementTracker) -> Reply {
        let id = self.magic.egg_id;
        let name = tracker
            .catalog()
            .get(id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "secret".to_string());
        let first_time = tracker.record_discovery(id, &name) == Discovery::Recorded;
        let text = if first_time {
            format!("You found the {name} easter egg! Watch the chat glow with rainbow colors!")
        } else {
            format!("You already found the {name} easter egg, but here's another dose of rainbow!")
        };
        Reply {
            text,
            kind: ReplyKind::Magic { first_time },
            effects: vec![Effect::Rainbow {
                duration_ms: self.magic.effect_ms,
            }],
        }
    }

    /// Round-robin over the catalog, skipping found entries while any remain.
    fn generic_hint(&mut self, tracker: &AchievementTracker) -> Reply {
        let catalog = tracker.catalog();
        let n = catalog.len();
        let start = self.hint_cursor % n;
        let idx = (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| !tracker.is_found(catalog.at(i).id))
            .unwrap_or(start);
        self.hint_cursor = (idx + 1) % n;
        let egg = catalog.at(idx);
        let text = if tracker.is_complete() {
            format!("You've found them all, but here's one anyway. {}", egg.hint_text())
        } else {
            egg.hint_text()
        };
        Reply::plain(ReplyKind::Hint(egg.id), text)
    }

    fn fallback(&mut self) -> Reply {
        let line = self
            .book
            .fallback
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| NO_FALLBACK.to_string());
        Reply::plain(ReplyKind::Fallback, line)
    }
}

fn named_hint(egg: &Achievement, found: bool) -> Reply {
    let text = if found {
        format!("You already found {}! {}", egg.name, egg.hint_text())
    } else {
        egg.hint_text()
    };
    Reply::plain(ReplyKind::Hint(egg.id), text)
}

fn progress_text(tracker: &AchievementTracker) -> String {
    if tracker.is_complete() {
        return completion_text(tracker.total());
    }
    let left = tracker.total() - tracker.count();
    format!(
        "You've found {}/{} easter eggs so far. {} to go!",
        tracker.count(),
        tracker.total(),
        left
    )
}

fn completion_text(total: usize) -> String {
    format!("Incredible! You've found all {total} easter eggs. You're a true explorer!")
}

fn any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| has_word(text, w))
}

fn topic_matches(topic: &Topic, text: &str) -> bool {
    topic.keywords.iter().any(|k| {
        if topic.whole_word && !k.contains(' ') {
            has_word(text, k)
        } else {
            text.contains(k.as_str())
        }
    })
}
