//! Portfolio site with an easter-egg hunt: a persisted achievement tracker,
//! a rule-based chat assistant, and the Yew components that wire them into
//! the page.

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod profile;
pub mod state;
pub mod util;

pub use components::App;
pub use config::SiteConfig;
pub use state::{AchievementTracker, Responder};
