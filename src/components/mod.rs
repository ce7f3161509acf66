pub mod app;
pub mod chat_widget;
pub mod egg_counter;
pub mod footer;
pub mod hero;
pub mod konami_listener;
pub mod rainbow_overlay;
pub mod sections;

pub use app::{App, AppContext};
