pub mod chat;
pub mod events;
pub mod responder;
pub mod storage;
pub mod timer;
pub mod tracker;
pub mod triggers;

pub use chat::{AnnouncementGate, ChatAction, ChatState, ReplyQueue};
pub use events::{DiscoveryEvent, EventBus, Subscription};
pub use responder::{ConversationState, Effect, Reply, ReplyKind, Responder};
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
pub use timer::{TimerSlot, Timeout};
pub use tracker::{AchievementTracker, Discovery, SharedTracker};
pub use triggers::{is_midnight, ClickCounter, SequenceDetector};
