use thiserror::Error;

use crate::model::AchievementId;

/// Failures of the key-value backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Problems found while loading or validating site configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(String),
    #[error("achievement catalog is empty")]
    EmptyCatalog,
    #[error("achievement id {0} must be a positive integer")]
    InvalidId(AchievementId),
    #[error("achievement id {0} is defined more than once")]
    DuplicateId(AchievementId),
    #[error("magic keyword refers to unknown achievement {0}")]
    UnknownMagicEgg(AchievementId),
    #[error("magic keyword must not be blank")]
    BlankMagicKeyword,
}
