//! Error Types
//!
//! Every failure here is recoverable. The UI decides which ones are silent
//! (validation), which ones raise the advisory modal, and which ones only
//! reach the console.

use thiserror::Error;

/// Rejections from `TaskRewardStore` operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("task text is empty")]
    EmptyTask,

    #[error("index {index} out of range for {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("GIF url is empty")]
    EmptyUrl,

    #[error("GIF already bookmarked: {0}")]
    AlreadyBookmarked(String),

    #[error("need {required} coins, have {balance}")]
    InsufficientCoins { required: u32, balance: u32 },

    #[error("no in-flight completion with id {0}")]
    UnknownCompletion(u64),

    #[error("saving file failed: {0}")]
    SaveFailed(#[from] SaveError),
}

impl StoreError {
    /// Validation rejections are silent no-ops for the user
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::EmptyTask
                | StoreError::IndexOutOfRange { .. }
                | StoreError::EmptyUrl
                | StoreError::AlreadyBookmarked(_)
        )
    }
}

/// Key-value write failure (quota exceeded, storage disabled, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write storage key `{key}`: {message}")]
pub struct StorageError {
    pub key: String,
    pub message: String,
}

impl StorageError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// GIF provider failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GifError {
    #[error("GIF request failed: {0}")]
    Request(String),

    #[error("malformed GIF response: {0}")]
    Malformed(String),
}

/// Share target failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("nothing to share")]
    NothingToShare,

    #[error("no share or clipboard mechanism available")]
    Unavailable,

    #[error("share rejected: {0}")]
    Rejected(String),
}

/// File-save collaborator failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SaveError(pub String);

/// Config override could not be parsed
#[derive(Debug, Error)]
#[error("invalid config: {0}")]
pub struct ConfigError(#[from] pub serde_json::Error);
