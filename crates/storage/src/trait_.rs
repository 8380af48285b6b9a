//! Storage trait abstraction.

use async_trait::async_trait;
use questlog_core::Progress;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Persistence for the single progress snapshot.
///
/// The store holds at most one entry; loading when nothing was ever saved
/// yields `None` and the caller falls back to the default state.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load the persisted snapshot, if any.
    async fn load(&self) -> Result<Option<Progress>>;

    /// Save a snapshot (create or overwrite).
    async fn save(&mut self, progress: &Progress) -> Result<()>;

    /// Remove the persisted snapshot. Removing an absent entry is fine.
    async fn clear(&mut self) -> Result<()>;
}
