//! In-memory storage, the mock seam for service tests.

use std::sync::Arc;

use questlog_core::Progress;
use tokio::sync::Mutex;

use super::{ProgressStore, Result, StorageError};

/// In-memory snapshot store. Nothing survives the process.
///
/// Clones share the same snapshot, so a test can keep a handle and
/// observe what a service persisted.
#[derive(Clone, Default)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<Option<Progress>>>,
    // When set, every load fails with a JSON error. Lets tests exercise
    // the malformed-snapshot fallback without touching the filesystem.
    poisoned: bool,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a snapshot.
    pub fn with_snapshot(progress: Progress) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(Some(progress))),
            poisoned: false,
        }
    }

    /// Store whose loads always fail as if the entry were malformed.
    pub fn malformed() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            poisoned: true,
        }
    }
}

#[async_trait::async_trait]
impl ProgressStore for MemoryStore {
    async fn load(&self) -> Result<Option<Progress>> {
        if self.poisoned {
            let bad = serde_json::from_str::<Progress>("{ not json").unwrap_err();
            return Err(StorageError::Json(bad));
        }
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&mut self, progress: &Progress) -> Result<()> {
        *self.snapshot.lock().await = Some(progress.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        *self.snapshot.lock().await = None;
        Ok(())
    }
}
