//! JSON file storage implementation.
//!
//! Persists the progress snapshot as a single pretty-printed JSON file,
//! `progress.json`, inside the data directory. This is the one key-value
//! entry the tracker reads at startup and rewrites after every mutation.

use std::path::{Path, PathBuf};

use questlog_core::Progress;
use tokio::fs;

use super::{ProgressStore, Result};

const SNAPSHOT_FILE: &str = "progress.json";

/// File-based JSON storage backend.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Create storage rooted at the given data directory, creating the
    /// directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn snapshot_path(&self) -> PathBuf {
        self.root.join(SNAPSHOT_FILE)
    }
}

#[async_trait::async_trait]
impl ProgressStore for JsonStore {
    async fn load(&self) -> Result<Option<Progress>> {
        read_json(&self.snapshot_path()).await
    }

    async fn save(&mut self, progress: &Progress) -> Result<()> {
        let path = self.snapshot_path();
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(&path, json.as_bytes()).await?;
        tracing::debug!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        fs::remove_file(self.snapshot_path()).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Ok(())
            } else {
                Err(e)
            }
        })?;
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;
    use questlog_core::{ModuleId, StepId};

    fn sample_progress() -> Progress {
        let mut progress = Progress::new();
        let module = ModuleId::new(2).unwrap();
        progress.complete_step(StepId::new(module, 1).unwrap());
        progress.complete_step(StepId::new(module, 2).unwrap());
        progress
    }

    #[tokio::test]
    async fn load_returns_none_when_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saved_snapshot_loads_back_equal() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path()).await.unwrap();

        let progress = sample_progress();
        store.save(&progress).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, progress);
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path()).await.unwrap();

        store.save(&sample_progress()).await.unwrap();
        let fresh = Progress::new();
        store.save(&fresh).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, fresh);
    }

    #[tokio::test]
    async fn clear_removes_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path()).await.unwrap();

        store.save(&sample_progress()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_tolerates_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(dir.path()).await.unwrap();
        assert!(store.clear().await.is_ok());
    }

    #[tokio::test]
    async fn malformed_snapshot_surfaces_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path()).await.unwrap();

        fs::write(dir.path().join(SNAPSHOT_FILE), b"{ not json")
            .await
            .unwrap();

        match store.load().await {
            Err(StorageError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
    }
}
