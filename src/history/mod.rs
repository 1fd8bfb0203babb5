//! Local analysis history.
//!
//! A bounded, most-recent-first log of past analysis outcomes kept in a
//! single key-value slot. The store is either empty or holds between 1 and
//! [`HISTORY_CAPACITY`] entries; an unreadable slot counts as empty.
//!
//! # Example
//!
//! ```rust
//! use rng_analyzer::history::{AnalysisSummary, HistoryEntry, HistoryStore};
//!
//! # tokio_test_block_on(async {
//! let store = HistoryStore::in_memory();
//! let summary = AnalysisSummary {
//!     predicted_class_name: "Healthy".to_string(),
//!     probability: 0.98,
//! };
//! store.append(HistoryEntry::new("capture.bin", summary)).await.unwrap();
//! assert_eq!(store.list().await.len(), 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

pub mod entry;
pub mod error;
pub mod storage;

pub use entry::{AnalysisSummary, HistoryEntry};
pub use error::StorageError;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Slot holding the current history.
pub const HISTORY_KEY: &str = "rng_analysis_history_v2";

/// Slot written by an older schema. Never read or written.
pub const LEGACY_HISTORY_KEY: &str = "rng_analysis_history";

/// Maximum number of entries retained.
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded, persisted, most-recent-first analysis log.
pub struct HistoryStore {
    storage: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write cycles within the process
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// File-backed store rooted at `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStore::new(data_dir)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Prepend `entry`, dropping the oldest entries beyond capacity.
    pub async fn append(&self, entry: HistoryEntry) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await;
        entries.insert(0, entry);
        if entries.len() > HISTORY_CAPACITY {
            tracing::debug!(
                evicted = entries.len() - HISTORY_CAPACITY,
                "Evicting oldest history entries"
            );
            entries.truncate(HISTORY_CAPACITY);
        }

        let encoded = serde_json::to_string(&entries)?;
        self.storage
            .set(HISTORY_KEY, &encoded)
            .await
            .map_err(|source| StorageError::Write {
                key: HISTORY_KEY.to_string(),
                source,
            })?;

        tracing::debug!(entries = entries.len(), "History updated");
        Ok(())
    }

    /// All stored entries, most recent first. Never fails.
    pub async fn list(&self) -> Vec<HistoryEntry> {
        self.read_entries().await
    }

    /// Remove every entry. Succeeds on an already empty store.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        self.storage
            .remove(HISTORY_KEY)
            .await
            .map_err(|source| StorageError::Write {
                key: HISTORY_KEY.to_string(),
                source,
            })?;

        tracing::info!("History cleared");
        Ok(())
    }

    async fn read_entries(&self) -> Vec<HistoryEntry> {
        let raw = match self.storage.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read history, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Stored history is corrupt, treating as empty");
                Vec::new()
            }
        }
    }
}
