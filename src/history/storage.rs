//! Key-value slots backing the history store

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

/// String slots addressed by key.
///
/// `get` reports a missing key as `Ok(None)` and `remove` of a missing key
/// succeeds. `set` replaces the whole value at once.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> io::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> io::Result<()>;
    async fn remove(&self, key: &str) -> io::Result<()>;
}

/// Distinguishes staging files of writes in flight within this process.
static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

/// One `<key>.json` file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the file backing `key`.
    pub fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key '{}'", key),
            ));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)?).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let target = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        // Readers see the old file or the new one, never a partial write.
        // Each write stages under its own name, even across stores sharing a directory.
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        let staging = self
            .dir
            .join(format!(".{}.{}.{}.tmp", key, std::process::id(), seq));
        if let Err(e) = tokio::fs::write(&staging, value).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e);
        }
        if let Err(e) = tokio::fs::rename(&staging, &target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> io::Result<()> {
        match tokio::fs::remove_file(self.path_for(key)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-process slots, for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, `set` and `remove` fail with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn check_writable(&self) -> io::Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.check_writable()?;
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> io::Result<()> {
        self.check_writable()?;
        self.slots.write().await.remove(key);
        Ok(())
    }
}
