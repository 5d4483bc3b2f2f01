//! JSON-string-per-key file storage
//!
//! One file per storage key under a single data directory; every value is
//! the full serialized payload for that key, rewritten on each mutation.
//! Availability is decided once, when the store is opened: if the directory
//! cannot be created, the store degrades into a black hole (reads yield
//! nothing, writes are dropped) instead of surfacing errors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

/// File-backed key/value store with whole-value reads and writes
pub struct KvStore {
    root: PathBuf,
    available: bool,
    // Serializes read-modify-write cycles; readers are not blocked because
    // writes land via a temp file + rename
    write_lock: Arc<Mutex<()>>,
}

impl KvStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let available = match std::fs::create_dir_all(&root) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    root = %root.display(),
                    error = %err,
                    "data directory unavailable, store degrades to empty reads"
                );
                false
            }
        };
        Self { root, available, write_lock: Arc::new(Mutex::new(())) }
    }

    /// Whether the backing directory is usable
    pub fn available(&self) -> bool {
        self.available
    }

    fn file_path(root: &Path, key: &str) -> PathBuf {
        root.join(format!("{key}.json"))
    }

    fn read_sync(root: &Path, key: &str) -> Option<String> {
        match std::fs::read_to_string(Self::file_path(root, key)) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(key, error = %err, "read failed, treating key as absent");
                None
            }
        }
    }

    fn write_sync(root: &Path, key: &str, value: &str) {
        let path = Self::file_path(root, key);
        let tmp = root.join(format!("{key}.json.tmp"));
        let result = std::fs::write(&tmp, value).and_then(|()| std::fs::rename(&tmp, &path));
        if let Err(err) = result {
            warn!(key, error = %err, "write failed, value dropped");
        }
    }

    /// Read the raw value stored under `key`
    pub async fn read(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        let root = self.root.clone();
        let owned_key = key.to_string();
        match tokio::task::spawn_blocking(move || Self::read_sync(&root, &owned_key)).await {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "blocking read failed");
                None
            }
        }
    }

    /// Replace the value stored under `key`
    pub async fn write(&self, key: &str, value: String) {
        if !self.available {
            return;
        }
        let root = self.root.clone();
        let lock = self.write_lock.clone();
        let owned_key = key.to_string();
        let joined = tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            Self::write_sync(&root, &owned_key, &value);
        })
        .await;
        if let Err(err) = joined {
            warn!(key, error = %err, "blocking write failed");
        }
    }

    /// Delete the value stored under `key`
    pub async fn remove(&self, key: &str) {
        if !self.available {
            return;
        }
        let root = self.root.clone();
        let lock = self.write_lock.clone();
        let owned_key = key.to_string();
        let joined = tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            let path = Self::file_path(&root, &owned_key);
            if let Err(err) = std::fs::remove_file(&path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(key = %owned_key, error = %err, "remove failed");
                }
            }
        })
        .await;
        if let Err(err) = joined {
            warn!(key, error = %err, "blocking remove failed");
        }
    }

    /// Atomically read-modify-write the value under `key`
    ///
    /// The closure receives the current value (or `None`) and returns the
    /// value to persist (or `None` to leave storage untouched) plus a result
    /// handed back to the caller. Returns `None` without running the closure
    /// when the store is unavailable, so callers can pick their own degraded
    /// fallback per operation.
    pub async fn mutate<R, F>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(Option<String>) -> (Option<String>, R) + Send + 'static,
        R: Send + 'static,
    {
        if !self.available {
            return None;
        }
        let root = self.root.clone();
        let lock = self.write_lock.clone();
        let owned_key = key.to_string();
        let joined = tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            let current = Self::read_sync(&root, &owned_key);
            let (next, result) = f(current);
            if let Some(value) = next {
                Self::write_sync(&root, &owned_key, &value);
            }
            result
        })
        .await;
        match joined {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(key, error = %err, "blocking mutate failed");
                None
            }
        }
    }
}
