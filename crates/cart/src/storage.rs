//! Opaque key-value blob storage.
//!
//! The cart survives app restarts through a [`BlobStore`]: get/set/clear
//! over whole-value blobs under string keys, no transactions, no schema.
//! The store never interprets the bytes it is given.
//!
//! Two implementations ship with the crate: [`MemoryStore`] for tests and
//! ephemeral sessions, and [`FileStore`] for on-device persistence (one
//! file per key under a root directory, written atomically).

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors from blob store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The key cannot be used by this store (e.g., unsafe as a file name).
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Opaque persistent key-value storage.
///
/// Implementations must treat values as opaque byte blobs and must
/// overwrite atomically: a concurrent reader sees either the old value or
/// the new one, never a partial write.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying storage fails; a missing
    /// key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value could not be durably written.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Remove every key from the store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying storage fails.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory blob store for tests and ephemeral carts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(PoisonError::into_inner);
        blobs.clear();
        Ok(())
    }
}

/// File-backed blob store: one file per key under a root directory.
///
/// Writes go to a temporary sibling file first and are moved into place
/// with a rename, so a crash mid-write leaves the previous blob intact.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory blobs are stored under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

/// Keys double as file names, so restrict them to a safe alphabet.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let safe = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if safe {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)?;

        let tmp = self.root.join(format!("{key}.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_dir_all(&self.root) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
