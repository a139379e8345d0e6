//! File-per-key string store.
//!
//! The persisted state is a handful of independent keyed records (time
//! format flag, background token, uploaded image, task list), each read at
//! startup and written on change. Every key maps to one file under the data
//! directory; values are raw strings.

use std::path::PathBuf;

use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Open the store at an explicit directory (tests point this at a
    /// temporary directory).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Read a record. Absent or unreadable records read as `None`; callers
    /// fall back to their defaults.
    pub fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    /// Write a record.
    ///
    /// # Errors
    /// Returns an error when the value cannot be written (full disk,
    /// permissions, oversized uploads). Callers degrade to session-only
    /// state on failure.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path(key), value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            path: self.path(key),
            message: e.to_string(),
        })
    }

    /// Remove a record. Removing an absent record is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::RemoveFailed {
                key: key.to_string(),
                path: self.path(key),
                message: e.to_string(),
            }),
        }
    }
}
