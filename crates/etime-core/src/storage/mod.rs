//! Persistence: keyed string records under the data directory.

mod kv;

pub use kv::KvStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/etime[-dev]/` based on ETIME_ENV.
///
/// Set ETIME_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ETIME_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("etime-dev")
    } else {
        base_dir.join("etime")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
