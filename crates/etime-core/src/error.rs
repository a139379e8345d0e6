//! Core error types for etime-core.
//!
//! A thiserror hierarchy: validation errors are surfaced to the user,
//! storage and fetch errors are degraded to warnings by their owning
//! modules. Nothing here is fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for etime-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input rejected before any state change
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Remote image search errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Keyed-store persistence errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to write a record (e.g. quota/permission for large uploads)
    #[error("Failed to write '{key}' to {path}: {message}")]
    WriteFailed {
        key: String,
        path: PathBuf,
        message: String,
    },

    /// Failed to remove a record
    #[error("Failed to remove '{key}' at {path}: {message}")]
    RemoveFailed {
        key: String,
        path: PathBuf,
        message: String,
    },

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors. Messages are user-facing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Custom URL field submitted empty
    #[error("Please enter a URL")]
    EmptyUrl,

    /// Custom URL is not an http(s) link to an allowed image type
    #[error("Please enter a valid image URL")]
    InvalidImageUrl,

    /// Preset index outside the built-in list
    #[error("No such preset: {index} (1-{count})")]
    UnknownPreset { index: usize, count: usize },
}

/// Remote image search errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or protocol failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response parsed but did not have the expected shape
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
