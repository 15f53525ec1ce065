//! Core error types for simplelife-core.
//!
//! Blank input and unknown ids are ordinary no-ops, not errors; store
//! mutators signal them through their return values. Only two conditions
//! are reportable: an empty activity pool and a storage failure.

use thiserror::Error;

/// Core error type for simplelife-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Break suggestion requested with zero activities in the pool
    #[error("no activities to pick from; add one first")]
    EmptyPool,

    /// Persistence-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read/write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
