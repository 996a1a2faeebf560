//! Persistence error types.
//!
//! Only `save` surfaces errors; loads degrade to the caller's default and
//! never fail. Callers treat save failures as best-effort and log them.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized to JSON.
    #[error("failed to serialize value for {key}")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file could not be renamed).
    #[error("failed to complete save to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
