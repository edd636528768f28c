//! Snapshot and report error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from writing or reading snapshots and report files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination has no file name to write to.
    #[error("not a file path: {path}")]
    InvalidPath { path: PathBuf },

    /// Collection could not be encoded as JSON.
    #[error("failed to serialize collection: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// File is not a valid snapshot.
    #[error("failed to parse snapshot {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The temporary file could not be moved over the target.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;
