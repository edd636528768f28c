//! JSON snapshot of a collection.
//!
//! A snapshot is a pretty-printed JSON array (two-space indent) of sparse
//! record objects. Fields appear in canonical order and non-ASCII text is
//! written as-is, so equal collections always produce identical bytes.

use std::path::{Path, PathBuf};

use tracing::info;

use invdir_model::Collection;

use crate::atomic::write_atomic;
use crate::error::{Result, SnapshotError};
use crate::hash::sha256_hex;

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    pub path: PathBuf,
    pub records: usize,
    pub bytes: usize,
    /// SHA-256 of the written bytes, hex encoded.
    pub sha256: String,
}

/// Encodes a collection exactly as [`write_snapshot`] writes it.
pub fn snapshot_bytes(collection: &Collection) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(collection).map_err(|source| SnapshotError::Serialize { source })
}

/// Writes the collection to `path`, replacing it atomically.
pub fn write_snapshot(collection: &Collection, path: &Path) -> Result<SnapshotInfo> {
    let bytes = snapshot_bytes(collection)?;
    write_atomic(path, &bytes)?;
    let info = SnapshotInfo {
        path: path.to_path_buf(),
        records: collection.len(),
        bytes: bytes.len(),
        sha256: sha256_hex(&bytes),
    };
    info!(
        path = %path.display(),
        records = info.records,
        bytes = info.bytes,
        "wrote snapshot"
    );
    Ok(info)
}

/// Reads a snapshot back. Records that break the record invariants are errors.
pub fn read_snapshot(path: &Path) -> Result<Collection> {
    let bytes = std::fs::read(path).map_err(|e| SnapshotError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| SnapshotError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}
