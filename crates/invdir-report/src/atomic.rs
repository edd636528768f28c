//! Atomic file replacement.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SnapshotError};

/// `<target>.tmp`, next to the target.
pub fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let Some(name) = target.file_name() else {
        return Err(SnapshotError::InvalidPath {
            path: target.to_path_buf(),
        });
    };
    let mut temp_name = OsString::from(name);
    temp_name.push(".tmp");
    Ok(target.with_file_name(temp_name))
}

/// Writes `bytes` to `target` through a temporary file and a rename.
///
/// On failure the temporary file is removed and `target` is left as it was.
pub fn write_atomic(target: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(target)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SnapshotError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let result = write_and_rename(&temp_path, target, bytes);
    if result.is_err() && temp_path.exists() {
        if let Err(error) = fs::remove_file(&temp_path) {
            tracing::warn!(
                path = %temp_path.display(),
                %error,
                "failed to remove temporary file"
            );
        }
    }
    result
}

fn write_and_rename(temp_path: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| SnapshotError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| SnapshotError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| SnapshotError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    drop(file);

    fs::rename(temp_path, target).map_err(|e| SnapshotError::AtomicWriteFailed {
        temp_path: temp_path.to_path_buf(),
        target_path: target.to_path_buf(),
        source: e,
    })
}
