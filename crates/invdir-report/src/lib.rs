//! Output side of the investor directory: the JSON snapshot and run reports.
//!
//! - [`write_snapshot`] / [`read_snapshot`]: atomic, deterministic JSON
//! - [`RunSummary`]: before/after counts, batch outcomes and statistics
//! - [`SourceCounts`]: per-source counts of an existing snapshot

#![deny(unsafe_code)]

mod atomic;
mod error;
pub mod hash;
mod snapshot;
mod sources;
mod summary;

pub use atomic::{temp_path_for, write_atomic};
pub use error::{Result, SnapshotError};
pub use hash::sha256_hex;
pub use snapshot::{SnapshotInfo, read_snapshot, snapshot_bytes, write_snapshot};
pub use sources::{SourceCounts, UNKNOWN_SOURCE};
pub use summary::{RunSummary, write_text_report};
