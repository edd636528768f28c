//! Plain-text run summary.

use std::fmt;
use std::path::Path;

use invdir_core::{BatchOutcome, BatchReport, RunOutcome, Stats, Tally};
use invdir_model::Collection;

use crate::atomic::write_atomic;
use crate::error::Result;
use crate::snapshot::SnapshotInfo;

/// Everything a run reports, independent of how it is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub batches: Vec<BatchReport>,
    /// Rows read from all loaded batches.
    pub raw_total: usize,
    /// Records that survived cleaning.
    pub cleaned_total: usize,
    /// Set when name de-duplication ran.
    pub duplicates_removed: Option<usize>,
    /// Statistics of the final collection.
    pub stats: Stats,
    pub snapshot: Option<SnapshotInfo>,
}

impl RunSummary {
    /// Summarizes a run whose final (possibly de-duplicated) collection is `collection`.
    pub fn new(
        outcome: &RunOutcome,
        collection: &Collection,
        duplicates_removed: Option<usize>,
    ) -> Self {
        Self {
            batches: outcome.batches.clone(),
            raw_total: outcome.raw_total(),
            cleaned_total: outcome.collection.len(),
            duplicates_removed,
            stats: Stats::compute(collection),
            snapshot: None,
        }
    }

    #[must_use]
    pub fn with_snapshot(mut self, snapshot: SnapshotInfo) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn removed(&self) -> usize {
        self.raw_total.saturating_sub(self.cleaned_total)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Investor directory")?;
        writeln!(f, "Records before cleaning: {}", self.raw_total)?;
        writeln!(f, "Records after cleaning: {}", self.cleaned_total)?;
        writeln!(f, "Records removed: {}", self.removed())?;
        if let Some(duplicates) = self.duplicates_removed {
            writeln!(f, "Duplicates removed: {duplicates}")?;
        }
        writeln!(f, "Total records: {}", self.stats.total)?;

        writeln!(f)?;
        writeln!(f, "Batches:")?;
        for batch in &self.batches {
            write!(f, "  {} ({}): ", batch.source, batch.geography)?;
            match &batch.outcome {
                BatchOutcome::Loaded { raw_records, kept } => {
                    writeln!(f, "loaded, {raw_records} read, {kept} kept")?;
                }
                BatchOutcome::Missing => {
                    writeln!(f, "missing, {}", batch.path.display())?;
                }
                BatchOutcome::Failed { message } => writeln!(f, "failed, {message}")?,
            }
        }

        write_tally(f, "By source", &self.stats.by_source)?;
        write_tally(f, "By geography", &self.stats.by_geography)?;
        write_tally(f, "By type", &self.stats.by_type)?;
        write_tally(f, "Top stages", &self.stats.by_stage)?;

        writeln!(f)?;
        writeln!(f, "Contact coverage:")?;
        for coverage in &self.stats.coverage {
            writeln!(
                f,
                "  {}: {} ({:.1}%)",
                coverage.field, coverage.present, coverage.percent
            )?;
        }

        if let Some(snapshot) = &self.snapshot {
            writeln!(f)?;
            writeln!(f, "Snapshot: {}", snapshot.path.display())?;
            writeln!(f, "SHA-256: {}", snapshot.sha256)?;
        }
        Ok(())
    }
}

fn write_tally(f: &mut fmt::Formatter<'_>, title: &str, tally: &Tally) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}:")?;
    if tally.is_empty() {
        return writeln!(f, "  (none)");
    }
    for (value, count) in tally.iter() {
        writeln!(f, "  {value}: {count}")?;
    }
    Ok(())
}

/// Writes the rendered summary to `path` atomically.
pub fn write_text_report(summary: &RunSummary, path: &Path) -> Result<()> {
    write_atomic(path, summary.to_string().as_bytes())?;
    tracing::info!(path = %path.display(), "wrote run report");
    Ok(())
}
