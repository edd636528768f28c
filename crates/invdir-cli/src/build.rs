//! Run orchestration: catalog → pipeline → snapshot → report.
//!
//! All paths come in through [`BuildOptions`]; nothing here reads the
//! process working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use invdir_core::{dedupe_by_name, run_pipeline};
use invdir_ingest::{CsvReader, load_catalog};
use invdir_model::SourceCatalog;
use invdir_report::{
    RunSummary, SourceCounts, read_snapshot, write_atomic, write_snapshot, write_text_report,
};

/// Inputs of a build run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub resources: PathBuf,
    pub output: PathBuf,
    /// TOML catalog; the built-in catalog when `None`.
    pub catalog: Option<PathBuf>,
    /// Plain-text copy of the summary.
    pub report: Option<PathBuf>,
    pub dedupe: bool,
}

/// Resolves the source catalog for a run.
pub fn resolve_catalog(path: Option<&Path>) -> Result<SourceCatalog> {
    match path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("load source catalog {}", path.display())),
        None => Ok(SourceCatalog::builtin()),
    }
}

/// Builds the directory and writes the snapshot.
///
/// Missing or unreadable sources are reported in the summary, not returned
/// as errors. Failing to write the snapshot or report is an error.
pub fn run_build(options: &BuildOptions) -> Result<RunSummary> {
    let catalog = resolve_catalog(options.catalog.as_deref())?;
    if !options.resources.is_dir() {
        warn!(
            resources = %options.resources.display(),
            "resources directory does not exist"
        );
    }
    info!(
        sources = catalog.sources.len(),
        resources = %options.resources.display(),
        "building investor directory"
    );

    let outcome = run_pipeline(&catalog, &options.resources, &CsvReader::new());

    let deduped = options
        .dedupe
        .then(|| dedupe_by_name(outcome.collection.clone()));
    let (collection, duplicates_removed) = match &deduped {
        Some((kept, removed)) => (kept, Some(*removed)),
        None => (&outcome.collection, None),
    };

    let snapshot = write_snapshot(collection, &options.output)
        .with_context(|| format!("write snapshot {}", options.output.display()))?;
    let summary = RunSummary::new(&outcome, collection, duplicates_removed).with_snapshot(snapshot);

    if let Some(path) = &options.report {
        write_text_report(&summary, path)
            .with_context(|| format!("write report {}", path.display()))?;
    }
    Ok(summary)
}

/// Counts the records of an existing snapshot per source.
pub fn run_sources(snapshot: &Path, output: Option<&Path>) -> Result<SourceCounts> {
    let collection =
        read_snapshot(snapshot).with_context(|| format!("read snapshot {}", snapshot.display()))?;
    let counts = SourceCounts::compute(&collection);
    if let Some(path) = output {
        write_atomic(path, counts.to_string().as_bytes())
            .with_context(|| format!("write source counts {}", path.display()))?;
    }
    Ok(counts)
}
