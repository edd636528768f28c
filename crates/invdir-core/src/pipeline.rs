//! Aggregation of source batches into one collection.
//!
//! Each configured source is read, tagged, mapped and cleaned in catalog
//! order. A source whose file is missing, or cannot be read, contributes no
//! records and the run carries on; the outcome of every batch is recorded in
//! a [`BatchReport`] for the caller to summarize.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use invdir_ingest::{SourceReader, resolve_source_path};
use invdir_map::{map_headers, map_tagged};
use invdir_model::{Collection, NormalizedRecord, Sheet, SourceBatch, SourceCatalog};

use crate::clean::clean_record;
use crate::tag::tag_records;

/// What happened to one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// File read; `kept` of `raw_records` rows survived cleaning.
    Loaded { raw_records: usize, kept: usize },
    /// Backing file does not exist.
    Missing,
    /// Backing file exists but could not be read.
    Failed { message: String },
}

impl BatchOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loaded { .. } => "loaded",
            Self::Missing => "missing",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub source: String,
    pub geography: String,
    pub path: PathBuf,
    pub outcome: BatchOutcome,
}

/// Result of a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub collection: Collection,
    /// One entry per catalog source, in catalog order.
    pub batches: Vec<BatchReport>,
}

impl RunOutcome {
    /// Rows read across all loaded batches, before cleaning.
    pub fn raw_total(&self) -> usize {
        self.batches
            .iter()
            .map(|batch| match batch.outcome {
                BatchOutcome::Loaded { raw_records, .. } => raw_records,
                _ => 0,
            })
            .sum()
    }

    /// Rows discarded by the cleaner.
    pub fn discarded(&self) -> usize {
        self.raw_total().saturating_sub(self.collection.len())
    }

    /// Batches that did not load.
    pub fn skipped(&self) -> impl Iterator<Item = &BatchReport> {
        self.batches
            .iter()
            .filter(|batch| !matches!(batch.outcome, BatchOutcome::Loaded { .. }))
    }
}

/// Tags, maps and cleans one batch, keeping row order.
pub fn clean_batch(batch: SourceBatch) -> Vec<NormalizedRecord> {
    let SourceBatch {
        provenance,
        records,
    } = batch;
    tag_records(&provenance, records)
        .filter_map(|tagged| clean_record(&map_tagged(&tagged)))
        .collect()
}

/// Concatenates the cleaned output of in-memory batches in the given order.
pub fn aggregate(batches: impl IntoIterator<Item = SourceBatch>) -> Collection {
    batches.into_iter().flat_map(clean_batch).collect()
}

/// Reads every catalog source from `resources` and builds the collection.
pub fn run_pipeline<R>(catalog: &SourceCatalog, resources: &Path, reader: &R) -> RunOutcome
where
    R: SourceReader + ?Sized,
{
    let mut collection = Collection::new();
    let mut batches = Vec::with_capacity(catalog.sources.len());

    for spec in &catalog.sources {
        let path = resolve_source_path(resources, spec);
        let provenance = catalog.provenance_for(&spec.id);
        let outcome = match reader.read_sheets(&path) {
            Ok(sheets) => {
                log_headers(&spec.id, &sheets);
                let batch = SourceBatch::from_sheets(provenance.clone(), sheets);
                let raw_records = batch.records.len();
                let kept = clean_batch(batch);
                info!(
                    source = %spec.id,
                    raw_records,
                    kept = kept.len(),
                    "loaded batch"
                );
                let outcome = BatchOutcome::Loaded {
                    raw_records,
                    kept: kept.len(),
                };
                collection.extend(kept);
                outcome
            }
            Err(err) if err.is_not_found() => {
                warn!(
                    source = %spec.id,
                    path = %path.display(),
                    "source file not found, skipping batch"
                );
                BatchOutcome::Missing
            }
            Err(err) => {
                error!(
                    source = %spec.id,
                    path = %path.display(),
                    error = %err,
                    "failed to read batch"
                );
                BatchOutcome::Failed {
                    message: err.to_string(),
                }
            }
        };
        batches.push(BatchReport {
            source: provenance.source,
            geography: provenance.geography,
            path,
            outcome,
        });
    }

    RunOutcome {
        collection,
        batches,
    }
}

fn log_headers(source: &str, sheets: &[Sheet]) {
    for sheet in sheets {
        let Some(first) = sheet.records.first() else {
            continue;
        };
        let mapping = map_headers(first.iter().map(|(label, _)| label));
        debug!(
            source,
            sheet = %sheet.name,
            rows = sheet.records.len(),
            mapped = mapping.mapped.len(),
            unmapped = ?mapping.unmapped,
            shadowed = ?mapping.shadowed(),
            "sheet columns"
        );
    }
}
