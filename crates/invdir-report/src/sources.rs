//! Per-source record counts of an existing snapshot.

use std::fmt;

use invdir_core::Tally;
use invdir_model::{CanonicalField, Collection};

/// Label for records that carry no `source`.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Record counts per `source`; records without one count as "Unknown".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCounts {
    pub total: usize,
    pub by_source: Tally,
}

impl SourceCounts {
    pub fn compute(collection: &Collection) -> Self {
        let by_source = Tally::count(collection.iter().map(|record| {
            record
                .get(CanonicalField::Source)
                .map_or_else(|| UNKNOWN_SOURCE.to_string(), ToString::to_string)
        }));
        Self {
            total: collection.len(),
            by_source,
        }
    }
}

impl fmt::Display for SourceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records by source:")?;
        for (source, count) in self.by_source.iter() {
            writeln!(f, "  {source}: {count}")?;
        }
        writeln!(f, "Total: {}", self.total)
    }
}
