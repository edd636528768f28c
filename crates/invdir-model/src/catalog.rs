//! Static description of the source files that feed a run.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::record::Provenance;
use crate::value::is_sentinel;

/// Geography assigned to a source with no entry in the geography table.
pub const UNKNOWN_GEOGRAPHY: &str = "Unknown";

/// One configured source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Short internal key written to every record as `source`.
    pub id: String,
    /// Backing file, relative to the resources directory unless absolute.
    pub file: PathBuf,
}

/// Ordered source list plus the source → geography table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
    #[serde(default)]
    pub geography: BTreeMap<String, String>,
}

impl SourceCatalog {
    /// The four investor lists the directory was first built from.
    pub fn builtin() -> Self {
        let entries = [
            (
                "indian_vc_jumbo",
                "Indian Angel Investor + VC Data (Jumbo Pack).csv",
                "India",
            ),
            ("indian_vc", "Indian VC Access File.csv", "India"),
            (
                "uae_middle_east",
                "UAE-Middle East Angel Investors List.csv",
                "UAE & Middle East",
            ),
            ("us_uae_eu", "US UAE EU VC List.csv", "US, UAE & EU"),
        ];
        let mut catalog = Self::default();
        for (id, file, geography) in entries {
            catalog.sources.push(SourceSpec {
                id: id.to_string(),
                file: PathBuf::from(file),
            });
            catalog
                .geography
                .insert(id.to_string(), geography.to_string());
        }
        catalog
    }

    /// Geography label for `source`, or [`UNKNOWN_GEOGRAPHY`].
    pub fn geography_for(&self, source: &str) -> &str {
        self.geography
            .get(source)
            .map_or(UNKNOWN_GEOGRAPHY, String::as_str)
    }

    pub fn provenance_for(&self, source: &str) -> Provenance {
        Provenance::new(source, self.geography_for(source))
    }

    /// Rejects empty, placeholder and duplicate source ids, and geography
    /// labels that are empty or placeholders.
    ///
    /// Both values are written to every record of a batch, so they must
    /// survive cleaning.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (index, spec) in self.sources.iter().enumerate() {
            let id = spec.id.trim();
            if id.is_empty() {
                return Err(ModelError::EmptySourceId { index });
            }
            if is_sentinel(id) {
                return Err(ModelError::PlaceholderSourceId {
                    index,
                    id: spec.id.clone(),
                });
            }
            if !seen.insert(id) {
                return Err(ModelError::DuplicateSourceId { id: id.to_string() });
            }
        }
        for (source, label) in &self.geography {
            if is_sentinel(label) {
                return Err(ModelError::InvalidGeography {
                    source_id: source.clone(),
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }
}
