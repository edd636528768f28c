//! Column label reconciliation.
//!
//! Source files name the same thing many ways ("Investor Name", "VC Name",
//! "Company"). Labels are lowercased and trimmed, then looked up in a fixed
//! synonym table; anything not in the table is dropped.
//!
//! When two columns of one row map to the same field, the later column wins.

#![deny(unsafe_code)]

mod synonyms;

use invdir_model::{CanonicalField, MappedRecord, RawRecord, RawValue, TaggedRecord};

pub use synonyms::{SYNONYMS, synonyms_for};

/// Lowercases and trims a label. Internal whitespace is kept as-is.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Maps a raw column label to its canonical field, if any.
pub fn map_label(raw: &str) -> Option<CanonicalField> {
    synonyms::lookup(&normalize_label(raw))
}

/// Re-keys a raw row by canonical field, dropping unmapped columns.
pub fn map_record(record: &RawRecord) -> MappedRecord {
    let mut mapped = MappedRecord::new();
    for (label, value) in record.iter() {
        if let Some(field) = map_label(label) {
            mapped.insert(field, value.clone());
        }
    }
    mapped
}

/// Maps a tagged row, then writes its provenance fields.
///
/// Provenance is already canonical and bypasses the synonym table.
pub fn map_tagged(tagged: &TaggedRecord<'_>) -> MappedRecord {
    let mut mapped = map_record(&tagged.record);
    mapped.insert(
        CanonicalField::Source,
        RawValue::text(tagged.provenance.source.as_str()),
    );
    mapped.insert(
        CanonicalField::SourceGeography,
        RawValue::text(tagged.provenance.geography.as_str()),
    );
    mapped
}

/// How the columns of one sheet resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapping {
    /// Mapped columns in source order.
    pub mapped: Vec<(String, CanonicalField)>,
    /// Columns with no synonym.
    pub unmapped: Vec<String>,
}

impl HeaderMapping {
    /// Canonical fields fed by more than one column; the last column wins.
    pub fn shadowed(&self) -> Vec<CanonicalField> {
        let mut fields: Vec<CanonicalField> = Vec::new();
        for (index, (_, field)) in self.mapped.iter().enumerate() {
            let repeated = self.mapped[index + 1..]
                .iter()
                .any(|(_, later)| later == field);
            if repeated && !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }
}

/// Resolves a header row without touching any data.
pub fn map_headers<'a>(labels: impl IntoIterator<Item = &'a str>) -> HeaderMapping {
    let mut mapping = HeaderMapping::default();
    for label in labels {
        match map_label(label) {
            Some(field) => mapping.mapped.push((label.to_string(), field)),
            None => mapping.unmapped.push(label.to_string()),
        }
    }
    mapping
}
