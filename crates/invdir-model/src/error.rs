use thiserror::Error;

use crate::field::CanonicalField;

/// Violations of the record and catalog invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A normalized record must carry a `name`.
    #[error("record has no name")]
    MissingName,

    /// A normalized text value is empty after trimming.
    #[error("field '{field}' is empty")]
    EmptyValue { field: CanonicalField },

    /// A normalized text value is a placeholder such as "n/a".
    #[error("field '{field}' holds placeholder value '{value}'")]
    SentinelValue {
        field: CanonicalField,
        value: String,
    },

    /// A normalized number is NaN or infinite.
    #[error("field '{field}' holds a non-finite number")]
    NonFiniteNumber { field: CanonicalField },

    /// A catalog entry has an empty source id.
    #[error("source catalog entry {index} has an empty id")]
    EmptySourceId { index: usize },

    /// A catalog source id is a placeholder such as "na" and would be
    /// dropped from every record.
    #[error("source catalog entry {index} has placeholder id '{id}'")]
    PlaceholderSourceId { index: usize, id: String },

    /// A geography label is empty or a placeholder such as "NA".
    #[error("geography for source '{source_id}' is empty or a placeholder: '{label}'")]
    InvalidGeography { source_id: String, label: String },

    /// Two catalog entries share a source id.
    #[error("duplicate source id in catalog: {id}")]
    DuplicateSourceId { id: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
