//! Data model for the investor directory.
//!
//! Every source file is reduced to the same closed set of
//! [`CanonicalField`]s. The types here carry records through the pipeline:
//!
//! - [`RawRecord`]: a row as the reader saw it, labels untouched
//! - [`MappedRecord`]: a row keyed by canonical field, values not yet cleaned
//! - [`NormalizedRecord`]: a cleaned row that always has a `name`
//! - [`Collection`]: the ordered output of a run

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod field;
pub mod record;
pub mod value;

pub use catalog::{SourceCatalog, SourceSpec, UNKNOWN_GEOGRAPHY};
pub use error::{ModelError, Result};
pub use field::CanonicalField;
pub use record::{
    Collection, MappedRecord, NormalizedRecord, Provenance, RawRecord, Sheet, SourceBatch,
    TaggedRecord,
};
pub use value::{CleanValue, RawValue, SENTINELS, is_sentinel};
