//! Record cleaning.
//!
//! Text is trimmed and placeholder text ("nan", "N/A", "-", ...) is dropped.
//! Numbers are kept as read; only non-finite reals are dropped, since that is
//! how a reader marks a missing numeric cell. A record left without a `name`
//! is discarded.

use std::collections::BTreeMap;

use invdir_model::{
    CanonicalField, CleanValue, Collection, MappedRecord, NormalizedRecord, RawValue, is_sentinel,
};

/// Cleans one value, returning `None` when it carries no data.
pub fn clean_value(value: &RawValue) -> Option<CleanValue> {
    match value {
        RawValue::Missing | RawValue::Boolean(_) => None,
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if is_sentinel(trimmed) {
                None
            } else {
                Some(CleanValue::Text(trimmed.to_string()))
            }
        }
        RawValue::Integer(number) => Some(CleanValue::Integer(*number)),
        RawValue::Real(number) if number.is_finite() => Some(CleanValue::Real(*number)),
        RawValue::Real(_) => None,
    }
}

/// Cleans a mapped record. Returns `None` when no usable name survives.
pub fn clean_record(record: &MappedRecord) -> Option<NormalizedRecord> {
    let fields: BTreeMap<CanonicalField, CleanValue> = record
        .iter()
        .filter_map(|(field, value)| clean_value(value).map(|clean| (field, clean)))
        .collect();
    if !fields.contains_key(&CanonicalField::Name) {
        return None;
    }
    NormalizedRecord::new(fields).ok()
}

/// Runs every record of an existing collection through the cleaner again.
pub fn clean_collection(collection: &Collection) -> Collection {
    collection
        .iter()
        .filter_map(|record| clean_record(&MappedRecord::from(record)))
        .collect()
}
