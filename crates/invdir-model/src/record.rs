//! Records at each stage of the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, Result};
use crate::field::CanonicalField;
use crate::value::{CleanValue, RawValue, is_sentinel};

/// One row of a source file, labels and values as read.
///
/// Field order is the source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Vec<(String, RawValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.push((label.into(), value.into()));
    }

    /// Builder form of [`RawRecord::push`].
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(label, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields
            .iter()
            .map(|(label, value)| (label.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<L: Into<String>, V: Into<RawValue>> FromIterator<(L, V)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (L, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        }
    }
}

/// A partition of a source file (a CSV file has exactly one).
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub records: Vec<RawRecord>,
}

/// Where a batch of records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Short internal key, e.g. `indian_vc`.
    pub source: String,
    /// Human-readable geography label.
    pub geography: String,
}

impl Provenance {
    pub fn new(source: impl Into<String>, geography: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            geography: geography.into(),
        }
    }
}

/// All raw rows of one source file together with their provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBatch {
    pub provenance: Provenance,
    pub records: Vec<RawRecord>,
}

impl SourceBatch {
    pub fn new(provenance: Provenance, records: Vec<RawRecord>) -> Self {
        Self {
            provenance,
            records,
        }
    }

    /// Flattens reader sheets into one batch, sheet order then row order.
    pub fn from_sheets(provenance: Provenance, sheets: Vec<Sheet>) -> Self {
        let records = sheets.into_iter().flat_map(|sheet| sheet.records).collect();
        Self::new(provenance, records)
    }
}

/// A raw row paired with the provenance of its batch.
///
/// The provenance pair is written in canonical form when the row is mapped,
/// after all source columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedRecord<'a> {
    pub provenance: &'a Provenance,
    pub record: RawRecord,
}

/// A row keyed by canonical field, values not yet validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedRecord {
    fields: BTreeMap<CanonicalField, RawValue>,
}

impl MappedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field`, replacing and returning any earlier value.
    pub fn insert(&mut self, field: CanonicalField, value: RawValue) -> Option<RawValue> {
        self.fields.insert(field, value)
    }

    pub fn get(&self, field: CanonicalField) -> Option<&RawValue> {
        self.fields.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &RawValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for MappedRecord {
    type Item = (CanonicalField, RawValue);
    type IntoIter = std::collections::btree_map::IntoIter<CanonicalField, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(CanonicalField, RawValue)> for MappedRecord {
    fn from_iter<T: IntoIterator<Item = (CanonicalField, RawValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<&NormalizedRecord> for MappedRecord {
    fn from(record: &NormalizedRecord) -> Self {
        record
            .iter()
            .map(|(field, value)| (field, RawValue::from(value.clone())))
            .collect()
    }
}

/// A cleaned record: always named, no empty or placeholder values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<CanonicalField, CleanValue>")]
pub struct NormalizedRecord {
    fields: BTreeMap<CanonicalField, CleanValue>,
}

impl NormalizedRecord {
    /// Validates `fields` against the record invariants.
    pub fn new(fields: BTreeMap<CanonicalField, CleanValue>) -> Result<Self> {
        for (field, value) in &fields {
            match value {
                CleanValue::Text(text) if text.trim().is_empty() => {
                    return Err(ModelError::EmptyValue { field: *field });
                }
                CleanValue::Text(text) if is_sentinel(text) => {
                    return Err(ModelError::SentinelValue {
                        field: *field,
                        value: text.clone(),
                    });
                }
                CleanValue::Real(number) if !number.is_finite() => {
                    return Err(ModelError::NonFiniteNumber { field: *field });
                }
                _ => {}
            }
        }
        if !fields.contains_key(&CanonicalField::Name) {
            return Err(ModelError::MissingName);
        }
        Ok(Self { fields })
    }

    pub fn name(&self) -> &CleanValue {
        // Presence is checked in `new`.
        &self.fields[&CanonicalField::Name]
    }

    pub fn get(&self, field: CanonicalField) -> Option<&CleanValue> {
        self.fields.get(&field)
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.fields.contains_key(&field)
    }

    /// Fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &CleanValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<BTreeMap<CanonicalField, CleanValue>> for NormalizedRecord {
    type Error = ModelError;

    fn try_from(fields: BTreeMap<CanonicalField, CleanValue>) -> Result<Self> {
        Self::new(fields)
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// The ordered output of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<NormalizedRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: NormalizedRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<NormalizedRecord> for Collection {
    fn extend<T: IntoIterator<Item = NormalizedRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<NormalizedRecord> for Collection {
    fn from_iter<T: IntoIterator<Item = NormalizedRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a NormalizedRecord;
    type IntoIter = std::slice::Iter<'a, NormalizedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Collection {
    type Item = NormalizedRecord;
    type IntoIter = std::vec::IntoIter<NormalizedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
