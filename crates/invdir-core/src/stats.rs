//! Summary statistics over a finished collection.

use std::collections::BTreeMap;

use invdir_model::{CanonicalField, Collection};

/// Number of stages kept in [`Stats::by_stage`].
pub const TOP_STAGES: usize = 10;

/// Value counts, largest first; equal counts keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    /// Counts values. Records are expected to arrive in collection order.
    pub fn count<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions: BTreeMap<String, usize> = BTreeMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();
        for value in values {
            let value = value.into();
            match positions.get(&value) {
                Some(&index) => entries[index].1 += 1,
                None => {
                    positions.insert(value.clone(), entries.len());
                    entries.push((value, 1));
                }
            }
        }
        // Stable sort keeps first appearance among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Keeps only the `limit` largest entries.
    #[must_use]
    pub fn top(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }

    pub fn get(&self, value: &str) -> usize {
        self.entries
            .iter()
            .find(|(key, _)| key == value)
            .map_or(0, |(_, count)| *count)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How many records carry a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    pub field: CanonicalField,
    pub present: usize,
    /// `present / total * 100`, or 0 for an empty collection.
    pub percent: f64,
}

impl Coverage {
    fn measure(collection: &Collection, field: CanonicalField) -> Self {
        let present = collection
            .iter()
            .filter(|record| record.contains(field))
            .count();
        let percent = if collection.is_empty() {
            0.0
        } else {
            present as f64 / collection.len() as f64 * 100.0
        };
        Self {
            field,
            present,
            percent,
        }
    }
}

/// Derived view of a collection; recomputed on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub by_source: Tally,
    pub by_geography: Tally,
    pub by_type: Tally,
    /// The [`TOP_STAGES`] most common stages.
    pub by_stage: Tally,
    /// Email, LinkedIn and website coverage, in that order.
    pub coverage: [Coverage; 3],
}

impl Stats {
    pub fn compute(collection: &Collection) -> Self {
        Self {
            total: collection.len(),
            by_source: field_tally(collection, CanonicalField::Source),
            by_geography: field_tally(collection, CanonicalField::SourceGeography),
            by_type: field_tally(collection, CanonicalField::Type),
            by_stage: field_tally(collection, CanonicalField::Stage).top(TOP_STAGES),
            coverage: [
                Coverage::measure(collection, CanonicalField::Email),
                Coverage::measure(collection, CanonicalField::Linkedin),
                Coverage::measure(collection, CanonicalField::Website),
            ],
        }
    }
}

/// Counts the display form of `field`; records without it are not counted.
fn field_tally(collection: &Collection, field: CanonicalField) -> Tally {
    Tally::count(
        collection
            .iter()
            .filter_map(|record| record.get(field))
            .map(ToString::to_string),
    )
}
