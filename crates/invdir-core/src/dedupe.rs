use std::collections::BTreeSet;

use invdir_model::Collection;

/// Drops records whose name repeats an earlier one, compared trimmed and
/// case-insensitively. Returns the kept records and how many were removed.
pub fn dedupe_by_name(collection: Collection) -> (Collection, usize) {
    let before = collection.len();
    let mut seen = BTreeSet::new();
    let kept: Collection = collection
        .into_iter()
        .filter(|record| seen.insert(record.name().to_string().trim().to_lowercase()))
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use invdir_model::{CanonicalField, CleanValue, NormalizedRecord};

    use super::*;

    fn record(name: &str, source: &str) -> NormalizedRecord {
        let fields = BTreeMap::from([
            (CanonicalField::Name, CleanValue::from(name)),
            (CanonicalField::Source, CleanValue::from(source)),
        ]);
        NormalizedRecord::new(fields).unwrap()
    }

    #[test]
    fn keeps_first_occurrence() {
        let collection: Collection = vec![
            record("Acme Capital", "s1"),
            record("Beta", "s1"),
            record("ACME CAPITAL", "s2"),
            record("beta", "s2"),
            record("Gamma", "s2"),
        ]
        .into_iter()
        .collect();
        let (kept, removed) = dedupe_by_name(collection);
        assert_eq!(removed, 2);
        let names: Vec<String> = kept.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["Acme Capital", "Beta", "Gamma"]);
        assert_eq!(
            kept.records()[0].get(CanonicalField::Source),
            Some(&CleanValue::from("s1"))
        );
    }

    #[test]
    fn no_duplicates_removes_nothing() {
        let collection: Collection = vec![record("A", "s1"), record("B", "s1")]
            .into_iter()
            .collect();
        let (kept, removed) = dedupe_by_name(collection.clone());
        assert_eq!(removed, 0);
        assert_eq!(kept, collection);
    }
}
