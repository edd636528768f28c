//! Property tests for label reconciliation.

use invdir_map::{SYNONYMS, map_label, map_record, synonyms_for};
use invdir_model::{CanonicalField, RawRecord, RawValue};
use proptest::prelude::*;

fn synonym_index() -> impl Strategy<Value = usize> {
    0..SYNONYMS.len()
}

/// Two labels (possibly equal) that resolve to the same field.
fn same_field_pair() -> impl Strategy<Value = (&'static str, &'static str, CanonicalField)> {
    synonym_index().prop_flat_map(|index| {
        let (label, field) = SYNONYMS[index];
        (
            Just(label),
            proptest::sample::select(synonyms_for(field)),
            Just(field),
        )
    })
}

fn decorate(label: &str, upper: bool, pad_left: usize, pad_right: usize) -> String {
    let cased = if upper {
        label.to_uppercase()
    } else {
        label.to_string()
    };
    format!("{}{}{}", " ".repeat(pad_left), cased, " ".repeat(pad_right))
}

proptest! {
    #[test]
    fn decorated_synonyms_still_map(
        index in synonym_index(),
        upper in any::<bool>(),
        pad_left in 0usize..3,
        pad_right in 0usize..3,
    ) {
        let (label, field) = SYNONYMS[index];
        prop_assert_eq!(map_label(&decorate(label, upper, pad_left, pad_right)), Some(field));
    }

    #[test]
    fn last_processed_label_wins(
        (label_a, label_b, field) in same_field_pair(),
        a in "[a-zA-Z ]{1,12}",
        b in "[a-zA-Z ]{1,12}",
    ) {
        let record = RawRecord::new()
            .with(label_a, a.as_str())
            .with(label_b, b.as_str());
        let mapped = map_record(&record);

        prop_assert_eq!(mapped.len(), 1);
        prop_assert_eq!(mapped.get(field), Some(&RawValue::from(b.as_str())));
    }

    #[test]
    fn unknown_labels_never_survive(label in "x-[a-z]{1,10}") {
        let record = RawRecord::new().with(label.as_str(), "value");
        prop_assert!(map_record(&record).is_empty());
    }
}
