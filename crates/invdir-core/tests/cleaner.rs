//! Property tests for the record cleaner.

use invdir_core::{clean_collection, clean_record};
use invdir_model::{CanonicalField, Collection, MappedRecord, RawValue, is_sentinel};
use proptest::prelude::*;

fn raw_value() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Missing),
        prop::sample::select(vec!["", " ", "nan", "N/A", "na", "-", " NaN "])
            .prop_map(RawValue::from),
        "[ a-zA-Z0-9@.]{0,12}".prop_map(RawValue::Text),
        any::<i64>().prop_map(RawValue::Integer),
        any::<f64>().prop_map(RawValue::Real),
        any::<bool>().prop_map(RawValue::Boolean),
    ]
}

fn mapped_record() -> impl Strategy<Value = MappedRecord> {
    prop::collection::vec(
        (prop::sample::select(CanonicalField::ALL.to_vec()), raw_value()),
        0..8,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn cleaning_twice_changes_nothing(records in prop::collection::vec(mapped_record(), 0..6)) {
        let once: Collection = records.iter().filter_map(clean_record).collect();
        let twice = clean_collection(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn survivors_are_named_and_clean(record in mapped_record()) {
        if let Some(cleaned) = clean_record(&record) {
            prop_assert!(cleaned.contains(CanonicalField::Name));
            for (_, value) in cleaned.iter() {
                if let Some(text) = value.as_text() {
                    prop_assert!(!is_sentinel(text));
                    prop_assert_eq!(text, text.trim());
                }
            }
        } else {
            let usable_name = match record.get(CanonicalField::Name) {
                Some(RawValue::Text(text)) => !is_sentinel(text),
                Some(RawValue::Integer(_)) => true,
                Some(RawValue::Real(number)) => number.is_finite(),
                _ => false,
            };
            prop_assert!(!usable_name);
        }
    }
}
