//! Tests for invdir-model record types.

use std::collections::BTreeMap;

use invdir_model::{
    CanonicalField, CleanValue, Collection, MappedRecord, ModelError, NormalizedRecord,
    Provenance, RawRecord, RawValue, Sheet, SourceBatch,
};

fn record(fields: &[(CanonicalField, CleanValue)]) -> NormalizedRecord {
    NormalizedRecord::new(fields.iter().cloned().collect()).unwrap()
}

#[test]
fn normalized_record_requires_name() {
    let mut fields = BTreeMap::new();
    fields.insert(CanonicalField::Email, CleanValue::from("a@b.com"));
    assert_eq!(
        NormalizedRecord::new(fields),
        Err(ModelError::MissingName)
    );
}

#[test]
fn normalized_record_rejects_placeholders() {
    let mut fields = BTreeMap::new();
    fields.insert(CanonicalField::Name, CleanValue::from("Acme"));
    fields.insert(CanonicalField::Stage, CleanValue::from("N/A"));
    assert!(matches!(
        NormalizedRecord::new(fields),
        Err(ModelError::SentinelValue {
            field: CanonicalField::Stage,
            ..
        })
    ));
}

#[test]
fn normalized_record_rejects_non_finite() {
    let mut fields = BTreeMap::new();
    fields.insert(CanonicalField::Name, CleanValue::from("Acme"));
    fields.insert(CanonicalField::TicketSize, CleanValue::Real(f64::NAN));
    assert_eq!(
        NormalizedRecord::new(fields),
        Err(ModelError::NonFiniteNumber {
            field: CanonicalField::TicketSize
        })
    );
}

#[test]
fn record_serializes_sparse_in_canonical_order() {
    let rec = record(&[
        (CanonicalField::Source, CleanValue::from("s1")),
        (CanonicalField::TicketSize, CleanValue::Integer(50_000)),
        (CanonicalField::Name, CleanValue::from("Acme Capital")),
    ]);
    let json = serde_json::to_string(&rec).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Acme Capital","ticket_size":50000,"source":"s1"}"#
    );
}

#[test]
fn deserialization_enforces_invariants() {
    let missing_name = r#"{"email":"a@b.com"}"#;
    assert!(serde_json::from_str::<NormalizedRecord>(missing_name).is_err());

    let unknown_field = r#"{"name":"Acme","title":"Partner"}"#;
    assert!(serde_json::from_str::<NormalizedRecord>(unknown_field).is_err());

    let ok = r#"{"name":"Acme","city":"Pune"}"#;
    let rec: NormalizedRecord = serde_json::from_str(ok).unwrap();
    assert_eq!(rec.get(CanonicalField::City), Some(&CleanValue::from("Pune")));
}

#[test]
fn collection_round_trips_in_order() {
    let collection: Collection = vec![
        record(&[(CanonicalField::Name, CleanValue::from("Zeta"))]),
        record(&[
            (CanonicalField::Name, CleanValue::from("Alpha")),
            (CanonicalField::Phone, CleanValue::Integer(98_765)),
        ]),
        record(&[(CanonicalField::Name, CleanValue::from("Ünïcödé Ventures"))]),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&collection).unwrap();
    assert!(json.contains("Ünïcödé"));
    let back: Collection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, collection);
}

#[test]
fn mapped_record_from_normalized() {
    let rec = record(&[
        (CanonicalField::Name, CleanValue::from("Acme")),
        (CanonicalField::TicketSize, CleanValue::Real(1.5)),
    ]);
    let mapped = MappedRecord::from(&rec);
    assert_eq!(mapped.len(), 2);
    assert_eq!(
        mapped.get(CanonicalField::Name),
        Some(&RawValue::Text("Acme".to_string()))
    );
    assert_eq!(
        mapped.get(CanonicalField::TicketSize),
        Some(&RawValue::Real(1.5))
    );
}

#[test]
fn batch_from_sheets_keeps_order() {
    let sheets = vec![
        Sheet {
            name: "first".to_string(),
            records: vec![RawRecord::new().with("Name", "a"), RawRecord::new().with("Name", "b")],
        },
        Sheet {
            name: "second".to_string(),
            records: vec![RawRecord::new().with("Name", "c")],
        },
    ];
    let batch = SourceBatch::from_sheets(Provenance::new("s1", "G1"), sheets);
    let names: Vec<_> = batch
        .records
        .iter()
        .map(|r| r.iter().next().unwrap().1.clone())
        .collect();
    assert_eq!(
        names,
        vec![RawValue::from("a"), RawValue::from("b"), RawValue::from("c")]
    );
}
