//! Snapshot persistence and text report tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use invdir_core::{BatchOutcome, BatchReport, RunOutcome};
use invdir_model::{CanonicalField, CleanValue, Collection, NormalizedRecord};
use invdir_report::{
    RunSummary, SnapshotError, SnapshotInfo, read_snapshot, sha256_hex, snapshot_bytes,
    write_snapshot, write_text_report,
};
use tempfile::TempDir;

fn record(fields: &[(CanonicalField, CleanValue)]) -> NormalizedRecord {
    NormalizedRecord::new(fields.iter().cloned().collect::<BTreeMap<_, _>>()).unwrap()
}

fn sample() -> Collection {
    vec![
        record(&[
            (CanonicalField::Name, CleanValue::from("Acme Capital")),
            (CanonicalField::TicketSize, CleanValue::from("50k")),
            (CanonicalField::Source, CleanValue::from("s1")),
            (CanonicalField::SourceGeography, CleanValue::from("G1")),
        ]),
        record(&[
            (CanonicalField::Name, CleanValue::from("Société Générale Ventures")),
            (CanonicalField::Email, CleanValue::from("hi@sgv.fr")),
            (CanonicalField::Phone, CleanValue::Integer(5550100)),
            (CanonicalField::Source, CleanValue::from("s2")),
        ]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn snapshot_layout_is_sparse_and_ordered() {
    let text = String::from_utf8(snapshot_bytes(&sample()).unwrap()).unwrap();
    let expected = r#"[
  {
    "name": "Acme Capital",
    "ticket_size": "50k",
    "source": "s1",
    "source_geography": "G1"
  },
  {
    "name": "Société Générale Ventures",
    "email": "hi@sgv.fr",
    "phone": 5550100,
    "source": "s2"
  }
]"#;
    assert_eq!(text, expected);
}

#[test]
fn snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("investors.json");
    let collection = sample();

    let info = write_snapshot(&collection, &path).unwrap();
    assert_eq!(info.records, 2);
    assert_eq!(info.sha256, sha256_hex(&fs::read(&path).unwrap()));
    assert!(!dir.path().join("investors.json.tmp").exists());

    assert_eq!(read_snapshot(&path).unwrap(), collection);
}

#[test]
fn rewrites_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = write_snapshot(&sample(), &dir.path().join("a.json")).unwrap();
    let second = write_snapshot(&sample(), &dir.path().join("b.json")).unwrap();
    assert_eq!(first.sha256, second.sha256);
}

#[test]
fn empty_collection_is_an_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    write_snapshot(&Collection::new(), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(read_snapshot(&path).unwrap().is_empty());
}

#[test]
fn unwritable_destination_leaves_nothing() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();
    let target = blocker.join("investors.json");

    let result = write_snapshot(&sample(), &target);

    assert!(matches!(result, Err(SnapshotError::Io { .. })));
    assert!(!target.exists());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "file");
}

#[test]
fn existing_target_survives_failed_write() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("investors.json");
    fs::create_dir(&target).unwrap();

    let result = write_snapshot(&sample(), &target);

    assert!(matches!(result, Err(SnapshotError::AtomicWriteFailed { .. })));
    assert!(target.is_dir());
    assert!(!dir.path().join("investors.json.tmp").exists());
}

#[test]
fn reading_invalid_records_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{"email": "a@b.c"}]"#).unwrap();
    assert!(matches!(
        read_snapshot(&path),
        Err(SnapshotError::Deserialize { .. })
    ));
    assert!(matches!(
        read_snapshot(&dir.path().join("absent.json")),
        Err(SnapshotError::Io { .. })
    ));
}

fn summary() -> RunSummary {
    let collection = sample();
    let outcome = RunOutcome {
        collection: collection.clone(),
        batches: vec![
            BatchReport {
                source: "s1".to_string(),
                geography: "G1".to_string(),
                path: PathBuf::from("res/s1.csv"),
                outcome: BatchOutcome::Loaded {
                    raw_records: 3,
                    kept: 1,
                },
            },
            BatchReport {
                source: "s2".to_string(),
                geography: "Unknown".to_string(),
                path: PathBuf::from("res/s2.csv"),
                outcome: BatchOutcome::Loaded {
                    raw_records: 1,
                    kept: 1,
                },
            },
            BatchReport {
                source: "x".to_string(),
                geography: "GX".to_string(),
                path: PathBuf::from("res/x.csv"),
                outcome: BatchOutcome::Missing,
            },
        ],
    };
    RunSummary::new(&outcome, &collection, Some(0)).with_snapshot(SnapshotInfo {
        path: PathBuf::from("out/investors.json"),
        records: 2,
        bytes: 10,
        sha256: "abc123".to_string(),
    })
}

#[test]
fn text_report_layout() {
    insta::assert_snapshot!(summary().to_string(), @r"
    Investor directory
    Records before cleaning: 4
    Records after cleaning: 2
    Records removed: 2
    Duplicates removed: 0
    Total records: 2

    Batches:
      s1 (G1): loaded, 3 read, 1 kept
      s2 (Unknown): loaded, 1 read, 1 kept
      x (GX): missing, res/x.csv

    By source:
      s1: 1
      s2: 1

    By geography:
      G1: 1

    By type:
      (none)

    Top stages:
      (none)

    Contact coverage:
      email: 1 (50.0%)
      linkedin: 0 (0.0%)
      website: 0 (0.0%)

    Snapshot: out/investors.json
    SHA-256: abc123
    ");
}

#[test]
fn text_report_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    let summary = summary();
    write_text_report(&summary, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), summary.to_string());
}
