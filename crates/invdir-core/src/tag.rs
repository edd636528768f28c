//! Provenance tagging.

use invdir_model::{Provenance, RawRecord, SourceBatch, TaggedRecord};

/// Pairs each raw row with the provenance of its batch, in row order.
pub fn tag_records<I>(provenance: &Provenance, records: I) -> impl Iterator<Item = TaggedRecord<'_>>
where
    I: IntoIterator<Item = RawRecord>,
{
    records
        .into_iter()
        .map(move |record| TaggedRecord { provenance, record })
}

/// Borrowing form of [`tag_records`] for a whole batch.
pub fn tag_batch(batch: &SourceBatch) -> impl Iterator<Item = TaggedRecord<'_>> {
    tag_records(&batch.provenance, batch.records.iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_shares_the_batch_provenance() {
        let batch = SourceBatch::new(
            Provenance::new("s1", "G1"),
            vec![
                RawRecord::new().with("Name", "A"),
                RawRecord::new().with("Name", "B"),
            ],
        );
        let tagged: Vec<_> = tag_batch(&batch).collect();
        assert_eq!(tagged.len(), 2);
        assert!(tagged.iter().all(|row| row.provenance.source == "s1"));
        assert_eq!(tagged[1].record, batch.records[1]);
    }
}
