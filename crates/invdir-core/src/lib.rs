//! Core processing for the investor directory.
//!
//! Records flow tag → map → clean, batch by batch, into a single
//! [`Collection`](invdir_model::Collection). Statistics and optional name
//! de-duplication work on the finished collection.

#![deny(unsafe_code)]

pub mod clean;
pub mod dedupe;
pub mod pipeline;
pub mod stats;
pub mod tag;

pub use clean::{clean_collection, clean_record, clean_value};
pub use dedupe::dedupe_by_name;
pub use pipeline::{
    BatchOutcome, BatchReport, RunOutcome, aggregate, clean_batch, run_pipeline,
};
pub use stats::{Coverage, Stats, TOP_STAGES, Tally};
pub use tag::{tag_batch, tag_records};
