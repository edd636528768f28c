use anyhow::Result;

use invdir_cli::build::{BuildOptions, run_build as build, run_sources as count_sources};
use invdir_map::synonyms_for;
use invdir_model::CanonicalField;
use invdir_report::{RunSummary, SourceCounts};

use crate::cli::{BuildArgs, SourcesArgs};

pub fn run_build(args: &BuildArgs) -> Result<RunSummary> {
    let options = BuildOptions {
        resources: args.resources.clone(),
        output: args.output.clone(),
        catalog: args.catalog.clone(),
        report: args.report.clone(),
        dedupe: args.dedupe,
    };
    build(&options)
}

pub fn run_sources(args: &SourcesArgs) -> Result<SourceCounts> {
    count_sources(&args.snapshot, args.output.as_deref())
}

pub fn run_fields() -> Vec<(CanonicalField, Vec<&'static str>)> {
    CanonicalField::ALL
        .iter()
        .map(|field| (*field, synonyms_for(*field)))
        .collect()
}
