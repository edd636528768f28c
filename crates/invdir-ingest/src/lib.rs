//! Source ingestion for the investor directory.
//!
//! This crate turns the files named in a [`SourceCatalog`] into raw sheets:
//!
//! - **Catalog Loading**: TOML source lists with a source → geography table
//! - **CSV Reading**: UTF-8 CSV with BOM handling and column typing
//! - **Reader Seam**: [`SourceReader`] separates "file not found" from
//!   "file unreadable" so the pipeline can treat them differently
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use invdir_ingest::{CsvReader, SourceReader, load_catalog, resolve_source_path};
//!
//! let resources = Path::new("resources");
//! let catalog = load_catalog(&resources.join("sources.toml"))?;
//! let reader = CsvReader::new();
//! for spec in &catalog.sources {
//!     let sheets = reader.read_sheets(&resolve_source_path(resources, spec))?;
//! }
//! ```
//!
//! [`SourceCatalog`]: invdir_model::SourceCatalog

#![deny(unsafe_code)]

mod catalog;
mod csv;
mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Catalog ===
pub use catalog::{load_catalog, parse_catalog, resolve_source_path};

// === CSV Reading ===
pub use csv::{MAX_CSV_FILE_SIZE, check_file_size, decode_utf8, parse_csv_text, read_csv_sheets};

// === Reader Seam ===
pub use source::{CsvReader, SourceReader};
