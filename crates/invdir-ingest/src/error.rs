//! Error types for source ingestion.

use std::path::PathBuf;
use thiserror::Error;

use invdir_model::ModelError;

/// Errors that can occur while reading source files or the catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Decoding Errors ===
    /// File starts with a byte-order mark for an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte {offset}")]
    InvalidUtf8 { path: PathBuf, offset: usize },

    // === CSV Parsing Errors ===
    /// The CSV parser rejected the file.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    // === Catalog Errors ===
    /// Catalog file could not be parsed.
    #[error("failed to parse source catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog parsed but violates an invariant.
    #[error("invalid source catalog {path}: {source}")]
    InvalidCatalog {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    /// True when the backing file does not exist (as opposed to being unreadable).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
