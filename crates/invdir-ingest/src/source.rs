//! The reader seam between the pipeline and the file system.

use std::path::Path;

use invdir_model::Sheet;

use crate::csv::{MAX_CSV_FILE_SIZE, read_csv_sheets};
use crate::error::Result;

/// Reads a tabular source file into zero or more sheets.
///
/// Implementations must report a missing file as
/// [`IngestError::FileNotFound`](crate::IngestError::FileNotFound) so callers
/// can tell it apart from a file that exists but cannot be read.
pub trait SourceReader {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>>;
}

/// Reads comma-separated UTF-8 files.
#[derive(Debug, Clone, Copy)]
pub struct CsvReader {
    max_file_size: u64,
}

impl CsvReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for CsvReader {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>> {
        read_csv_sheets(path, self.max_file_size)
    }
}
