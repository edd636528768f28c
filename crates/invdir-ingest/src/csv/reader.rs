//! CSV source reading.

use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use invdir_model::{RawRecord, Sheet};

use super::infer::{convert_cell, infer_column};
use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (100 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Decodes file bytes as UTF-8, dropping a leading byte-order mark.
///
/// UTF-16 files are rejected rather than guessed at.
pub fn decode_utf8(path: &Path, bytes: &[u8]) -> Result<String> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    let body = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    std::str::from_utf8(body)
        .map(str::to_string)
        .map_err(|e| IngestError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: e.valid_up_to(),
        })
}

/// Reads a CSV file into a single sheet named after the file stem.
///
/// The first row is the header. Rows longer than the header are skipped;
/// shorter rows are padded with missing values. A file with no data rows
/// yields no sheets.
pub fn read_csv_sheets(path: &Path, max_size: u64) -> Result<Vec<Sheet>> {
    check_file_size(path, max_size)?;
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    let text = decode_utf8(path, &bytes)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sheet")
        .to_string();
    Ok(parse_csv_text(path, &name, &text)?.into_iter().collect())
}

/// Parses decoded CSV text. Returns `None` when there are no data rows.
pub fn parse_csv_text(path: &Path, name: &str, text: &str) -> Result<Option<Sheet>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = reader.records();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row
            .map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(|label| label.trim_matches('\u{feff}').to_string())
            .collect(),
        None => return Ok(None),
    };

    let width = headers.len();
    let mut data: Vec<StringRecord> = Vec::new();
    let mut skipped = 0usize;
    for row in rows {
        let row = row.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if row.len() > width {
            skipped += 1;
            continue;
        }
        data.push(row);
    }
    if skipped > 0 {
        debug!(
            path = %path.display(),
            skipped,
            "skipped rows with more fields than the header"
        );
    }
    if data.is_empty() {
        return Ok(None);
    }

    let kinds: Vec<_> = (0..width)
        .map(|column| infer_column(data.iter().map(|row| row.get(column).unwrap_or(""))))
        .collect();
    debug!(
        path = %path.display(),
        columns = width,
        rows = data.len(),
        "parsed CSV sheet"
    );

    let records = data
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(&kinds)
                .enumerate()
                .map(|(column, (label, kind))| {
                    let cell = row.get(column).unwrap_or("");
                    (label.as_str(), convert_cell(cell, *kind))
                })
                .collect::<RawRecord>()
        })
        .collect();

    Ok(Some(Sheet {
        name: name.to_string(),
        records,
    }))
}
