//! CSV reading utilities.

mod infer;
mod reader;

pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, decode_utf8, parse_csv_text, read_csv_sheets,
};
