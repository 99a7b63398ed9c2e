//! CSV loading: header handling and row reading.

mod header;
mod reader;

pub use reader::{IngestOptions, MAX_CSV_FILE_SIZE, parse_csv_str, read_csv_rows};
