//! CSV file reading into header-keyed raw rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chartkit_model::{RawRow, RawTable};
use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

use super::header::{check_header, normalize_header};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Label used in errors for text that did not come from a file.
pub(crate) const INLINE_SOURCE: &str = "<inline>";

/// Options for loading a CSV source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Files larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a limit and return the size in bytes.
pub(crate) fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(metadata.len())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub(crate) fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped in parse_csv)
    Ok(())
}

/// Reads a CSV file into raw rows keyed by the first line's column names.
///
/// Blank lines are skipped. Rows shorter than the header are padded with
/// empty strings and extra trailing fields are dropped; both are reported as
/// one aggregated warning. Cell values are kept verbatim (untrimmed).
pub fn read_csv_rows(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let size = check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    info!(path = %path.display(), "loading csv");
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|e| open_error(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "csv file loaded");

    let text = String::from_utf8(bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;
    parse_csv(&text, path)
}

/// Parses CSV text that is already in memory.
pub fn parse_csv_str(text: &str) -> Result<RawTable> {
    parse_csv(text, Path::new(INLINE_SOURCE))
}

fn parse_csv(text: &str, path: &Path) -> Result<RawTable> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let parse_error = |error: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    };

    let mut records = reader.records();
    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(parse_error)?;
                if !is_blank_line(&record) {
                    break record;
                }
            }
            None => {
                return Err(IngestError::NoHeaderDetected {
                    path: path.to_path_buf(),
                });
            }
        }
    };
    let columns: Vec<String> = header.iter().map(normalize_header).collect();
    check_header(&columns, path)?;

    let mut table = RawTable::new(columns);
    let mut ragged = 0usize;
    let mut blank_lines = 0usize;
    for record in records {
        let record = record.map_err(parse_error)?;
        if is_blank_line(&record) {
            blank_lines += 1;
            continue;
        }
        if record.len() != table.columns.len() {
            ragged += 1;
        }
        let mut row = RawRow::with_capacity(table.columns.len());
        for (idx, column) in table.columns.iter().enumerate() {
            row.push(column.as_str(), record.get(idx).unwrap_or(""));
        }
        table.push_row(row);
    }

    info!(
        path = %path.display(),
        columns = table.columns.len(),
        raw_rows = table.len(),
        "csv parsing complete"
    );
    if ragged > 0 {
        warn!(
            path = %path.display(),
            ragged_rows = ragged,
            expected_fields = table.columns.len(),
            "csv rows with unexpected field count were padded or truncated"
        );
    }
    if let Some(first) = table.rows.first() {
        debug!(
            path = %path.display(),
            first_row = ?first.iter().collect::<Vec<_>>(),
            "first data row"
        );
    }
    if blank_lines > 0 {
        debug!(path = %path.display(), blank_lines, "skipped blank lines");
    }

    Ok(table)
}

/// A line with no content at all, which the tokenizer reports as one empty field.
fn is_blank_line(record: &csv::StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record.get(0).is_some_and(str::is_empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_rows_keyed_by_header() {
        let file = create_temp_csv(b"Brand,Price,Year\nToyota,\"20,000\",2019\nFord,15000,2018\n");
        let table = read_csv_rows(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(table.columns, vec!["Brand", "Price", "Year"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("Price"), Some("20,000"));
        assert_eq!(table.rows[1].get("Brand"), Some("Ford"));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let table = parse_csv_str("Brand,Price\n  Kia ,  9000 \n").unwrap();
        assert_eq!(table.rows[0].get("Brand"), Some("  Kia "));
        assert_eq!(table.rows[0].get("Price"), Some("  9000 "));
    }

    #[test]
    fn test_ragged_rows_are_padded_and_truncated() {
        let table = parse_csv_str("A,B,C\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("B"), Some(""));
        assert_eq!(table.rows[0].get("C"), Some(""));
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.rows[1].get("C"), Some("3"));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = parse_csv_str("\nA,B\n\n1,2\n\n").unwrap();
        assert_eq!(table.columns, vec!["A", "B"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_header_only_yields_empty_table() {
        let table = parse_csv_str("A,B\n").unwrap();
        assert_eq!(table.columns, vec!["A", "B"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(
            parse_csv_str(""),
            Err(IngestError::NoHeaderDetected { .. })
        ));
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n".as_bytes());
        let table = read_csv_rows(file.path(), &IngestOptions::default()).unwrap();
        assert_eq!(table.columns, vec!["A", "B"]);
    }

    #[test]
    fn test_utf16_is_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        assert!(matches!(
            read_csv_rows(file.path(), &IngestOptions::default()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_size_limit() {
        let file = create_temp_csv(b"A,B\n1,2\n");
        let options = IngestOptions::default().with_max_file_size(4);
        assert!(matches!(
            read_csv_rows(file.path(), &options),
            Err(IngestError::FileTooLarge { max_size: 4, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_rows(
            Path::new("/definitely/not/here.csv"),
            &IngestOptions::default(),
        );
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
