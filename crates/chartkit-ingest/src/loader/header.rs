//! Header normalization and checks.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Normalizes a header value: strips a stray BOM and surrounding whitespace.
pub(crate) fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}

/// Rejects blank and repeated column names.
pub(crate) fn check_header(columns: &[String], path: &Path) -> Result<()> {
    let mut seen = BTreeSet::new();
    for (index, column) in columns.iter().enumerate() {
        if column.is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
                index,
            });
        }
        if !seen.insert(column.as_str()) {
            return Err(IngestError::DuplicateColumn {
                path: path.to_path_buf(),
                column: column.clone(),
            });
        }
    }
    Ok(())
}
