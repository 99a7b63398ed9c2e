//! Error types for structurally invalid input.
//!
//! Data-quality problems (unparseable numbers, missing categories) are never
//! errors in chartkit. The variants here describe input that breaks the loader
//! contract: rows whose key set disagrees with the table header.

use thiserror::Error;

/// Errors raised when rows, schemas or identifiers violate the data contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The header lists the same column twice.
    #[error("duplicate column '{column}' in header")]
    DuplicateColumn { column: String },

    /// A column name is empty after trimming.
    #[error("column {index} has an empty name")]
    EmptyColumnName { index: usize },

    /// A row carries a different number of fields than the header.
    #[error("row {row} has {found} fields, expected {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row names a field that is not part of the header.
    #[error("row {row} has unexpected field '{field}'")]
    UnexpectedField { row: usize, field: String },

    /// A row names the same field twice.
    #[error("row {row} repeats field '{field}'")]
    DuplicateField { row: usize, field: String },

    /// A view identifier did not match any known view.
    #[error("unknown view kind '{0}'")]
    UnknownViewKind(String),

    /// The dataset schema is unusable.
    #[error("invalid dataset schema: {reason}")]
    InvalidSchema { reason: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::FieldCount {
            row: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "row 3 has 2 fields, expected 4");

        let err = ModelError::UnknownViewKind("by-colour".to_string());
        assert_eq!(err.to_string(), "unknown view kind 'by-colour'");
    }
}
