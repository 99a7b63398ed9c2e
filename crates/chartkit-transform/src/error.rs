//! Error type for the transformation crate.

use chartkit_model::{ModelError, ViewKind};
use thiserror::Error;

/// Contract violations detected at the engine boundary.
///
/// Malformed cell values never surface here; they degrade to strings or are
/// left out of a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Rows do not match the table header.
    #[error("structurally invalid input: {0}")]
    Structure(#[from] ModelError),

    /// The view table has no entry for the requested view.
    #[error("no policy configured for view '{0}'")]
    ViewNotConfigured(ViewKind),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
