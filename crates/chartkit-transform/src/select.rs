//! Series selection: view kind in, ordered points out.

use chartkit_model::{SeriesPoint, TypedRecord, ViewKind};

use crate::error::{Result, TransformError};
use crate::views::ViewTable;

/// Computes the series for `kind` using the policy held in `table`.
///
/// Empty input yields an empty series. Each call recomputes from `records`.
///
/// # Errors
///
/// Returns [`TransformError::ViewNotConfigured`] when `table` has no entry for
/// `kind`.
pub fn select_series(
    records: &[TypedRecord],
    kind: ViewKind,
    table: &ViewTable,
) -> Result<Vec<SeriesPoint>> {
    let policy = table
        .policy(kind)
        .ok_or(TransformError::ViewNotConfigured(kind))?;
    Ok(policy.compute(records))
}

/// Computes every view in `table`, in table order.
pub fn select_all(records: &[TypedRecord], table: &ViewTable) -> Vec<(ViewKind, Vec<SeriesPoint>)> {
    table
        .iter()
        .map(|policy| (policy.kind, policy.compute(records)))
        .collect()
}
