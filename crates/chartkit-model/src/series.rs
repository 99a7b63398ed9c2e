//! Chart-ready output types.

use serde::{Deserialize, Serialize};

/// One named, valued point handed to a renderer.
///
/// `value` is a rounded mean for averaged views and an integer count for
/// frequency views. `count` carries the number of contributing records for
/// averaged views and is omitted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl SeriesPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            count: None,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }
}

/// Summary of the numeric values found in one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: u64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}
