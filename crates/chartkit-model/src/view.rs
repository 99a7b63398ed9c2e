//! View identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Selects which grouping, metric and ranking policy produces a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// Average value per primary category, top 10.
    ByCategoryAverage,
    /// Average value per period, ordered by period.
    ByTimeAverage,
    /// Record counts per secondary category, top 8.
    BySecondaryCategoryDistribution,
    /// Record counts per primary category, top 15.
    ByCategoryFrequency,
}

impl ViewKind {
    /// All views in presentation order.
    pub const ALL: [ViewKind; 4] = [
        ViewKind::ByCategoryAverage,
        ViewKind::ByTimeAverage,
        ViewKind::BySecondaryCategoryDistribution,
        ViewKind::ByCategoryFrequency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ByCategoryAverage => "by-category-average",
            Self::ByTimeAverage => "by-time-average",
            Self::BySecondaryCategoryDistribution => "by-secondary-category-distribution",
            Self::ByCategoryFrequency => "by-category-frequency",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownViewKind(s.to_string()))
    }
}
