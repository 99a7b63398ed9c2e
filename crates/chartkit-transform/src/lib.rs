//! Record coercion and aggregation for chartkit.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`prepare_records`]: validate a [`RawTable`](chartkit_model::RawTable),
//!    drop blank rows ([`filter`]) and coerce cells ([`coerce`])
//! 2. [`select_series`]: look up the [`ViewPolicy`] for a
//!    [`ViewKind`](chartkit_model::ViewKind) in a [`ViewTable`], group and
//!    reduce ([`aggregate`]), then sort and truncate ([`rank`])
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod aggregate;
pub mod coerce;
pub mod error;
pub mod filter;
pub mod normalization;
pub mod prepare;
pub mod rank;
pub mod select;
pub mod stats;
pub mod views;

pub use aggregate::{
    Bucket, Buckets, KeyRule, PlaceholderPolicy, UnknownPolicy, aggregate_average, aggregate_count,
};
pub use coerce::{coerce_row, coerce_value};
pub use error::{Result, TransformError};
pub use filter::{is_blank_row, retain_non_blank};
pub use normalization::{measure_value, parse_measure};
pub use prepare::{Prepared, PreparedStats, prepare_records, prepare_with_stats};
pub use rank::{Metric, RankPolicy, SortOrder, rank};
pub use select::{select_all, select_series};
pub use stats::{column_stats, describe};
pub use views::{KeyColumn, Reduction, VIEW_SPECS, ViewPolicy, ViewSpec, ViewTable};
