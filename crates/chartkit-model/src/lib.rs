//! Shared data model for chartkit.
//!
//! - [`RawRow`] / [`RawTable`]: untyped rows as produced by the CSV loader
//! - [`TypedRecord`] / [`FieldValue`]: rows after numeric coercion
//! - [`SeriesPoint`]: the unit handed to a chart renderer
//! - [`ViewKind`] and [`DatasetSchema`]: which series to build and from which columns

pub mod error;
pub mod record;
pub mod schema;
pub mod series;
pub mod view;

pub use error::{ModelError, Result};
pub use record::{FieldValue, RawRow, RawTable, TypedRecord};
pub use schema::{DatasetSchema, UNKNOWN_KEY};
pub use series::{ColumnStats, SeriesPoint};
pub use view::ViewKind;
