//! CSV ingestion for chartkit.
//!
//! Turns a CSV file (or in-memory text) into a [`RawTable`]: the first
//! non-blank line is the header, every following line becomes a
//! [`RawRow`] carrying exactly the header's key set. Values stay strings;
//! numeric coercion happens in `chartkit-transform`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use chartkit_ingest::{IngestOptions, read_csv_rows};
//!
//! let table = read_csv_rows(Path::new("Australian Vehicle Prices.csv"), &IngestOptions::default())?;
//! println!("{} rows, columns {:?}", table.len(), table.columns);
//! ```
//!
//! [`RawTable`]: chartkit_model::RawTable
//! [`RawRow`]: chartkit_model::RawRow

mod loader;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use loader::{IngestOptions, MAX_CSV_FILE_SIZE, parse_csv_str, read_csv_rows};
