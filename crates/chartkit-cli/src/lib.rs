//! Library side of the `chartkit` binary: logging setup, schema loading and
//! output rendering.

pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
