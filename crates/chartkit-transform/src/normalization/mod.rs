//! Value normalization helpers used by the aggregator.

pub mod numeric;

pub use numeric::{measure_value, parse_measure};
