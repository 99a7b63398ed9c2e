//! Field-level numeric coercion.

use chartkit_model::{FieldValue, RawRow, TypedRecord};

/// Coerces one raw cell.
///
/// - blank (empty or whitespace) -> `Text("")`
/// - trimmed text that fully parses as a finite decimal -> `Number`
/// - anything else -> the original, untrimmed text
pub fn coerce_value(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::Text(String::new());
    }
    match parse_decimal(trimmed) {
        Some(number) => FieldValue::Number(number),
        None => FieldValue::Text(raw.to_string()),
    }
}

/// Coerces every field of a row, keeping the column order and key set.
pub fn coerce_row(row: &RawRow) -> TypedRecord {
    let mut record = TypedRecord::with_capacity(row.len());
    for (name, value) in row.iter() {
        record.push(name, coerce_value(value));
    }
    record
}

/// Parses a whole string as a finite decimal number.
///
/// Rejects hex/binary forms, digit separators and the `inf`/`nan` spellings
/// that `f64::from_str` would otherwise accept.
fn parse_decimal(text: &str) -> Option<f64> {
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
