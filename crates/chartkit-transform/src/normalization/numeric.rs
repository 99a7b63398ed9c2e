//! Numeric normalization for aggregated measures such as prices.
//!
//! Measures are read leniently: thousands separators are removed and the
//! longest leading decimal is taken, so `"20,000"` and `"20000 AUD"` both read
//! as `20000`. Values that do not start with a number yield `None`.

use chartkit_model::FieldValue;

/// Parse a measure cell to a finite number.
///
/// Handles:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234,567"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
/// - Trailing text: "15000 AUD"
pub fn parse_measure(value: &str) -> Option<f64> {
    let cleaned = value.replace(',', "");
    leading_decimal(cleaned.trim())
}

/// Reads a measure from a coerced field.
pub fn measure_value(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(number) => Some(*number).filter(|n| n.is_finite()),
        FieldValue::Text(text) => parse_measure(text),
    }
}

/// Parses the longest prefix of `text` that forms a decimal number.
fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut idx: usize| {
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        idx
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let int_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            end = frac_end;
        } else if int_digits == 0 {
            return None;
        }
    } else if int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
