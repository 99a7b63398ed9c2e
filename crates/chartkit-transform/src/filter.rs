//! Record filter: drops rows with no content.

use chartkit_model::RawRow;

/// True when every field is empty or whitespace (or the row has no fields).
pub fn is_blank_row(row: &RawRow) -> bool {
    row.values().all(|value| value.trim().is_empty())
}

/// Keeps rows with at least one non-blank field, in their original order.
pub fn retain_non_blank<'a, I>(rows: I) -> impl Iterator<Item = &'a RawRow>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    rows.into_iter().filter(|row| !is_blank_row(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[(&str, &str)]) -> RawRow {
        values.iter().copied().collect()
    }

    #[test]
    fn test_blank_rows() {
        assert!(is_blank_row(&RawRow::new()));
        assert!(is_blank_row(&row(&[("A", ""), ("B", "  \t")])));
        assert!(!is_blank_row(&row(&[("A", ""), ("B", "x")])));
    }

    #[test]
    fn test_retain_keeps_order() {
        let rows = vec![
            row(&[("A", "1")]),
            row(&[("A", " ")]),
            row(&[("A", "3")]),
        ];
        let kept: Vec<&str> = retain_non_blank(&rows)
            .filter_map(|row| row.get("A"))
            .collect();
        assert_eq!(kept, vec!["1", "3"]);
    }
}
