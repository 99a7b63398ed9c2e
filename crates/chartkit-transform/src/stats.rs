//! Per-column summary statistics over numeric values.

use chartkit_model::{ColumnStats, TypedRecord};

/// Count, mean, min and max of the numeric values in `column`.
///
/// Text cells are ignored. Returns `None` when the column has no numeric value.
pub fn column_stats(records: &[TypedRecord], column: &str) -> Option<ColumnStats> {
    let mut count = 0u64;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in records
        .iter()
        .filter_map(|record| record.get(column)?.as_number())
    {
        count += 1;
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }
    (count > 0).then(|| ColumnStats {
        column: column.to_string(),
        count,
        mean: sum / count as f64,
        min,
        max,
    })
}

/// [`column_stats`] for every column that holds at least one number.
pub fn describe(records: &[TypedRecord], columns: &[String]) -> Vec<ColumnStats> {
    columns
        .iter()
        .filter_map(|column| column_stats(records, column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartkit_model::FieldValue;

    fn records() -> Vec<TypedRecord> {
        [
            (FieldValue::from("Ford"), FieldValue::Number(10.0)),
            (FieldValue::from("Kia"), FieldValue::from("n/a")),
            (FieldValue::from("Audi"), FieldValue::Number(30.0)),
            (FieldValue::from("BMW"), FieldValue::Number(-4.0)),
        ]
        .into_iter()
        .map(|(brand, price)| {
            [("Brand", brand), ("Price", price)]
                .into_iter()
                .collect::<TypedRecord>()
        })
        .collect()
    }

    #[test]
    fn test_column_stats() {
        let stats = column_stats(&records(), "Price").expect("numeric column");
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 12.0);
        assert_eq!(stats.min, -4.0);
        assert_eq!(stats.max, 30.0);
    }

    #[test]
    fn test_describe_skips_text_columns() {
        let columns = vec!["Brand".to_string(), "Price".to_string(), "Year".to_string()];
        let stats = describe(&records(), &columns);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].column, "Price");
    }
}
