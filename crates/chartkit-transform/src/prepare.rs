//! Boundary step: validate raw rows, drop blank ones, coerce the rest.

use chartkit_model::{FieldValue, RawTable, TypedRecord};

use crate::coerce::coerce_row;
use crate::error::Result;
use crate::filter::retain_non_blank;

/// Counters describing one preparation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreparedStats {
    pub raw_rows: usize,
    pub kept_rows: usize,
    pub numeric_cells: usize,
}

impl PreparedStats {
    pub fn dropped_rows(&self) -> usize {
        self.raw_rows - self.kept_rows
    }
}

/// Typed records plus the header they were read under.
#[derive(Debug, Clone, Default)]
pub struct Prepared {
    pub columns: Vec<String>,
    pub records: Vec<TypedRecord>,
    pub stats: PreparedStats,
}

/// Validates `table`, filters blank rows and coerces the remainder.
///
/// # Errors
///
/// Returns [`crate::TransformError::Structure`] when a row's key set differs
/// from the header. Cell contents never cause an error.
pub fn prepare_with_stats(table: &RawTable) -> Result<Prepared> {
    table.validate()?;

    let records: Vec<TypedRecord> = retain_non_blank(&table.rows).map(coerce_row).collect();
    let numeric_cells = records
        .iter()
        .flat_map(TypedRecord::iter)
        .filter(|(_, value)| matches!(value, FieldValue::Number(_)))
        .count();

    Ok(Prepared {
        columns: table.columns.clone(),
        stats: PreparedStats {
            raw_rows: table.len(),
            kept_rows: records.len(),
            numeric_cells,
        },
        records,
    })
}

/// Like [`prepare_with_stats`] but returns only the records.
///
/// # Errors
///
/// See [`prepare_with_stats`].
pub fn prepare_records(table: &RawTable) -> Result<Vec<TypedRecord>> {
    prepare_with_stats(table).map(|prepared| prepared.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use chartkit_model::{ModelError, RawRow};

    fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        let columns: Vec<String> = columns.iter().map(|c| (*c).to_string()).collect();
        let rows = rows
            .iter()
            .map(|values| {
                columns
                    .iter()
                    .zip(values.iter())
                    .map(|(c, v)| (c.as_str(), *v))
                    .collect::<RawRow>()
            })
            .collect();
        RawTable::with_rows(columns, rows)
    }

    #[test]
    fn test_prepare_filters_and_coerces() {
        let table = table(
            &["Brand", "Price"],
            &[&["Ford", "15000"], &["", "  "], &["Kia", "POA"]],
        );
        let prepared = prepare_with_stats(&table).unwrap();
        assert_eq!(
            prepared.stats,
            PreparedStats {
                raw_rows: 3,
                kept_rows: 2,
                numeric_cells: 1
            }
        );
        assert_eq!(prepared.stats.dropped_rows(), 1);
        assert_eq!(
            prepared.records[0].get("Price"),
            Some(&FieldValue::Number(15000.0))
        );
        assert_eq!(
            prepared.records[1].get("Price"),
            Some(&FieldValue::from("POA"))
        );
    }

    #[test]
    fn test_prepare_rejects_inconsistent_rows() {
        let mut table = table(&["Brand", "Price"], &[&["Ford", "1"]]);
        table.push_row([("Brand", "Kia")].into_iter().collect());
        assert!(matches!(
            prepare_records(&table),
            Err(TransformError::Structure(ModelError::FieldCount { row: 1, .. }))
        ));
    }

    #[test]
    fn test_prepare_empty_table() {
        let prepared = prepare_with_stats(&RawTable::default()).unwrap();
        assert!(prepared.records.is_empty());
        assert_eq!(prepared.stats, PreparedStats::default());
    }
}
