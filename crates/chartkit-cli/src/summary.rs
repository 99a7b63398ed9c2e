//! Terminal and JSON rendering of views, series and column statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chartkit_model::{ColumnStats, SeriesPoint};
use chartkit_transform::{PreparedStats, Reduction, SortOrder, ViewPolicy, ViewTable};

use crate::types::ChartOutput;

/// Placeholder printed in place of an empty view.
pub const NO_DATA: &str = "no data";

/// Lists every configured view.
pub fn views_table(views: &ViewTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("View"),
        header_cell("Key"),
        header_cell("Mode"),
        header_cell("Order"),
        header_cell("Limit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for policy in views.iter() {
        let key = match &policy.key.fallback {
            Some(fallback) => format!("{} (or {fallback})", policy.key.field),
            None => policy.key.field.clone(),
        };
        let mode = match &policy.reduction {
            Reduction::Average { value_field } => format!("average {value_field}"),
            Reduction::Count => "count".to_string(),
        };
        let order = match policy.rank.order {
            SortOrder::DescValue => "value desc",
            SortOrder::AscKey => "key asc",
        };
        let limit = match policy.rank.limit {
            Some(limit) => Cell::new(limit),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(policy.kind).fg(Color::Blue),
            Cell::new(key),
            Cell::new(mode),
            Cell::new(order),
            limit,
        ]);
    }
    table
}

/// Renders one series. Average views show record counts, count views show
/// each point's share of the displayed total.
pub fn series_table(policy: &ViewPolicy, points: &[SeriesPoint]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match policy.reduction {
        Reduction::Average { .. } => {
            table.set_header(vec![
                header_cell("Name"),
                header_cell("Average"),
                header_cell("Records"),
            ]);
            for point in points {
                let records = match point.count {
                    Some(count) => Cell::new(count),
                    None => dim_cell("-"),
                };
                table.add_row(vec![
                    Cell::new(&point.name),
                    Cell::new(format_value(point.value)),
                    records,
                ]);
            }
        }
        Reduction::Count => {
            table.set_header(vec![
                header_cell("Name"),
                header_cell("Count"),
                header_cell("Share"),
            ]);
            let total: f64 = points.iter().map(|point| point.value).sum();
            for point in points {
                table.add_row(vec![
                    Cell::new(&point.name),
                    Cell::new(format_value(point.value)),
                    Cell::new(format_share(point.value, total)),
                ]);
            }
        }
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// Numeric summary per column.
pub fn stats_table(stats: &[ColumnStats]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Values"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for column in 1..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for entry in stats {
        table.add_row(vec![
            Cell::new(&entry.column).add_attribute(Attribute::Bold),
            Cell::new(entry.count),
            Cell::new(format!("{:.2}", entry.mean)),
            Cell::new(format_value(entry.min)),
            Cell::new(format_value(entry.max)),
        ]);
    }
    table
}

/// One-line summary of a preparation pass.
pub fn prepared_line(stats: &PreparedStats) -> String {
    format!(
        "{} rows read, {} kept, {} blank dropped, {} numeric cells",
        stats.raw_rows,
        stats.kept_rows,
        stats.dropped_rows(),
        stats.numeric_cells
    )
}

/// Pretty-printed JSON array of rendered views.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn render_json(outputs: &[ChartOutput]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outputs)
}

/// Integral values print without a fractional part.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// `part / total` as a percentage with one decimal, e.g. `12.5%`.
pub fn format_share(part: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}%", part / total * 100.0)
    } else {
        "-".to_string()
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
