//! End-to-end tests: raw rows through preparation into every view.

use chartkit_model::{RawRow, RawTable, SeriesPoint, UNKNOWN_KEY, ViewKind};
use chartkit_transform::{
    TransformError, ViewTable, prepare_records, select_all, select_series,
};

const COLUMNS: [&str; 5] = ["Brand", "Year", "Price", "BodyType", "Car/Suv"];

fn table(rows: &[[&str; 5]]) -> RawTable {
    let columns = COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let rows = rows
        .iter()
        .map(|values| {
            COLUMNS
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect::<RawRow>()
        })
        .collect();
    RawTable::with_rows(columns, rows)
}

fn series(rows: &[[&str; 5]], kind: ViewKind) -> Vec<SeriesPoint> {
    let records = prepare_records(&table(rows)).unwrap();
    select_series(&records, kind, &ViewTable::default()).unwrap()
}

fn names(points: &[SeriesPoint]) -> Vec<&str> {
    points.iter().map(|point| point.name.as_str()).collect()
}

#[test]
fn test_category_average_end_to_end() {
    let points = series(
        &[
            ["Toyota", "2019", "20,000", "SUV", ""],
            ["Toyota", "2020", "22,000", "SUV", ""],
            ["Ford", "2019", "15,000", "Ute", ""],
            ["", "", "", "", ""],
        ],
        ViewKind::ByCategoryAverage,
    );
    assert_eq!(
        points,
        vec![
            SeriesPoint::new("Toyota", 21000.0).with_count(2),
            SeriesPoint::new("Ford", 15000.0).with_count(1),
        ]
    );
}

#[test]
fn test_average_is_rounded_mean() {
    let points = series(
        &[
            ["A", "2019", "100", "", ""],
            ["A", "2019", "200", "", ""],
            ["A", "2019", "301", "", ""],
        ],
        ViewKind::ByCategoryAverage,
    );
    assert_eq!(points, vec![SeriesPoint::new("A", 200.0).with_count(3)]);
}

#[test]
fn test_category_average_truncates_to_ten_with_stable_ties() {
    let prices = [
        ("k01", "500"),
        ("k02", "900"),
        ("k03", "100"),
        ("k04", "700"),
        ("k05", "700"),
        ("k06", "300"),
        ("k07", "800"),
        ("k08", "200"),
        ("k09", "600"),
        ("k10", "400"),
        ("k11", "700"),
        ("k12", "150"),
    ];
    let rows: Vec<[&str; 5]> = prices
        .iter()
        .map(|(brand, price)| [*brand, "2020", *price, "", ""])
        .collect();
    let points = series(&rows, ViewKind::ByCategoryAverage);
    assert_eq!(points.len(), 10);
    assert_eq!(
        names(&points),
        vec!["k02", "k07", "k04", "k05", "k11", "k09", "k01", "k10", "k06", "k08"]
    );
}

#[test]
fn test_equal_values_keep_first_seen_order_when_truncated() {
    let brands = [
        "b12", "b11", "b10", "b09", "b08", "b07", "b06", "b05", "b04", "b03", "b02", "b01",
    ];
    let rows: Vec<[&str; 5]> = brands.iter().map(|b| [*b, "2020", "100", "", ""]).collect();
    let points = series(&rows, ViewKind::ByCategoryAverage);
    assert_eq!(names(&points), brands[..10].to_vec());
}

#[test]
fn test_unknown_category_kept_in_average_view() {
    let points = series(
        &[
            ["", "2019", "1000", "", ""],
            ["Kia", "2019", "500", "", ""],
        ],
        ViewKind::ByCategoryAverage,
    );
    assert_eq!(names(&points), vec![UNKNOWN_KEY, "Kia"]);
}

#[test]
fn test_unpriced_group_is_dropped_from_average_view() {
    let points = series(
        &[
            ["Holden", "2019", "POA", "", ""],
            ["Kia", "2019", "500", "", ""],
        ],
        ViewKind::ByCategoryAverage,
    );
    assert_eq!(names(&points), vec!["Kia"]);
}

#[test]
fn test_time_view_excludes_unknown_and_sorts_lexicographically() {
    let points = series(
        &[
            ["Kia", "2021", "300", "", ""],
            ["Kia", "", "999", "", ""],
            ["Kia", "2019", "100", "", ""],
            ["Kia", "2021", "500", "", ""],
            ["Kia", "-", "999", "", ""],
        ],
        ViewKind::ByTimeAverage,
    );
    assert_eq!(
        points,
        vec![
            SeriesPoint::new("2019", 100.0).with_count(1),
            SeriesPoint::new("2021", 400.0).with_count(2),
        ]
    );
}

#[test]
fn test_distribution_uses_fallback_and_skips_placeholders() {
    let points = series(
        &[
            ["Kia", "2019", "1", "SUV", ""],
            ["Kia", "2019", "1", "", "SUV"],
            ["Kia", "2019", "1", "Sedan", ""],
            ["Kia", "2019", "1", "-", "Ute"],
            ["Kia", "2019", "1", "", "-"],
            ["Kia", "2019", "1", "", ""],
        ],
        ViewKind::BySecondaryCategoryDistribution,
    );
    assert_eq!(
        points,
        vec![
            SeriesPoint::new("SUV", 2.0),
            SeriesPoint::new("Sedan", 1.0),
            SeriesPoint::new(UNKNOWN_KEY, 1.0),
        ]
    );
}

#[test]
fn test_distribution_counts_missing_body_type_as_unknown() {
    let points = series(
        &[
            ["Kia", "2019", "1", "SUV", ""],
            ["Kia", "2019", "1", "", ""],
            ["Kia", "2019", "1", "  ", ""],
        ],
        ViewKind::BySecondaryCategoryDistribution,
    );
    assert_eq!(
        points,
        vec![SeriesPoint::new(UNKNOWN_KEY, 2.0), SeriesPoint::new("SUV", 1.0)]
    );
}

#[test]
fn test_average_view_never_emits_non_finite_values() {
    let points = series(
        &[
            ["A", "2019", "1e308", "", ""],
            ["A", "2019", "1e308", "", ""],
            ["B", "2019", "500", "", ""],
        ],
        ViewKind::ByCategoryAverage,
    );
    assert_eq!(points, vec![SeriesPoint::new("B", 500.0).with_count(1)]);
}

#[test]
fn test_distribution_limit() {
    let bodies = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let rows: Vec<[&str; 5]> = bodies.iter().map(|b| ["Kia", "2019", "1", *b, ""]).collect();
    let points = series(&rows, ViewKind::BySecondaryCategoryDistribution);
    assert_eq!(names(&points), vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
}

#[test]
fn test_frequency_excludes_unknown() {
    let points = series(
        &[
            ["Kia", "2019", "", "", ""],
            ["", "2019", "", "", ""],
            ["Audi", "2019", "", "", ""],
            ["Kia", "2019", "", "", ""],
            ["", "2019", "", "", ""],
            ["", "2019", "", "", ""],
        ],
        ViewKind::ByCategoryFrequency,
    );
    assert_eq!(
        points,
        vec![SeriesPoint::new("Kia", 2.0), SeriesPoint::new("Audi", 1.0)]
    );
}

#[test]
fn test_empty_input_yields_empty_series() {
    let table = ViewTable::default();
    for kind in ViewKind::ALL {
        assert!(select_series(&[], kind, &table).unwrap().is_empty());
    }
    let all = select_all(&[], &table);
    assert_eq!(all.len(), ViewKind::ALL.len());
    assert!(all.iter().all(|(_, points)| points.is_empty()));
}

#[test]
fn test_structural_violation_is_reported() {
    let mut raw = table(&[["Kia", "2019", "1", "", ""]]);
    raw.push_row([("Brand", "Kia"), ("Colour", "Red")].into_iter().collect());
    assert!(matches!(
        prepare_records(&raw),
        Err(TransformError::Structure(_))
    ));
}

#[test]
fn test_missing_policy_is_reported() {
    let table = table_without_frequency();
    assert_eq!(
        select_series(&[], ViewKind::ByCategoryFrequency, &table),
        Err(TransformError::ViewNotConfigured(ViewKind::ByCategoryFrequency))
    );
}

fn table_without_frequency() -> ViewTable {
    ViewTable::from_specs(
        chartkit_transform::VIEW_SPECS
            .iter()
            .filter(|spec| spec.kind != ViewKind::ByCategoryFrequency),
        &chartkit_model::DatasetSchema::default(),
    )
}

#[test]
fn test_select_is_repeatable() {
    let records = prepare_records(&table(&[["Kia", "2019", "100", "SUV", ""]])).unwrap();
    let table = ViewTable::default();
    let first = select_series(&records, ViewKind::ByCategoryAverage, &table).unwrap();
    let second = select_series(&records, ViewKind::ByCategoryAverage, &table).unwrap();
    assert_eq!(first, second);
}
