//! Invariants checked over deterministic operation sequences.

use crate::helpers::{assert_arity, matched_column, numbered_table, TestTableBuilder};
use easytable::{Row, SortDirection, TableController};
use std::collections::BTreeSet;

fn fleet() -> TableController {
    TestTableBuilder::new(&["Model", "Brand", "Year"])
        .with_rows(&[
            &["Camry", "Toyota", "2000"],
            &["Civic", "Honda", "2005"],
            &["Corolla", "toyota", "1999"],
            &["Accord", "Honda", "2005"],
            &["Golf", "VW", "2010"],
            &["Prius", "TOYOTA", "2004"],
        ])
        .build()
}

#[test]
fn test_arity_holds_after_every_operation() {
    let mut table = fleet();
    assert_arity(&table);

    table.insert_column(0, "Id", Some("-"), None).unwrap();
    assert_arity(&table);
    table.insert_row(3, ["9", "Up", "VW", "2012"]).unwrap();
    assert_arity(&table);
    assert!(table.insert_row(0, ["too", "short"]).is_err());
    assert_arity(&table);
    let colors: Vec<String> = (0..table.row_count()).map(|i| format!("c{i}")).collect();
    table.append_column("Color", None, Some(colors)).unwrap();
    assert_arity(&table);
    table.delete_column(2).unwrap();
    assert_arity(&table);
    table.pop_row().unwrap();
    assert_arity(&table);
    table.delete_column(0).unwrap();
    assert_arity(&table);
    assert_eq!(table.headers(), vec!["Model", "Year", "Color"]);
}

#[test]
fn test_insert_shifts_later_rows_by_one() {
    let mut table = fleet();
    let before: Vec<Row> = table.rows().to_vec();
    let k = 2;
    table.insert_row(k, ["New", "Brand", "2020"]).unwrap();

    for (i, row) in before.iter().enumerate() {
        let expected = if i >= k { i + 1 } else { i };
        assert_eq!(table.get_row(expected), Some(row));
    }
}

#[test]
fn test_filter_soundness() {
    for query in ["toyota", "05", "o", "zzz", "GOLF", "20"] {
        let mut table = fleet();
        let expected: Vec<Row> = table
            .rows()
            .iter()
            .filter(|row| {
                row.cells
                    .iter()
                    .any(|cell| cell.to_uppercase().contains(&query.to_uppercase()))
            })
            .cloned()
            .collect();

        let matched = table.search(query);
        assert_eq!(matched, !expected.is_empty(), "query {query:?}");
        if matched {
            let visible: Vec<Row> = table.visible_rows().into_iter().cloned().collect();
            assert_eq!(visible, expected, "query {query:?}");
        }
    }
}

#[test]
fn test_sort_stability_round_trip() {
    let mut table = fleet();
    table.sort(1, SortDirection::Ascending).unwrap();
    let first = matched_column(&table, 0);

    table.sort(1, SortDirection::Descending).unwrap();
    table.sort(1, SortDirection::Ascending).unwrap();
    assert_eq!(matched_column(&table, 0), first);

    // Equal keys (case-insensitive) keep their logical order
    assert_eq!(
        first,
        vec!["Civic", "Accord", "Camry", "Corolla", "Prius", "Golf"]
    );
}

#[test]
fn test_pagination_covers_every_row_once() {
    for (rows, per_page) in [(7, 4), (8, 4), (1, 3), (10, 1), (0, 2)] {
        let mut table = numbered_table(rows, per_page);
        let pages = table.total_pages();
        let mut seen: Vec<String> = Vec::new();

        for page in 1..=pages {
            table.go_to_page(page);
            let visible: Vec<String> = table
                .visible_rows()
                .iter()
                .map(|row| row.cells[0].clone())
                .collect();
            if page < pages {
                assert_eq!(visible.len(), per_page);
            }
            seen.extend(visible);
        }

        let unique: BTreeSet<&String> = seen.iter().collect();
        assert_eq!(unique.len(), seen.len(), "pages overlap");
        assert_eq!(seen, matched_column(&table, 0));
        assert_eq!(seen.len(), rows);
    }
}

#[test]
fn test_csv_round_trip() {
    let mut table = fleet();
    table.set_cell(0, 0, "Camry, LE").unwrap();
    table.set_cell(1, 0, "\"Type R\"").unwrap();
    let csv = table.to_csv();

    let mut copy = TestTableBuilder::new(&["Model", "Brand", "Year"]).build();
    copy.load_csv(&csv).unwrap();
    assert_eq!(copy.rows(), table.rows());
}

#[test]
fn test_json_round_trip() {
    let table = fleet();
    let json = table.to_json();

    let mut copy = TestTableBuilder::new(&["Model", "Brand", "Year"]).build();
    copy.load_json(&json).unwrap();
    assert_eq!(copy.rows(), table.rows());
}
