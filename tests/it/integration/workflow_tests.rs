//! Multi-step workflows: file loading, renderer notification and column
//! changes under an active view.

use crate::helpers::{cars_table, visible_column, TestTableBuilder};
use easytable::data::DataError;
use easytable::render::{Frame, Renderer};
use easytable::{Query, SortDirection, SortSpec, TableError, TextRenderer};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

/// Records the visible first-column cells of every frame it receives.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Vec<String>>,
    spans: Vec<usize>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames.push(
            frame
                .visible_rows()
                .map(|r| r.row.cells[0].clone())
                .collect(),
        );
        self.spans.push(frame.affordances.span);
    }
}

#[test]
fn test_load_csv_and_json_files() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("cars.csv");
    let json = dir.path().join("more.json");
    fs::write(&csv, "Camry,Toyota,2000\n\nCivic,Honda,2005\n").unwrap();
    fs::write(
        &json,
        r#"{"data": [{"Brand": "VW", "Year": 2010, "Model": "Golf"}]}"#,
    )
    .unwrap();

    let mut table = TestTableBuilder::new(&["Model", "Brand", "Year"]).build();
    assert_eq!(table.load_file(&csv).unwrap(), 2);
    assert_eq!(table.load_file(&json).unwrap(), 1);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.get_cell(2, 2), Some("2010"));
}

#[test]
fn test_exported_csv_with_semicolons_loads_back() {
    let table = TestTableBuilder::new(&["Note", "Tag"])
        .with_row(&["a;b;c", "x"])
        .with_row(&["d;e;f;g", "y"])
        .build();
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.csv");
    fs::write(&path, table.to_csv()).unwrap();

    let mut copy = TestTableBuilder::new(&["Note", "Tag"]).build();
    assert_eq!(copy.load_file(&path).unwrap(), 2);
    assert_eq!(copy.rows(), table.rows());
}

#[test]
fn test_load_file_rejects_other_extensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cars.txt");
    fs::write(&path, "Camry,Toyota,2000").unwrap();

    let mut table = cars_table();
    assert!(matches!(
        table.load_file(&path),
        Err(TableError::Parse(DataError::InvalidData(_)))
    ));
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_json_missing_key_rejects_whole_load() {
    let mut table = cars_table();
    let json = r#"[
        {"Model": "Golf", "Brand": "VW", "Year": "2010"},
        {"Model": "Up", "Brand": "VW"}
    ]"#;

    assert!(matches!(
        table.load_json(json),
        Err(TableError::ArityMismatch { record: 1, expected: 3, found: 2 })
    ));
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_renderer_sees_each_successful_change() {
    let recorder = Rc::new(RefCell::new(RecordingRenderer::default()));
    let mut table = TestTableBuilder::new(&["Model", "Brand", "Year"])
        .with_row(&["Camry", "Toyota", "2000"])
        .with_row(&["Civic", "Honda", "2005"])
        .with_search()
        .with_pagination(1)
        .build();
    table.subscribe(Box::new(Rc::clone(&recorder)));

    table.next_page();
    assert!(!table.search("ferrari"));
    assert!(table.sort(7, SortDirection::Ascending).is_err());
    table.append_column("Color", Some("red"), None).unwrap();

    let recorder = recorder.borrow();
    assert_eq!(
        recorder.frames,
        vec![vec!["Camry"], vec!["Civic"], vec!["Civic"]]
    );
    assert_eq!(recorder.spans, vec![3, 3, 4]);
}

#[test]
fn test_several_renderers_get_the_same_frame() {
    let first = Rc::new(RefCell::new(TextRenderer::new()));
    let second = Rc::new(RefCell::new(TextRenderer::new()));
    let mut table = cars_table();
    table.subscribe(Box::new(Rc::clone(&first)));
    table.subscribe(Box::new(Rc::clone(&second)));

    table.search("camry");

    assert_eq!(first.borrow().frames_rendered(), 3);
    assert_eq!(second.borrow().frames_rendered(), 2);
    assert_eq!(first.borrow().output(), second.borrow().output());
    assert!(!first.borrow().output().contains("Civic"));
}

#[test]
fn test_delete_column_updates_view_state() {
    let mut table = cars_table();
    table.search_columns(&[(0, "c"), (2, "2005")]).unwrap();
    table.sort(2, SortDirection::Descending).unwrap();

    table.delete_column(0).unwrap();
    assert_eq!(
        table.view_state().query,
        Some(Query::PerColumn(vec![(1, "2005".to_string())]))
    );
    assert_eq!(table.view_state().sort, Some(SortSpec::descending(1)));
    assert_eq!(visible_column(&table, 0), vec!["Honda"]);

    table.delete_column(1).unwrap();
    assert_eq!(table.view_state().query, None);
    assert_eq!(table.view_state().sort, None);
    assert_eq!(visible_column(&table, 0), vec!["Toyota", "Honda"]);
}

#[test]
fn test_export_reflects_logical_order_not_view() {
    let mut table = cars_table();
    table.sort(0, SortDirection::Descending).unwrap();
    table.search("civic");

    assert_eq!(table.to_csv(), "Camry,Toyota,2000\nCivic,Honda,2005");
}
