//! Construction options and theme lookup tests.

use easytable::theme::{self, Alignment, Theme};
use easytable::{Paginate, TableController, TableError, TableOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_options_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.json");
    fs::write(
        &path,
        r#"{"columns": ["Model", "Brand"], "enableSort": true, "paginate": 3, "stylesheet": "cars.css"}"#,
    )
    .unwrap();

    let options = TableOptions::from_file(&path).unwrap();
    assert_eq!(options.columns, vec!["Model", "Brand"]);
    assert!(options.enable_sort);
    assert!(!options.enable_search);
    assert_eq!(options.paginate, Some(Paginate::PerPage(3)));
    assert_eq!(options.theme(), Theme::Stylesheet("cars.css".to_string()));
}

#[test]
fn test_options_serialize_camel_case() {
    let options = TableOptions::new(["A"]).with_search().with_pagination(4);
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["enableSearch"], true);
    assert_eq!(json["paginate"]["perPage"], 4);
    assert!(json.get("stylesheet").is_none());
}

#[test]
fn test_paginate_object_without_controls() {
    let options =
        TableOptions::from_json(r#"{"columns": ["A"], "paginate": {"perPage": 2}}"#).unwrap();
    let table = TableController::new("T", options).unwrap();

    assert!(table.view_state().is_paged());
    assert!(!table.affordances().page_controls);
}

#[test]
fn test_invalid_options_rejected_by_controller() {
    let zero_page = TableOptions::new(["A"]).with_pagination(0);
    assert!(matches!(
        TableController::new("T", zero_page),
        Err(TableError::InvalidArgument(_))
    ));

    let duplicate = TableOptions::new(["A", "A"]);
    assert!(TableController::new("T", duplicate).is_err());

    let no_columns = TableOptions::from_json(r#"{"columns": []}"#).unwrap();
    assert!(matches!(
        TableController::new("T", no_columns),
        Err(TableError::InvalidArgument(_))
    ));
}

#[test]
fn test_theme_table() {
    for id in theme::builtin_ids() {
        assert_eq!(theme::builtin(id).id, id);
    }
    assert_eq!(theme::builtin(1).header_background, "#007c77");
    assert_eq!(theme::builtin(3).cell_background, Some("rgb(241, 198, 198)"));
    assert!(theme::builtin(2).rounded_controls);
}

#[test]
fn test_table_theme_from_style() {
    let table = TableController::new("T", TableOptions::new(["A"]).with_style(3)).unwrap();
    assert_eq!(table.theme().alignment(), Alignment::Center);
    assert_eq!(table.theme().label(), "theme 3 (coral)");

    let table = TableController::new("T", TableOptions::new(["A"]).with_style(9)).unwrap();
    assert_eq!(table.theme(), &Theme::default());
}
