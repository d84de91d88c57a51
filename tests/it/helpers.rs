//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTableBuilder` - Builder pattern for creating test tables with rows
//! - Fixtures like `cars_table()` and `numbered_table()`
//! - Assertions shared by unit and integration tests

#![allow(dead_code)]

use easytable::{Row, TableController, TableOptions};

// ============================================================================
// TestTableBuilder - Builder pattern for creating test tables
// ============================================================================

/// Builder for creating test tables with rows and options.
///
/// # Example
/// ```ignore
/// let table = TestTableBuilder::new(&["Model", "Brand", "Year"])
///     .with_row(&["Camry", "Toyota", "2000"])
///     .with_search()
///     .with_pagination(4)
///     .build();
/// ```
pub struct TestTableBuilder {
    options: TableOptions,
    rows: Vec<Row>,
}

impl TestTableBuilder {
    /// Create a new builder with the given column headers.
    pub fn new(columns: &[&str]) -> Self {
        Self {
            options: TableOptions::new(columns.iter().copied()),
            rows: Vec::new(),
        }
    }

    /// Add a row of cells.
    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(Row::from(cells));
        self
    }

    /// Add several rows of cells.
    pub fn with_rows(mut self, rows: &[&[&str]]) -> Self {
        for cells in rows {
            self.rows.push(Row::from(*cells));
        }
        self
    }

    pub fn with_search(mut self) -> Self {
        self.options = self.options.with_search();
        self
    }

    pub fn with_sort(mut self) -> Self {
        self.options = self.options.with_sort();
        self
    }

    pub fn with_pagination(mut self, per_page: usize) -> Self {
        self.options = self.options.with_pagination(per_page);
        self
    }

    pub fn with_style(mut self, style: u8) -> Self {
        self.options = self.options.with_style(style);
        self
    }

    /// Build the table, appending every row in order.
    pub fn build(self) -> TableController {
        let mut table = TableController::new("Test", self.options).unwrap();
        for row in self.rows {
            table.append_row(row).unwrap();
        }
        table
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Two-row cars table with no affordances.
pub fn cars_table() -> TableController {
    TestTableBuilder::new(&["Model", "Brand", "Year"])
        .with_row(&["Camry", "Toyota", "2000"])
        .with_row(&["Civic", "Honda", "2005"])
        .build()
}

/// Single-column table holding "0", "1", ... paginated by `per_page`.
pub fn numbered_table(rows: usize, per_page: usize) -> TableController {
    let mut table =
        TableController::new("Numbers", TableOptions::new(["N"]).with_pagination(per_page))
            .unwrap();
    for i in 0..rows {
        table.append_row([i.to_string()]).unwrap();
    }
    table
}

// ============================================================================
// Assertions
// ============================================================================

/// Cells of one column for the rows on screen, in display order.
pub fn visible_column(table: &TableController, col: usize) -> Vec<String> {
    table
        .visible_rows()
        .iter()
        .map(|row| row.cells[col].clone())
        .collect()
}

/// Cells of one column for every matched row, in display order.
pub fn matched_column(table: &TableController, col: usize) -> Vec<String> {
    table
        .matched_rows()
        .iter()
        .map(|row| row.cells[col].clone())
        .collect()
}

/// Assert every row holds exactly one cell per column.
pub fn assert_arity(table: &TableController) {
    for (i, row) in table.rows().iter().enumerate() {
        assert_eq!(
            row.len(),
            table.column_count(),
            "row {} has {} cells for {} columns",
            i,
            row.len(),
            table.column_count()
        );
    }
    for (i, column) in table.columns().iter().enumerate() {
        assert_eq!(column.index, i, "column '{}' has a stale index", column.name);
    }
}
