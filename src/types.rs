//! Core types for the table engine.
//!
//! This module defines the plain data shared by the grid store, the view
//! pipeline and the controller: columns, rows, sort specifications, search
//! queries and the view state that ties them together.

use crate::error::{TableError, TableResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Grid Types
// ============================================================================

/// A column definition. `index` always equals the column's position in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header text
    pub name: String,
    /// Position of this column (kept in sync on insert/remove)
    pub index: usize,
}

impl Column {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// A row of display-ready cell text, one entry per column.
///
/// Rows are identified by position only; inserting or deleting shifts the
/// position of every row after it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell text at `col`, if present
    pub fn get(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Row::new(cells)
    }
}

impl From<&[&str]> for Row {
    fn from(cells: &[&str]) -> Self {
        cells.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Row {
    fn from(cells: [&str; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl<const N: usize> From<[String; N]> for Row {
    fn from(cells: [String; N]) -> Self {
        Row::new(cells.into())
    }
}

/// Data used to populate a newly inserted column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnFill {
    /// Same value in every existing row
    Default(String),
    /// One value per existing row, in row order
    Values(Vec<String>),
}

// ============================================================================
// Sorting
// ============================================================================

/// Sort direction for a column sort.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// A-Z, 0-9
    #[default]
    Ascending,
    /// Z-A, 9-0
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DSC",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Numeric directions as used by sort buttons: `1` ascending, `-1` descending.
impl TryFrom<i32> for SortDirection {
    type Error = TableError;

    fn try_from(value: i32) -> TableResult<Self> {
        match value {
            1 => Ok(SortDirection::Ascending),
            -1 => Ok(SortDirection::Descending),
            other => Err(TableError::InvalidArgument(format!(
                "sort direction must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl FromStr for SortDirection {
    type Err = TableError;

    fn from_str(s: &str) -> TableResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "1" => Ok(SortDirection::Ascending),
            "desc" | "dsc" | "descending" | "-1" => Ok(SortDirection::Descending),
            other => Err(TableError::InvalidArgument(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column and direction of the active sort.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: usize, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn ascending(column: usize) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: usize) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

// ============================================================================
// Searching
// ============================================================================

/// Active search filter.
///
/// The two modes never mix: `Any` keeps a row when
/// at least one cell matches, `PerColumn` keeps a row only when every listed
/// column matches its own query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Query {
    /// Single query matched against every cell (OR across columns)
    Any(String),
    /// One query per column, all of which must match (AND across columns)
    PerColumn(Vec<(usize, String)>),
}

impl Query {
    /// Whether this query filters nothing out
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Any(q) => q.is_empty(),
            Query::PerColumn(terms) => terms.iter().all(|(_, q)| q.is_empty()),
        }
    }
}

// ============================================================================
// View State
// ============================================================================

/// Search, sort and pagination settings of a table.
///
/// Never the source of truth for data: the displayed rows are always
/// recomputed from the grid and this state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub query: Option<Query>,
    pub sort: Option<SortSpec>,
    /// 1-indexed
    pub current_page: usize,
    /// `None` when pagination is disabled
    pub page_size: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: None,
            sort: None,
            current_page: 1,
            page_size: None,
        }
    }
}

impl ViewState {
    pub fn paged(page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.query.as_ref().is_some_and(|q| !q.is_empty())
    }

    pub fn is_sorted(&self) -> bool {
        self.sort.is_some()
    }

    pub fn is_paged(&self) -> bool {
        self.page_size.is_some()
    }

    /// Clear the search and go back to the first page.
    pub fn reset(&mut self) {
        self.query = None;
        self.current_page = 1;
    }

    /// Shift column references after a column was inserted at `position`.
    pub fn column_inserted(&mut self, position: usize) {
        if let Some(sort) = &mut self.sort {
            if sort.column >= position {
                sort.column += 1;
            }
        }
        if let Some(Query::PerColumn(terms)) = &mut self.query {
            for (col, _) in terms.iter_mut() {
                if *col >= position {
                    *col += 1;
                }
            }
        }
    }

    /// Drop or shift column references after the column at `position` was removed.
    pub fn column_removed(&mut self, position: usize) {
        if let Some(sort) = self.sort {
            if sort.column == position {
                self.sort = None;
            } else if sort.column > position {
                self.sort = Some(SortSpec::new(sort.column - 1, sort.direction));
            }
        }
        if let Some(Query::PerColumn(terms)) = &mut self.query {
            terms.retain(|(col, _)| *col != position);
            for (col, _) in terms.iter_mut() {
                if *col > position {
                    *col -= 1;
                }
            }
            if terms.is_empty() {
                self.query = None;
            }
        }
    }
}
