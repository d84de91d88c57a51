//! Authoritative row and column storage.
//!
//! `GridStore` owns the column definitions and every row. It knows nothing
//! about searching, sorting or pages. Every mutation validates first and
//! then applies in full, so a failed call leaves the grid untouched.
//!
//! Invariant: every row holds exactly `column_count()` cells and every
//! column's `index` equals its position.

use crate::error::{TableError, TableResult};
use crate::types::{Column, ColumnFill, Row};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridStore {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl GridStore {
    /// Create an empty grid with the given headers.
    ///
    /// Headers must be unique so that JSON records can be mapped by name.
    pub fn new<I, S>(headers: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<Column> = Vec::new();
        for (index, name) in headers.into_iter().enumerate() {
            let name = name.into();
            if columns.iter().any(|c| c.name == name) {
                return Err(TableError::InvalidArgument(format!(
                    "duplicate column header '{name}'"
                )));
            }
            columns.push(Column::new(name, index));
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header text of every column, in order
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Position of the column with this header
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, position: usize) -> Option<&Row> {
        self.rows.get(position)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    // ------------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------------

    /// Insert a column at `position` (0..=column_count).
    ///
    /// `fill` supplies the new cell of every existing row: either one default
    /// value or a list with exactly one value per row.
    pub fn insert_column(
        &mut self,
        position: usize,
        header: impl Into<String>,
        fill: Option<ColumnFill>,
    ) -> TableResult<()> {
        let header = header.into();

        if position > self.columns.len() {
            return Err(TableError::InvalidArgument(format!(
                "column position {position} out of range (0..={})",
                self.columns.len()
            )));
        }
        if self.column_position(&header).is_some() {
            return Err(TableError::InvalidArgument(format!(
                "duplicate column header '{header}'"
            )));
        }
        let values = match fill {
            None => {
                return Err(TableError::InvalidArgument(
                    "column insertion needs a default value or a data list".to_string(),
                ));
            }
            Some(ColumnFill::Values(values)) if values.len() != self.rows.len() => {
                return Err(TableError::InvalidArgument(format!(
                    "data list has {} values for {} rows",
                    values.len(),
                    self.rows.len()
                )));
            }
            Some(ColumnFill::Values(values)) => values,
            Some(ColumnFill::Default(value)) => vec![value; self.rows.len()],
        };

        self.columns.insert(position, Column::new(header, position));
        self.reindex_columns(position);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.cells.insert(position, value);
        }

        debug!(position, columns = self.columns.len(), "Inserted column");
        Ok(())
    }

    /// Remove the column at `position`, returning it with its former cells.
    pub fn remove_column(&mut self, position: usize) -> TableResult<(Column, Vec<String>)> {
        if position >= self.columns.len() {
            return Err(TableError::column_out_of_range(position, self.columns.len()));
        }

        let column = self.columns.remove(position);
        self.reindex_columns(position);
        let cells: Vec<String> = self
            .rows
            .iter_mut()
            .map(|row| row.cells.remove(position))
            .collect();

        debug!(position, columns = self.columns.len(), "Removed column");
        Ok((column, cells))
    }

    fn reindex_columns(&mut self, from: usize) {
        for (index, column) in self.columns.iter_mut().enumerate().skip(from) {
            column.index = index;
        }
    }

    // ------------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------------

    fn check_arity(&self, row: &Row) -> TableResult<()> {
        if row.len() != self.columns.len() {
            return Err(TableError::InvalidArity {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        Ok(())
    }

    fn check_row(&self, position: usize) -> TableResult<()> {
        if position >= self.rows.len() {
            return Err(TableError::row_out_of_range(position, self.rows.len()));
        }
        Ok(())
    }

    /// Insert a row at `position` (0..=row_count); later rows shift down by one.
    pub fn insert_row(&mut self, position: usize, row: impl Into<Row>) -> TableResult<()> {
        let row = row.into();
        if position > self.rows.len() {
            return Err(TableError::row_out_of_range(position, self.rows.len()));
        }
        self.check_arity(&row)?;

        self.rows.insert(position, row);
        Ok(())
    }

    /// Remove the row at `position` and return it.
    pub fn remove_row(&mut self, position: usize) -> TableResult<Row> {
        self.check_row(position)?;
        Ok(self.rows.remove(position))
    }

    /// Replace every cell of the row at `position`, returning the old row.
    pub fn set_row(&mut self, position: usize, row: impl Into<Row>) -> TableResult<Row> {
        let row = row.into();
        self.check_row(position)?;
        self.check_arity(&row)?;

        Ok(std::mem::replace(&mut self.rows[position], row))
    }

    /// Append every row or none of them.
    ///
    /// On failure, `ArityMismatch` names the first offending record.
    pub fn extend_rows(&mut self, rows: Vec<Row>) -> TableResult<usize> {
        let expected = self.columns.len();
        if let Some((record, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(TableError::ArityMismatch {
                record,
                expected,
                found: bad.len(),
            });
        }

        let added = rows.len();
        self.rows.extend(rows);
        Ok(added)
    }

    // ------------------------------------------------------------------------
    // Cells
    // ------------------------------------------------------------------------

    fn check_cell(&self, row: usize, col: usize) -> TableResult<()> {
        self.check_row(row)?;
        if col >= self.columns.len() {
            return Err(TableError::column_out_of_range(col, self.columns.len()));
        }
        Ok(())
    }

    pub fn get_cell(&self, row: usize, col: usize) -> TableResult<&str> {
        self.check_cell(row, col)?;
        Ok(&self.rows[row].cells[col])
    }

    /// Overwrite one cell, returning the previous text.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> TableResult<String> {
        self.check_cell(row, col)?;
        Ok(std::mem::replace(&mut self.rows[row].cells[col], value.into()))
    }
}
