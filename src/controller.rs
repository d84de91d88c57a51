//! Table controller: the single entry point for reading and changing a table.
//!
//! `TableController` owns a [`GridStore`], the [`ViewState`] and the derived
//! [`ViewPipeline`]. Every operation validates first, then mutates, then
//! recomputes the pipeline and finally notifies subscribed renderers. A
//! failed operation changes nothing and notifies nobody.
//!
//! Row and column positions always refer to the logical grid, never to the
//! filtered, sorted or paged view.

use crate::constants::{CSV_DELIMITER, FIRST_PAGE};
use crate::data::{
    DataError, is_data_file, parse_csv_file, parse_csv_records, parse_json_file,
    parse_json_records, write_csv_records, write_json_records,
};
use crate::error::{TableError, TableResult};
use crate::grid::GridStore;
use crate::options::TableOptions;
use crate::render::{Affordances, Frame, FrameRow, Renderer};
use crate::theme::Theme;
use crate::types::{Column, ColumnFill, Query, Row, SortDirection, SortSpec, ViewState};
use crate::view::{PageWindow, ViewPipeline};
use std::path::Path;
use tracing::{debug, warn};

pub struct TableController {
    name: String,
    grid: GridStore,
    state: ViewState,
    view: ViewPipeline,
    options: TableOptions,
    theme: Theme,
    renderers: Vec<Box<dyn Renderer>>,
}

impl TableController {
    /// Create an empty table named `name` from construction options.
    pub fn new(name: impl Into<String>, options: TableOptions) -> TableResult<Self> {
        options.validate()?;
        let grid = GridStore::new(options.columns.iter().cloned())?;
        let state = ViewState {
            page_size: options.paginate.map(|p| p.per_page()),
            ..ViewState::default()
        };
        let view = ViewPipeline::compute(&grid, &state);
        let theme = options.theme();

        debug!(
            columns = grid.column_count(),
            paged = state.is_paged(),
            theme = %theme.label(),
            "Created table"
        );

        Ok(Self {
            name: name.into(),
            grid,
            state,
            view,
            options,
            theme,
            renderers: Vec::new(),
        })
    }

    /// Register a renderer; it is painted immediately and after every
    /// later successful operation.
    pub fn subscribe(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers.push(renderer);
        self.notify();
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn columns(&self) -> &[Column] {
        self.grid.columns()
    }

    pub fn headers(&self) -> Vec<String> {
        self.grid.headers()
    }

    /// Every row in logical order, ignoring search, sort and pages
    pub fn rows(&self) -> &[Row] {
        self.grid.rows()
    }

    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Rows on screen, in display order
    pub fn visible_rows(&self) -> Vec<&Row> {
        self.view
            .visible_indices()
            .iter()
            .filter_map(|&i| self.grid.row(i))
            .collect()
    }

    /// Rows that passed the search, in display order, including off-page rows
    pub fn matched_rows(&self) -> Vec<&Row> {
        self.view
            .order()
            .iter()
            .filter_map(|&i| self.grid.row(i))
            .collect()
    }

    /// Current page (1-indexed); always 1 when not paginating
    pub fn current_page(&self) -> usize {
        self.view.page().map_or(FIRST_PAGE, |p| p.current)
    }

    pub fn total_pages(&self) -> usize {
        self.view.page().map_or(1, PageWindow::total_pages)
    }

    pub fn page_window(&self) -> Option<&PageWindow> {
        self.view.page()
    }

    /// Controls shown with the table; they always span every column
    pub fn affordances(&self) -> Affordances {
        Affordances {
            search: self.options.enable_search,
            sort: self.options.enable_sort,
            page_controls: self.options.paginate.is_some_and(|p| p.shows_controls()),
            span: self.grid.column_count(),
        }
    }

    /// Snapshot of the current view for rendering
    pub fn frame(&self) -> Frame<'_> {
        build_frame(
            &self.name,
            &self.grid,
            &self.view,
            &self.state,
            &self.theme,
            self.affordances(),
        )
    }

    // ------------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------------

    pub fn get_row(&self, position: usize) -> Option<&Row> {
        self.grid.row(position)
    }

    pub fn append_row(&mut self, row: impl Into<Row>) -> TableResult<()> {
        self.insert_row(self.grid.row_count(), row)
    }

    /// Insert at `position` (0..=row_count); later rows shift down by one.
    pub fn insert_row(&mut self, position: usize, row: impl Into<Row>) -> TableResult<()> {
        self.grid.insert_row(position, row)?;
        debug!(position, rows = self.grid.row_count(), "Inserted row");
        self.refresh();
        Ok(())
    }

    pub fn delete_row(&mut self, position: usize) -> TableResult<Row> {
        let removed = self.grid.remove_row(position)?;
        debug!(position, rows = self.grid.row_count(), "Deleted row");
        self.refresh();
        Ok(removed)
    }

    /// Delete the last row
    pub fn pop_row(&mut self) -> TableResult<Row> {
        match self.grid.row_count().checked_sub(1) {
            Some(last) => self.delete_row(last),
            None => Err(TableError::row_out_of_range(0, 0)),
        }
    }

    /// Replace a whole row, returning the previous contents
    pub fn set_row(&mut self, position: usize, row: impl Into<Row>) -> TableResult<Row> {
        let old = self.grid.set_row(position, row)?;
        debug!(position, "Replaced row");
        self.refresh();
        Ok(old)
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&str> {
        self.grid.get_cell(row, col).ok()
    }

    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> TableResult<String> {
        let old = self.grid.set_cell(row, col, value)?;
        debug!(row, col, "Updated cell");
        self.refresh();
        Ok(old)
    }

    // ------------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------------

    pub fn append_column(
        &mut self,
        header: impl Into<String>,
        default: Option<&str>,
        data: Option<Vec<String>>,
    ) -> TableResult<()> {
        self.insert_column(self.grid.column_count(), header, default, data)
    }

    /// Insert a column at `position` (0..=column_count).
    ///
    /// Existing rows get `default` when given, otherwise one entry of `data`
    /// each. A `data` list must match the row count even when `default` is
    /// also supplied. Supplying neither fails.
    pub fn insert_column(
        &mut self,
        position: usize,
        header: impl Into<String>,
        default: Option<&str>,
        data: Option<Vec<String>>,
    ) -> TableResult<()> {
        let fill = match (default, data) {
            (_, Some(values)) if values.len() != self.grid.row_count() => {
                Some(ColumnFill::Values(values))
            }
            (Some(value), _) => Some(ColumnFill::Default(value.to_string())),
            (None, Some(values)) => Some(ColumnFill::Values(values)),
            (None, None) => None,
        };

        self.grid.insert_column(position, header, fill)?;
        self.state.column_inserted(position);
        self.refresh();
        Ok(())
    }

    /// Remove a column, returning its definition and former cells.
    ///
    /// A sort on that column is cleared; per-column search terms on it are dropped.
    pub fn delete_column(&mut self, position: usize) -> TableResult<(Column, Vec<String>)> {
        let removed = self.grid.remove_column(position)?;
        self.state.column_removed(position);
        self.refresh();
        Ok(removed)
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Show only rows with a cell containing `query` (case-insensitive).
    ///
    /// Returns whether any row matched. Without a match the view stays as it
    /// was. An empty query clears the search.
    pub fn search(&mut self, query: &str) -> bool {
        if query.is_empty() {
            self.reset_search();
            return self.grid.row_count() > 0;
        }
        self.try_query(Query::Any(query.to_string()))
    }

    /// Show only rows where every listed column contains its own query.
    ///
    /// Empty queries are ignored; if none remain the search is cleared.
    pub fn search_columns(&mut self, terms: &[(usize, &str)]) -> TableResult<bool> {
        let columns = self.grid.column_count();
        if let Some(&(col, _)) = terms.iter().find(|(col, _)| *col >= columns) {
            return Err(TableError::column_out_of_range(col, columns));
        }

        let terms: Vec<(usize, String)> = terms
            .iter()
            .filter(|(_, q)| !q.is_empty())
            .map(|&(col, q)| (col, q.to_string()))
            .collect();
        if terms.is_empty() {
            self.reset_search();
            return Ok(self.grid.row_count() > 0);
        }
        Ok(self.try_query(Query::PerColumn(terms)))
    }

    /// Clear the search and return to the first page
    pub fn reset_search(&mut self) {
        self.state.reset();
        debug!("Reset search");
        self.refresh();
    }

    fn try_query(&mut self, query: Query) -> bool {
        let candidate = ViewState {
            query: Some(query),
            current_page: FIRST_PAGE,
            ..self.state.clone()
        };
        let view = ViewPipeline::compute(&self.grid, &candidate);
        if view.matched_count() == 0 {
            debug!(query = ?candidate.query, "Search matched nothing");
            return false;
        }

        debug!(matched = view.matched_count(), "Applied search");
        self.state = candidate;
        self.view = view;
        self.notify();
        true
    }

    // ------------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------------

    /// Order the view by one column. The current page is kept.
    pub fn sort(&mut self, column: usize, direction: SortDirection) -> TableResult<()> {
        let columns = self.grid.column_count();
        if column >= columns {
            return Err(TableError::column_out_of_range(column, columns));
        }

        self.state.sort = Some(SortSpec::new(column, direction));
        debug!(column, %direction, "Sorted");
        self.refresh();
        Ok(())
    }

    /// Back to logical row order
    pub fn clear_sort(&mut self) {
        self.state.sort = None;
        debug!("Cleared sort");
        self.refresh();
    }

    // ------------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------------
    //
    // Each returns false and does nothing when pagination is not configured.

    /// Advance one page, wrapping from the last page to the first
    pub fn next_page(&mut self) -> bool {
        self.turn_page(PageWindow::next)
    }

    /// Go back one page, wrapping from the first page to the last
    pub fn prev_page(&mut self) -> bool {
        self.turn_page(PageWindow::prev)
    }

    pub fn first_page(&mut self) -> bool {
        self.turn_page(|_| FIRST_PAGE)
    }

    pub fn last_page(&mut self) -> bool {
        self.turn_page(PageWindow::last)
    }

    /// Jump to `page`, clamped to the available pages
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.turn_page(|_| page)
    }

    /// Change rows per page and return to the first page
    pub fn set_page_size(&mut self, page_size: usize) -> TableResult<bool> {
        if page_size == 0 {
            return Err(TableError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        if !self.state.is_paged() {
            return Ok(false);
        }

        self.state.page_size = Some(page_size);
        self.state.current_page = FIRST_PAGE;
        debug!(page_size, "Changed page size");
        self.refresh();
        Ok(true)
    }

    fn turn_page(&mut self, target: impl FnOnce(&PageWindow) -> usize) -> bool {
        let Some(page) = self.view.page().copied() else {
            return false;
        };

        self.state.current_page = target(&page);
        debug!(from = page.current, to = self.state.current_page, "Changed page");
        self.refresh();
        true
    }

    // ------------------------------------------------------------------------
    // Bulk load and export
    // ------------------------------------------------------------------------

    /// Append every record or none of them.
    pub fn load_rows(&mut self, rows: Vec<Row>) -> TableResult<usize> {
        match self.grid.extend_rows(rows) {
            Ok(added) => {
                debug!(added, rows = self.grid.row_count(), "Loaded rows");
                self.refresh();
                Ok(added)
            }
            Err(e) => {
                warn!("Rejected bulk load: {}", e);
                Err(e)
            }
        }
    }

    /// Load comma-separated records, one per line, without a header line
    pub fn load_csv(&mut self, text: &str) -> TableResult<usize> {
        let rows = parse_csv_records(text, CSV_DELIMITER).inspect_err(|e| {
            warn!("Rejected CSV input: {}", e);
        })?;
        self.load_rows(rows)
    }

    /// Load a JSON array of objects keyed by column header
    pub fn load_json(&mut self, text: &str) -> TableResult<usize> {
        let rows = parse_json_records(text, &self.grid.headers()).inspect_err(|e| {
            warn!("Rejected JSON input: {}", e);
        })?;
        self.load_rows(rows)
    }

    /// Load a `.csv`, `.tsv` or `.json` record file
    pub fn load_file(&mut self, path: &Path) -> TableResult<usize> {
        if !is_data_file(path) {
            return Err(DataError::InvalidData(format!(
                "not a record file: {}",
                path.display()
            ))
            .into());
        }

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let rows = if is_json {
            parse_json_file(path, &self.grid.headers())
        } else {
            parse_csv_file(path)
        }
        .inspect_err(|e| warn!(path = %path.display(), "Rejected record file: {}", e))?;
        self.load_rows(rows)
    }

    /// Every logical row as CSV
    pub fn to_csv(&self) -> String {
        write_csv_records(self.grid.rows(), CSV_DELIMITER)
    }

    /// Every logical row as a JSON array of objects
    pub fn to_json(&self) -> String {
        write_json_records(&self.grid.headers(), self.grid.rows())
    }

    // ------------------------------------------------------------------------
    // Recompute and notify
    // ------------------------------------------------------------------------

    fn refresh(&mut self) {
        self.view = ViewPipeline::compute(&self.grid, &self.state);
        if let Some(page) = self.view.page() {
            self.state.current_page = page.current;
        }
        self.notify();
    }

    fn notify(&mut self) {
        if self.renderers.is_empty() {
            return;
        }
        let affordances = self.affordances();
        let frame = build_frame(
            &self.name,
            &self.grid,
            &self.view,
            &self.state,
            &self.theme,
            affordances,
        );
        for renderer in self.renderers.iter_mut() {
            renderer.render(&frame);
        }
    }
}

fn build_frame<'a>(
    title: &'a str,
    grid: &'a GridStore,
    view: &ViewPipeline,
    state: &'a ViewState,
    theme: &'a Theme,
    affordances: Affordances,
) -> Frame<'a> {
    let rows = view
        .display_rows()
        .filter_map(|d| {
            grid.row(d.index).map(|row| FrameRow {
                index: d.index,
                row,
                hidden: d.hidden,
            })
        })
        .collect();

    Frame {
        title,
        columns: grid.columns(),
        rows,
        page: view.page().copied(),
        affordances,
        theme,
        view: state,
    }
}
