//! The view pipeline: search, then sort, then page.
//!
//! A [`ViewPipeline`] is derived state. It is rebuilt from the grid and the
//! [`ViewState`] after every change and never edited in place, so it can be
//! thrown away and recomputed at any time.
//!
//! The stage order is fixed:
//!
//! 1. [`filter`] keeps the rows the query matches (original order)
//! 2. [`sort`] orders them by one column (stable)
//! 3. [`page`] marks the rows outside the current page as hidden

pub mod filter;
pub mod page;
pub mod sort;

pub use page::PageWindow;

use crate::grid::GridStore;
use crate::types::ViewState;
use std::ops::Range;
use tracing::trace;

/// One row of the pipeline output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    /// Position of the row in the grid
    pub index: usize,
    /// Outside the current page
    pub hidden: bool,
}

/// Displayed row order for one grid + view state combination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewPipeline {
    /// Grid positions that passed the filter, in sorted order
    order: Vec<usize>,
    /// Present only when paginating
    page: Option<PageWindow>,
}

impl ViewPipeline {
    pub fn compute(grid: &GridStore, state: &ViewState) -> Self {
        let rows = grid.rows();

        let mut order = filter::apply(rows, state.query.as_ref());
        sort::apply(rows, &mut order, state.sort);
        let page = state
            .page_size
            .map(|size| PageWindow::new(order.len(), size, state.current_page));

        trace!(
            rows = rows.len(),
            matched = order.len(),
            page = ?page.map(|p| p.current),
            "Recomputed view"
        );

        Self { order, page }
    }

    /// Number of rows that passed the filter
    pub fn matched_count(&self) -> usize {
        self.order.len()
    }

    /// Grid positions of every filtered row, in display order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn page(&self) -> Option<&PageWindow> {
        self.page.as_ref()
    }

    /// Range of `order()` that is on screen
    pub fn visible_range(&self) -> Range<usize> {
        match &self.page {
            Some(page) => page.visible_range(),
            None => 0..self.order.len(),
        }
    }

    /// Grid positions of the rows on screen, in display order
    pub fn visible_indices(&self) -> &[usize] {
        &self.order[self.visible_range()]
    }

    /// Every filtered row with its hidden flag
    pub fn display_rows(&self) -> impl Iterator<Item = DisplayRow> + '_ {
        let visible = self.visible_range();
        self.order
            .iter()
            .enumerate()
            .map(move |(pos, &index)| DisplayRow {
                index,
                hidden: !visible.contains(&pos),
            })
    }
}
