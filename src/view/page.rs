//! Page stage: windows the filtered and sorted rows.
//!
//! Pages are 1-indexed. Navigation wraps: next from the last page goes to
//! page 1 and previous from page 1 goes to the last page.

use serde::Serialize;
use std::ops::Range;

/// The page being shown, clamped against the rows that survived filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// Current page (1-indexed, always within 1..=total_pages)
    pub current: usize,
    /// Rows per page
    pub page_size: usize,
    /// Rows available for paging (after filter and sort)
    pub total_rows: usize,
}

impl PageWindow {
    /// Window for `requested`, clamped to `[1, total_pages]`.
    pub fn new(total_rows: usize, page_size: usize, requested: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = Self::total_pages_for(total_rows, page_size);
        Self {
            current: requested.clamp(1, total_pages),
            page_size,
            total_rows,
        }
    }

    /// `ceil(total_rows / page_size)`, but never less than one page
    pub fn total_pages_for(total_rows: usize, page_size: usize) -> usize {
        total_rows.div_ceil(page_size.max(1)).max(1)
    }

    pub fn total_pages(&self) -> usize {
        Self::total_pages_for(self.total_rows, self.page_size)
    }

    /// Page after this one, wrapping to 1 past the last page
    pub fn next(&self) -> usize {
        if self.current >= self.total_pages() {
            1
        } else {
            self.current + 1
        }
    }

    /// Page before this one, wrapping to the last page before page 1
    pub fn prev(&self) -> usize {
        if self.current <= 1 {
            self.total_pages()
        } else {
            self.current - 1
        }
    }

    pub fn last(&self) -> usize {
        self.total_pages()
    }

    /// Positions (within the filtered and sorted rows) shown on this page
    pub fn visible_range(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }
}
