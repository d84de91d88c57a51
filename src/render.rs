//! Renderer contract and a plain-text renderer.
//!
//! The controller hands every subscribed [`Renderer`] a [`Frame`] after each
//! successful operation. A frame is the complete picture: headers, the
//! filtered and sorted rows (each marked hidden when off-page), the page
//! window, which affordances are attached and the theme. Renderers never
//! feed anything back into the table.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut table = TableController::new("Cars", options)?;
//! table.subscribe(Box::new(TextRenderer::new()));
//! table.append_row(["Camry", "Toyota", "2000"])?;
//! println!("{}", render_to_string(&table.frame()));
//! ```

use crate::constants::{COLUMN_SEPARATOR, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
use crate::theme::{Alignment, Theme};
use crate::types::{Column, Query, Row, ViewState};
use crate::view::PageWindow;
use std::cell::RefCell;
use std::rc::Rc;

/// Controls attached to the table. Their span always equals the column count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub search: bool,
    pub sort: bool,
    /// Built-in previous/next page controls
    pub page_controls: bool,
    /// Number of columns the search bar and page tray stretch across
    pub span: usize,
}

/// One filtered row in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRow<'a> {
    /// Position in the grid
    pub index: usize,
    pub row: &'a Row,
    /// Outside the current page
    pub hidden: bool,
}

/// Everything a renderer needs to paint the table once.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    pub title: &'a str,
    pub columns: &'a [Column],
    pub rows: Vec<FrameRow<'a>>,
    pub page: Option<PageWindow>,
    pub affordances: Affordances,
    pub theme: &'a Theme,
    pub view: &'a ViewState,
}

impl<'a> Frame<'a> {
    /// Rows on the current page, in display order
    pub fn visible_rows(&self) -> impl Iterator<Item = &FrameRow<'a>> {
        self.rows.iter().filter(|r| !r.hidden)
    }

    /// Number of rows that passed the filter
    pub fn matched_count(&self) -> usize {
        self.rows.len()
    }
}

/// Receives a fresh frame after every change to the table.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Lets a caller keep a handle on a renderer it subscribed.
impl<R: Renderer> Renderer for Rc<RefCell<R>> {
    fn render(&mut self, frame: &Frame<'_>) {
        self.borrow_mut().render(frame);
    }
}

/// Renders frames to plain text, keeping the latest output.
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
    frames: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent frame
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many frames have been rendered
    pub fn frames_rendered(&self) -> usize {
        self.frames
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.output = render_to_string(frame);
        self.frames += 1;
    }
}

/// Render a complete table: title, optional search line, headers, the
/// visible rows and an optional pagination footer.
pub fn render_to_string(frame: &Frame<'_>) -> String {
    let mut lines = vec![render_title(frame)];

    if frame.affordances.search {
        lines.push(render_search_line(frame));
    }

    let headers: Vec<String> = frame
        .columns
        .iter()
        .map(|col| header_label(frame, col))
        .collect();
    let body: Vec<Vec<String>> = frame
        .visible_rows()
        .map(|r| r.row.cells.iter().map(|c| truncate(c)).collect())
        .collect();
    let widths = column_widths(&headers, &body);

    lines.push(render_cells(&headers, &widths, Alignment::Left));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    if body.is_empty() {
        lines.push("(no rows)".to_string());
    }
    let alignment = frame.theme.alignment();
    for cells in &body {
        lines.push(render_cells(cells, &widths, alignment));
    }

    if let Some(page) = &frame.page {
        lines.push(render_pagination(page, frame.affordances.page_controls));
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_title(frame: &Frame<'_>) -> String {
    format!("{} ({})", frame.title, format_row_count(frame.matched_count()))
}

fn render_search_line(frame: &Frame<'_>) -> String {
    match &frame.view.query {
        Some(Query::Any(q)) if !q.is_empty() => format!("Search: \"{}\"", q),
        Some(Query::PerColumn(terms)) if !terms.is_empty() => {
            let terms: Vec<String> = terms
                .iter()
                .map(|(col, q)| {
                    let name = frame
                        .columns
                        .get(*col)
                        .map(|c| c.name.as_str())
                        .unwrap_or("?");
                    format!("{}=\"{}\"", name, q)
                })
                .collect();
            format!("Search: {}", terms.join(", "))
        }
        _ => "Search: (none)".to_string(),
    }
}

fn header_label(frame: &Frame<'_>, column: &Column) -> String {
    match frame.view.sort {
        Some(sort) if frame.affordances.sort && sort.column == column.index => {
            format!("{} [{}]", truncate(&column.name), sort.direction.label())
        }
        _ => truncate(&column.name),
    }
}

/// Render pagination footer: "Showing X-Y of Z" plus the page indicator
fn render_pagination(page: &PageWindow, controls: bool) -> String {
    let range = page.visible_range();
    let showing_start = if page.total_rows == 0 { 0 } else { range.start + 1 };
    let showing = format!(
        "Showing {}-{} of {}",
        showing_start, range.end, page.total_rows
    );
    if controls {
        format!(
            "{} | Page {} / {}",
            showing,
            page.current,
            page.total_pages()
        )
    } else {
        showing
    }
}

fn column_widths(headers: &[String], body: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            body.iter()
                .filter_map(|cells| cells.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect()
}

fn render_cells(cells: &[String], widths: &[usize], alignment: Alignment) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width, alignment))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let gap = width.saturating_sub(text.chars().count());
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(gap)),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
    }
}

/// Shorten text to the maximum column width, marking the cut with an ellipsis
fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_COLUMN_WIDTH {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(MAX_COLUMN_WIDTH - 1).collect();
        cut.push('…');
        cut
    }
}

/// Row count badge, abbreviated past a thousand: "999 rows", "1.2K rows", "3.4M rows"
pub fn format_row_count(count: usize) -> String {
    let noun = if count == 1 { "row" } else { "rows" };
    match count {
        0..1_000 => format!("{count} {noun}"),
        1_000..1_000_000 => format!("{:.1}K {noun}", count as f64 / 1e3),
        _ => format!("{:.1}M {noun}", count as f64 / 1e6),
    }
}
