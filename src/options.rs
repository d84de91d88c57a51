//! Construction options.
//!
//! Options arrive as a JSON object (camelCase keys) or are assembled with
//! the `with_*` builders:
//!
//! ```json
//! {
//!   "columns": ["Model", "Brand", "Year"],
//!   "enableSearch": true,
//!   "enableSort": true,
//!   "paginate": { "perPage": 4, "default": true },
//!   "defaultStyle": 2
//! }
//! ```
//!
//! `paginate` may also be a bare integer. `defaultSearch` and `defaultSort`
//! are accepted as older spellings of `enableSearch` and `enableSort`.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::data::DataResult;
use crate::error::{TableError, TableResult};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pagination setting: a bare page size or the full object form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paginate {
    PerPage(usize),
    Config {
        #[serde(rename = "perPage", default = "default_page_size")]
        per_page: usize,
        /// Show the built-in previous/next controls
        #[serde(default)]
        default: bool,
    },
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Paginate {
    pub fn per_page(&self) -> usize {
        match self {
            Paginate::PerPage(n) => *n,
            Paginate::Config { per_page, .. } => *per_page,
        }
    }

    /// Whether the built-in page controls are shown
    pub fn shows_controls(&self) -> bool {
        match self {
            Paginate::PerPage(_) => true,
            Paginate::Config { default, .. } => *default,
        }
    }
}

/// Options recognised when creating a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// Column headers, in order
    pub columns: Vec<String>,
    #[serde(default, alias = "defaultSearch")]
    pub enable_search: bool,
    #[serde(default, alias = "defaultSort")]
    pub enable_sort: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paginate: Option<Paginate>,
    /// Built-in theme id (1-3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<u8>,
    /// External stylesheet reference; overrides `default_style`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

impl TableOptions {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            enable_search: false,
            enable_sort: false,
            paginate: None,
            default_style: None,
            stylesheet: None,
        }
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> DataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file
    pub fn from_file(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn with_search(mut self) -> Self {
        self.enable_search = true;
        self
    }

    pub fn with_sort(mut self) -> Self {
        self.enable_sort = true;
        self
    }

    /// Paginate with `per_page` rows and the built-in page controls
    pub fn with_pagination(mut self, per_page: usize) -> Self {
        self.paginate = Some(Paginate::Config {
            per_page,
            default: true,
        });
        self
    }

    pub fn with_style(mut self, style: u8) -> Self {
        self.default_style = Some(style);
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Check values serde cannot: page size, at least one column and
    /// header uniqueness
    pub fn validate(&self) -> TableResult<()> {
        if let Some(paginate) = &self.paginate {
            if paginate.per_page() == 0 {
                return Err(TableError::InvalidArgument(
                    "perPage must be at least 1".to_string(),
                ));
            }
        }
        if self.columns.is_empty() {
            return Err(TableError::InvalidArgument(
                "a table needs at least one column".to_string(),
            ));
        }
        for (i, name) in self.columns.iter().enumerate() {
            if self.columns[..i].contains(name) {
                return Err(TableError::InvalidArgument(format!(
                    "duplicate column header '{name}'"
                )));
            }
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::resolve(self.default_style, self.stylesheet.as_deref())
    }
}
