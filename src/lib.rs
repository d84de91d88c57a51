//! EasyTable - table state and view synchronization.
//!
//! A table is a grid of text cells plus a view that may be searched, sorted
//! and paginated at the same time. The grid is the only source of truth; the
//! displayed rows are recomputed from it after every change and handed to
//! subscribed renderers.
//!
//! ## Modules
//!
//! - `grid`: row and column storage
//! - `view`: the filter, sort and page pipeline
//! - `controller`: public operations tying grid and view together
//! - `options`, `theme`: construction options and theme lookup
//! - `render`: renderer contract and a plain-text renderer
//! - `data`: CSV and JSON record parsing and formatting

pub mod constants;
pub mod controller;
pub mod data;
pub mod error;
pub mod grid;
pub mod options;
pub mod render;
pub mod theme;
pub mod types;
pub mod view;

pub use controller::TableController;
pub use error::{Axis, TableError, TableResult};
pub use options::{Paginate, TableOptions};
pub use render::{Frame, Renderer, TextRenderer};
pub use types::{Query, Row, SortDirection, SortSpec, ViewState};
