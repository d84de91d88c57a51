//! Record parsing and formatting
//!
//! This module provides the bulk interchange collaborators of the table:
//! pure functions that turn CSV or JSON text into rows and rows back into
//! text. They never touch a table; the controller validates their output
//! against the grid before loading anything.
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `TooManyRows`: Input exceeds the load limit
//! - `Io`: File system errors
//! - `Csv`/`Json`: Parse errors
//! - `UnknownColumn`: JSON key with no matching header

mod csv_parser;
mod error;
mod json_parser;

pub use csv_parser::*;
pub use error::*;
pub use json_parser::*;
