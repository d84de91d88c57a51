//! Error types for data operations
//!
//! Provides unified error handling for record parsing and formatting.

use thiserror::Error;

/// Errors that can occur while parsing bulk records
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parse error on line {line}: {message}")]
    Csv { line: usize, message: String },

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Too many records for one load
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// Object key that matches no column header
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
