//! Error types for table operations
//!
//! Every core operation validates its input completely before touching the
//! grid, so an `Err` always means the table is unchanged.

use crate::data::DataError;
use std::fmt;
use thiserror::Error;

/// Which dimension of the grid an index referred to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors that can occur during table operations
#[derive(Error, Debug)]
pub enum TableError {
    /// Row or column position outside the valid bounds
    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    /// Supplied row or column data has the wrong length
    #[error("expected {expected} values, got {found}")]
    InvalidArity { expected: usize, found: usize },

    /// A record in a bulk load has the wrong number of fields
    #[error("record {record} has {found} fields, expected {expected}")]
    ArityMismatch {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// Missing or malformed argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bulk input could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] DataError),
}

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    pub(crate) fn row_out_of_range(index: usize, len: usize) -> Self {
        TableError::IndexOutOfRange {
            axis: Axis::Row,
            index,
            len,
        }
    }

    pub(crate) fn column_out_of_range(index: usize, len: usize) -> Self {
        TableError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            len,
        }
    }
}
