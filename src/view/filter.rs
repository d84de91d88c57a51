//! Search stage: keeps the rows a query matches, in their original order.
//!
//! Matching is case-insensitive substring containment; both sides are
//! uppercased before comparing.

use crate::types::{Query, Row};

/// Positions of the rows matched by `query`. `None` or an empty query keeps every row.
pub fn apply(rows: &[Row], query: Option<&Query>) -> Vec<usize> {
    match query {
        Some(query) if !query.is_empty() => {
            let query = Normalized::new(query);
            rows.iter()
                .enumerate()
                .filter(|(_, row)| query.matches(row))
                .map(|(i, _)| i)
                .collect()
        }
        _ => (0..rows.len()).collect(),
    }
}

/// Whether a single row passes `query`.
pub fn row_matches(row: &Row, query: &Query) -> bool {
    query.is_empty() || Normalized::new(query).matches(row)
}

/// A query with its terms uppercased once up front.
enum Normalized {
    Any(String),
    PerColumn(Vec<(usize, String)>),
}

impl Normalized {
    fn new(query: &Query) -> Self {
        match query {
            Query::Any(q) => Normalized::Any(q.to_uppercase()),
            Query::PerColumn(terms) => Normalized::PerColumn(
                terms
                    .iter()
                    .filter(|(_, q)| !q.is_empty())
                    .map(|(col, q)| (*col, q.to_uppercase()))
                    .collect(),
            ),
        }
    }

    fn matches(&self, row: &Row) -> bool {
        match self {
            // One matching cell is enough
            Normalized::Any(needle) => row.cells.iter().any(|cell| contains(cell, needle)),
            // Every column term must match its own cell
            Normalized::PerColumn(terms) => terms
                .iter()
                .all(|(col, needle)| row.get(*col).is_some_and(|cell| contains(cell, needle))),
        }
    }
}

fn contains(cell: &str, needle: &str) -> bool {
    cell.to_uppercase().contains(needle)
}
