//! Sort stage: orders rows by one column's text, ignoring case.
//!
//! The sort is stable in both directions: rows with equal keys keep the
//! order they came in with.

use crate::types::{Row, SortDirection, SortSpec};
use std::cmp::Ordering;

/// Reorder `order` (row positions) by the column in `sort`. `None` leaves it as is.
pub fn apply(rows: &[Row], order: &mut Vec<usize>, sort: Option<SortSpec>) {
    let Some(SortSpec { column, direction }) = sort else {
        return;
    };

    let mut keyed: Vec<(String, usize)> = order
        .iter()
        .map(|&i| {
            let key = rows
                .get(i)
                .and_then(|row| row.get(column))
                .unwrap_or_default()
                .to_lowercase();
            (key, i)
        })
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, direction));

    order.clear();
    order.extend(keyed.into_iter().map(|(_, i)| i));
}

fn compare(a: &str, b: &str, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => a.cmp(b),
        SortDirection::Descending => b.cmp(a),
    }
}
