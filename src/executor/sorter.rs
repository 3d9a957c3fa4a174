//! Result sorting for query execution
//!
//! Sort is stable: rows with equal keys keep their file order.
//!
//! The key comparison mixes integer and text ordering and is not a total
//! order over a column holding both. The merge sort below stays
//! deterministic and panic-free for any comparison.

use std::cmp::Ordering;

use crate::query::{OrderSpec, SortDirection};
use crate::table::{Row, TableResult};

use super::compare::ValueComparator;

/// Sorts source rows
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts rows by `order`. An absent order returns the rows unchanged.
    ///
    /// `order.column` must name a source column.
    pub fn sort(rows: Vec<Row>, order: Option<&OrderSpec>) -> TableResult<Vec<Row>> {
        let order = match order {
            Some(order) => order,
            None => return Ok(rows),
        };

        let mut keyed = Vec::with_capacity(rows.len());
        for row in rows {
            let key = row.require(&order.column)?.to_string();
            keyed.push((key, row));
        }

        let sorted = merge_sort(keyed, &|(a, _): &(String, Row), (b, _): &(String, Row)| {
            let ordering = ValueComparator::compare(a, b);
            match order.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        Ok(sorted.into_iter().map(|(_, row)| row).collect())
    }
}

/// Stable top-down merge sort. Ties and inconsistent answers take the left item.
fn merge_sort<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let mut left = merge_sort(items, compare).into_iter().peekable();
    let mut right = merge_sort(right, compare).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }
    merged
}
