//! Stable ranking of records on a numeric key

use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Stable-sort records in place by a numeric key
///
/// Ties keep their incoming relative order, so reports are reproducible
/// across runs with identical input.
pub fn rank_by<T>(records: &mut [T], key: impl Fn(&T) -> f64, direction: Direction) {
    records.sort_by(|a, b| {
        let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
}
