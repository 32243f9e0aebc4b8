//! Aggregate statistics over the final record set

/// Arithmetic mean of a numeric field across all records
///
/// An empty sequence yields 0.0 rather than a division fault; callers render
/// that as an empty-but-valid summary.
pub fn mean<T>(records: &[T], field: impl Fn(&T) -> f64) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(&field).sum();
    total / records.len() as f64
}
