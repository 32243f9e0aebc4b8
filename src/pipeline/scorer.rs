//! Relevance scoring and threshold filtering

use crate::records::Record;
use tracing::debug;

/// Fraction of whitespace-delimited query terms present in the given text
/// fields
///
/// Terms and fields are lowercased; a term matches if it appears as a
/// substring anywhere in the concatenated fields. An empty query scores 0
/// rather than dividing by zero. The exact formula is a preserved policy
/// choice, not a tunable.
pub fn keyword_overlap(query: &str, fields: &[&str]) -> f64 {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    if terms.is_empty() {
        return 0.0;
    }

    let haystack = fields.join(" ").to_lowercase();
    let matches = terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .count();

    matches as f64 / terms.len() as f64
}

/// Score every record, attach the score, and keep only records meeting the
/// threshold
pub fn score_and_filter<T: Record>(
    records: Vec<T>,
    threshold: f64,
    score_fn: impl Fn(&T) -> f64,
) -> Vec<T> {
    let total = records.len();
    let kept: Vec<T> = records
        .into_iter()
        .filter_map(|mut record| {
            let score = score_fn(&record);
            record.set_score(score);
            (score >= threshold).then_some(record)
        })
        .collect();

    debug!("kept {} of {} records at threshold {}", kept.len(), total, threshold);
    kept
}
