//! Batched enrichment of harvested ids into full records

use crate::error::Result;
use crate::records::Record;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tracing::debug;

/// Enrich a sequence of ids into records via batched lookup calls
///
/// Ids are deduplicated first-seen, chunked into batches of at most
/// `batch_limit`, and looked up one batch at a time. The returned records
/// follow the first-seen order of the input ids regardless of the order the
/// provider answered in; ids the provider does not know about are silently
/// dropped. Never returns more records than unique input ids and never
/// duplicates an id.
pub async fn enrich<T, F, Fut>(ids: &[String], batch_limit: usize, mut lookup: F) -> Result<Vec<T>>
where
    T: Record,
    F: FnMut(Vec<String>) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut seen = HashSet::new();
    let unique: Vec<String> = ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect();

    let mut by_id: HashMap<String, T> = HashMap::new();

    for batch in unique.chunks(batch_limit.max(1)) {
        let records = lookup(batch.to_vec()).await?;
        debug!(
            "batch of {} ids enriched into {} records",
            batch.len(),
            records.len()
        );
        for record in records {
            by_id.entry(record.id().to_string()).or_insert(record);
        }
    }

    Ok(unique
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect())
}
