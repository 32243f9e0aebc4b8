//! Enriched record types produced by the pipeline

mod types;

pub use types::{ChannelRecord, CommentRecord, VideoRecord};

/// Common surface of enriched records: identity plus an optional derived
/// score attached by the scoring stage
pub trait Record {
    /// Primary identifier, unique within one pipeline run
    fn id(&self) -> &str;

    /// Derived score, if the scoring stage has run
    fn score(&self) -> Option<f64>;

    /// Attach a derived score
    fn set_score(&mut self, score: f64);
}
