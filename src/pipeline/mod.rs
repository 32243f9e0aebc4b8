//! Shared aggregation pipeline
//!
//! Every tool is the same five-stage shape: paginate a listing endpoint,
//! enrich the harvested ids via batch lookup, score and filter the records,
//! rank them on a numeric key, and summarize the survivors. Stages run
//! strictly in order; a stage failure terminates the run with its error and
//! no partial results.

mod enricher;
mod paginator;
mod ranker;
mod scorer;
mod summarizer;

pub use enricher::enrich;
pub use paginator::paginate;
pub use ranker::{rank_by, Direction};
pub use scorer::{keyword_overlap, score_and_filter};
pub use summarizer::mean;

/// Stages of one pipeline run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Querying,
    Paginating,
    Enriching,
    Scoring,
    Ranking,
    Summarizing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Querying => "querying",
            Self::Paginating => "paginating",
            Self::Enriching => "enriching",
            Self::Scoring => "scoring",
            Self::Ranking => "ranking",
            Self::Summarizing => "summarizing",
        };
        write!(f, "{}", name)
    }
}
