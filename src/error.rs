//! Error taxonomy for pipeline runs
//!
//! Every stage surfaces failures as returned values; the only swallowed
//! case is the enricher dropping ids the provider does not know about.

use thiserror::Error;

/// Errors produced by the API client and pipeline stages
#[derive(Debug, Error)]
pub enum Error {
    /// The parent resource (channel, video) does not exist upstream
    #[error("{0} not found")]
    NotFound(String),

    /// Transport or API failure reported by the upstream service
    #[error("upstream API error: {0}")]
    Upstream(String),

    /// No API key was configured for the run
    #[error("API key is not set")]
    MissingApiKey,
}

impl Error {
    /// Wrap a transport-level failure
    pub fn upstream(err: impl std::fmt::Display) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
