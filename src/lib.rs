//! ytlens: a YouTube channel and video analytics toolkit written in Rust
//!
//! Four independent analysis tools built on one shared pipeline:
//! paginate a listing endpoint, enrich the collected ids via batch lookup,
//! score and filter the records, rank them, and summarize the result.

pub mod api;
pub mod config;
pub mod error;
pub mod network;
pub mod pipeline;
pub mod records;
pub mod report;
pub mod tools;

pub use api::{VideoApi, YouTubeApi};
pub use config::Settings;
pub use error::Error;
pub use records::{ChannelRecord, CommentRecord, VideoRecord};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page size for listing endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Maximum number of ids the Data API accepts in one batch lookup
pub const MAX_BATCH_SIZE: usize = 50;

/// Default timeout for API requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;
