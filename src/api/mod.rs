//! Data API collaborator
//!
//! `VideoApi` is the seam between the pipeline and the upstream service:
//! the pipeline only ever calls these operations, never transport directly.
//! `YouTubeApi` is the real implementation over [`crate::network::HttpClient`].

mod client;
mod duration;
pub mod types;

pub use client::YouTubeApi;
pub use duration::{parse_duration, parse_duration_seconds, VideoDuration};

use crate::error::Result;
use async_trait::async_trait;
use types::{ApiChannel, ApiVideo, CommentThread};

/// One page of a video listing: the harvested ids plus the continuation
/// token for the next page, if any
#[derive(Debug, Clone, Default)]
pub struct VideoPage {
    pub ids: Vec<String>,
    pub next_token: Option<String>,
}

/// Operations the analytics pipeline needs from the video platform
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Search for channels matching a free-text query, returning channel ids
    async fn search_channels(&self, query: &str, max_results: u32) -> Result<Vec<String>>;

    /// Batch lookup of full channel resources
    async fn get_channels(&self, ids: &[String]) -> Result<Vec<ApiChannel>>;

    /// Fetch a single channel, failing with `NotFound` when it does not exist
    async fn get_channel(&self, id: &str) -> Result<ApiChannel>;

    /// Resolve a channel's uploads playlist id, failing with `NotFound`
    /// when the channel does not exist
    async fn uploads_playlist(&self, channel_id: &str) -> Result<String>;

    /// Fetch one page of video ids from a playlist
    async fn playlist_page(
        &self,
        playlist_id: &str,
        token: Option<&str>,
        page_size: u32,
    ) -> Result<VideoPage>;

    /// Batch lookup of full video resources
    async fn get_videos(&self, ids: &[String]) -> Result<Vec<ApiVideo>>;

    /// Fetch a single video, failing with `NotFound` when it does not exist
    async fn get_video(&self, id: &str) -> Result<ApiVideo>;

    /// Fetch relevance-ordered top-level comment threads for a video
    async fn comment_threads(&self, video_id: &str, max_results: u32)
        -> Result<Vec<CommentThread>>;
}
