//! Analysis tools
//!
//! Each tool is one self-contained pipeline run: build a query, call the
//! API collaborator, reshape the JSON into records, score/sort, and render
//! a plain-text report.

mod competitors;
mod demographics;
mod performance;
mod videos;

pub use competitors::{CompetitorSearch, CompetitorSummary};
pub use demographics::ChannelDemographics;
pub use performance::VideoPerformance;
pub use videos::{SortBy, VideoFetching};

#[cfg(test)]
pub(crate) mod testing {
    //! Canned in-memory implementation of `VideoApi` for tool-level tests

    use crate::api::types::{ApiChannel, ApiVideo, CommentThread};
    use crate::api::{VideoApi, VideoPage};
    use crate::error::{Error, Result};
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockApi {
        pub channels: Vec<ApiChannel>,
        pub search_results: Vec<String>,
        pub uploads: HashMap<String, String>,
        pub playlist_pages: Mutex<VecDeque<VideoPage>>,
        pub videos: Vec<ApiVideo>,
        pub comments: Vec<CommentThread>,
    }

    impl MockApi {
        pub fn with_pages(mut self, pages: Vec<VideoPage>) -> Self {
            self.playlist_pages = Mutex::new(pages.into());
            self
        }
    }

    #[async_trait]
    impl VideoApi for MockApi {
        async fn search_channels(&self, _query: &str, max_results: u32) -> Result<Vec<String>> {
            Ok(self
                .search_results
                .iter()
                .take(max_results as usize)
                .cloned()
                .collect())
        }

        async fn get_channels(&self, ids: &[String]) -> Result<Vec<ApiChannel>> {
            Ok(self
                .channels
                .iter()
                .filter(|c| ids.contains(&c.id))
                .cloned()
                .collect())
        }

        async fn get_channel(&self, id: &str) -> Result<ApiChannel> {
            self.channels
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("channel {}", id)))
        }

        async fn uploads_playlist(&self, channel_id: &str) -> Result<String> {
            self.uploads
                .get(channel_id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("channel {}", channel_id)))
        }

        async fn playlist_page(
            &self,
            _playlist_id: &str,
            _token: Option<&str>,
            _page_size: u32,
        ) -> Result<VideoPage> {
            Ok(self
                .playlist_pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_default())
        }

        async fn get_videos(&self, ids: &[String]) -> Result<Vec<ApiVideo>> {
            Ok(self
                .videos
                .iter()
                .filter(|v| ids.contains(&v.id))
                .cloned()
                .collect())
        }

        async fn get_video(&self, id: &str) -> Result<ApiVideo> {
            self.videos
                .iter()
                .find(|v| v.id == id)
                .cloned()
                .ok_or_else(|| Error::NotFound(format!("video {}", id)))
        }

        async fn comment_threads(
            &self,
            _video_id: &str,
            max_results: u32,
        ) -> Result<Vec<CommentThread>> {
            Ok(self
                .comments
                .iter()
                .take(max_results as usize)
                .cloned()
                .collect())
        }
    }
}
