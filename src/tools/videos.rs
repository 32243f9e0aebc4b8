//! Channel video listing
//!
//! Resolves a channel's uploads playlist, paginates video ids up to the
//! requested count, enriches them into full records, and sorts by publish
//! date or view count.

use crate::api::VideoApi;
use crate::config::ReportSettings;
use crate::error::Result;
use crate::pipeline::{enrich, paginate, rank_by, Direction, Stage};
use crate::records::VideoRecord;
use crate::report;
use crate::{DEFAULT_PAGE_SIZE, MAX_BATCH_SIZE};
use tracing::{debug, info};

/// Sort order for the video listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Newest first
    Date,
    /// Most viewed first
    Views,
}

impl std::str::FromStr for SortBy {
    type Err = std::convert::Infallible;

    /// "views" selects view-count order; anything else defaults to date
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "views" => Self::Views,
            _ => Self::Date,
        })
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Views => write!(f, "views"),
        }
    }
}

/// Query for the video listing tool
#[derive(Debug, Clone)]
pub struct VideoFetching {
    /// The channel id to fetch videos from
    pub channel_id: String,
    /// Maximum number of videos to fetch
    pub max_results: u32,
    /// Sort order
    pub sort_by: SortBy,
}

impl VideoFetching {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            max_results: 50,
            sort_by: SortBy::Date,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Fetch and sort the channel's videos
    pub async fn fetch(&self, api: &dyn VideoApi) -> Result<Vec<VideoRecord>> {
        info!(
            "video listing for {} (max {}, sorted by {})",
            self.channel_id, self.max_results, self.sort_by
        );

        debug!("stage: {}", Stage::Querying);
        let playlist_id = api.uploads_playlist(&self.channel_id).await?;

        debug!("stage: {}", Stage::Paginating);
        let ids = paginate(
            self.max_results as usize,
            DEFAULT_PAGE_SIZE,
            |token, wanted| {
                let playlist_id = playlist_id.clone();
                async move {
                    api.playlist_page(&playlist_id, token.as_deref(), wanted)
                        .await
                }
            },
        )
        .await?;

        debug!("stage: {}", Stage::Enriching);
        let mut videos: Vec<VideoRecord> = enrich(&ids, MAX_BATCH_SIZE, |batch| async move {
            let found = api.get_videos(&batch).await?;
            Ok(found.into_iter().map(VideoRecord::from).collect())
        })
        .await?;

        debug!("stage: {}", Stage::Ranking);
        match self.sort_by {
            SortBy::Views => rank_by(
                &mut videos,
                |v| v.view_count as f64,
                Direction::Descending,
            ),
            SortBy::Date => rank_by(
                &mut videos,
                |v| v.published_at.timestamp() as f64,
                Direction::Descending,
            ),
        }

        Ok(videos)
    }

    /// Fetch the videos and render the listing report
    pub async fn run(&self, api: &dyn VideoApi, settings: &ReportSettings) -> Result<String> {
        let videos = self.fetch(api).await?;

        if videos.is_empty() {
            return Ok("No videos found in the uploads playlist.".to_string());
        }

        Ok(render(&videos, self.sort_by, settings))
    }
}

fn render(videos: &[VideoRecord], sort_by: SortBy, settings: &ReportSettings) -> String {
    let mut out = format!("Videos from channel (sorted by {}):\n", sort_by);
    out += &report::rule('=', settings.rule_width);
    out += "\n\n";

    for (idx, video) in videos.iter().enumerate() {
        out += &format!("{}. {}\n", idx + 1, video.title);
        out += &format!("   Published: {}\n", video.published_at.format("%Y-%m-%d"));
        out += &format!("   Views: {}\n", report::thousands(video.view_count));
        out += &format!("   Likes: {}\n", report::thousands(video.like_count));
        out += &format!("   Comments: {}\n", report::thousands(video.comment_count));
        out += &format!("   URL: {}\n", video.url);
        out += &report::rule('-', settings.rule_width);
        out += "\n";
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ApiVideo, VideoSnippet, VideoStatistics};
    use crate::api::VideoPage;
    use crate::error::Error;
    use crate::tools::testing::MockApi;
    use std::collections::HashMap;

    fn video(id: &str, published: &str, views: u64) -> ApiVideo {
        ApiVideo {
            id: id.to_string(),
            snippet: Some(VideoSnippet {
                title: format!("Video {}", id),
                channel_title: "Chan".to_string(),
                published_at: published.to_string(),
            }),
            statistics: Some(VideoStatistics {
                view_count: Some(views.to_string()),
                like_count: Some("1".to_string()),
                comment_count: Some("0".to_string()),
            }),
            content_details: None,
        }
    }

    fn mock() -> MockApi {
        MockApi {
            uploads: HashMap::from([("UC1".to_string(), "UU1".to_string())]),
            videos: vec![
                video("v1", "2024-01-01T00:00:00Z", 100),
                video("v2", "2024-03-01T00:00:00Z", 50),
                video("v3", "2024-02-01T00:00:00Z", 300),
            ],
            ..Default::default()
        }
        .with_pages(vec![VideoPage {
            ids: vec!["v1".to_string(), "v2".to_string(), "v3".to_string()],
            next_token: None,
        }])
    }

    #[tokio::test]
    async fn test_sorted_by_views() {
        let api = mock();
        let videos = VideoFetching::new("UC1")
            .with_sort(SortBy::Views)
            .fetch(&api)
            .await
            .unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v3", "v1", "v2"]);
    }

    #[tokio::test]
    async fn test_sorted_by_date() {
        let api = mock();
        let videos = VideoFetching::new("UC1").fetch(&api).await.unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v2", "v3", "v1"]);
    }

    #[tokio::test]
    async fn test_missing_channel_is_not_found() {
        let api = MockApi::default();
        let err = VideoFetching::new("UCnope").fetch(&api).await.err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_playlist_report() {
        let api = MockApi {
            uploads: HashMap::from([("UC1".to_string(), "UU1".to_string())]),
            ..Default::default()
        };
        let output = VideoFetching::new("UC1")
            .run(&api, &ReportSettings::default())
            .await
            .unwrap();
        assert_eq!(output, "No videos found in the uploads playlist.");
    }

    #[tokio::test]
    async fn test_respects_max_results() {
        let api = mock();
        let videos = VideoFetching::new("UC1")
            .with_max_results(2)
            .fetch(&api)
            .await
            .unwrap();
        assert_eq!(videos.len(), 2);
    }

    #[test]
    fn test_sort_by_parsing() {
        assert_eq!("views".parse::<SortBy>().unwrap(), SortBy::Views);
        assert_eq!("VIEWS".parse::<SortBy>().unwrap(), SortBy::Views);
        assert_eq!("date".parse::<SortBy>().unwrap(), SortBy::Date);
        assert_eq!("anything".parse::<SortBy>().unwrap(), SortBy::Date);
    }
}
