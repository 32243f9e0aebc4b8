//! Single-video performance analysis
//!
//! Fetches one video, derives engagement metrics, and optionally analyzes
//! its top comments: the five most-liked comments plus engagement over the
//! last 30 days.

use crate::api::VideoApi;
use crate::config::ReportSettings;
use crate::error::Result;
use crate::pipeline::{mean, rank_by, Direction};
use crate::records::{CommentRecord, VideoRecord};
use crate::report;
use chrono::{DateTime, Utc};
use tracing::info;

/// Number of comment threads fetched for analysis
const COMMENT_SAMPLE_SIZE: u32 = 100;

/// Number of top comments shown in the report
const TOP_COMMENT_COUNT: usize = 5;

/// Comment age cutoff for the recent-engagement metrics, in days
const RECENT_COMMENT_DAYS: i64 = 30;

/// Query for the video performance tool
#[derive(Debug, Clone)]
pub struct VideoPerformance {
    /// The video id to analyze
    pub video_id: String,
    /// Whether to include top comments analysis
    pub include_comments: bool,
}

impl VideoPerformance {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            include_comments: true,
        }
    }

    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }

    /// Analyze the video and render the performance report
    pub async fn run(&self, api: &dyn VideoApi, settings: &ReportSettings) -> Result<String> {
        self.run_at(api, settings, Utc::now()).await
    }

    /// Analysis against an explicit "now", for deterministic time-based
    /// metrics
    pub async fn run_at(
        &self,
        api: &dyn VideoApi,
        settings: &ReportSettings,
        now: DateTime<Utc>,
    ) -> Result<String> {
        info!("video performance analysis for {}", self.video_id);

        let video: VideoRecord = api.get_video(&self.video_id).await?.into();

        let comments = if self.include_comments && video.comment_count > 0 {
            let threads = api
                .comment_threads(&self.video_id, COMMENT_SAMPLE_SIZE)
                .await?;
            let mut comments: Vec<CommentRecord> = threads
                .into_iter()
                .filter_map(CommentRecord::from_thread)
                .collect();
            rank_by(
                &mut comments,
                |c| c.like_count as f64,
                Direction::Descending,
            );
            comments
        } else {
            Vec::new()
        };

        Ok(render(&video, &comments, settings, now))
    }
}

fn render(
    video: &VideoRecord,
    comments: &[CommentRecord],
    settings: &ReportSettings,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::from("Video Performance Analysis\n");
    out += &report::rule('=', settings.rule_width);
    out += "\n\n";

    out += "Basic Information:\n";
    out += &format!("Title: {}\n", video.title);
    out += &format!("Channel: {}\n", video.channel_title);
    out += &format!(
        "Published: {}\n",
        video.published_at.format("%Y-%m-%d %H:%M UTC")
    );
    out += &format!("Duration: {}\n", video.duration());
    out += &report::rule('-', settings.rule_width);
    out += "\n\n";

    out += "Performance Metrics:\n";
    out += &format!("Views: {}\n", report::thousands(video.view_count));
    out += &format!("Likes: {}\n", report::thousands(video.like_count));
    out += &format!("Comments: {}\n", report::thousands(video.comment_count));
    out += &format!(
        "Views per Day: {}\n",
        report::thousands_fixed2(video.views_per_day(now))
    );
    out += &format!(
        "Engagement Rate: {}\n",
        report::percent(video.engagement_rate())
    );
    out += &report::rule('-', settings.rule_width);
    out += "\n\n";

    if !comments.is_empty() {
        out += "Top Comments Analysis:\n";
        for (idx, comment) in comments.iter().take(TOP_COMMENT_COUNT).enumerate() {
            out += &format!("{}. Likes: {}\n", idx + 1, report::thousands(comment.like_count));
            out += &format!("   Author: {}\n", comment.author);
            out += &format!(
                "   Comment: {}\n",
                report::truncate(&comment.text, settings.description_limit)
            );
            out += &format!("   Posted: {}\n", comment.published_at.format("%Y-%m-%d"));
            out += "\n";
        }

        let recent: Vec<&CommentRecord> = comments
            .iter()
            .filter(|c| (now - c.published_at).num_days() <= RECENT_COMMENT_DAYS)
            .collect();
        let average_likes = mean(&recent, |c| c.like_count as f64);

        out += "Comment Engagement Metrics:\n";
        out += &format!("Average Likes per Comment: {:.2}\n", average_likes);
        out += &format!("Recent Comments (30 days): {}\n", recent.len());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        ApiVideo, CommentSnippet, CommentThread, CommentThreadSnippet, TopLevelComment,
        VideoContentDetails, VideoSnippet, VideoStatistics,
    };
    use crate::error::Error;
    use crate::tools::testing::MockApi;
    use chrono::TimeZone;

    fn video(views: u64, likes: u64, comments: u64) -> ApiVideo {
        ApiVideo {
            id: "vid1".to_string(),
            snippet: Some(VideoSnippet {
                title: "Launch Review".to_string(),
                channel_title: "Tech Channel".to_string(),
                published_at: "2024-01-01T12:00:00Z".to_string(),
            }),
            statistics: Some(VideoStatistics {
                view_count: Some(views.to_string()),
                like_count: Some(likes.to_string()),
                comment_count: Some(comments.to_string()),
            }),
            content_details: Some(VideoContentDetails {
                duration: Some("PT10M30S".to_string()),
            }),
        }
    }

    fn thread(author: &str, likes: u64, published: &str) -> CommentThread {
        CommentThread {
            snippet: Some(CommentThreadSnippet {
                top_level_comment: Some(TopLevelComment {
                    snippet: Some(CommentSnippet {
                        text_display: format!("comment by {}", author),
                        author_display_name: author.to_string(),
                        like_count: likes,
                        published_at: published.to_string(),
                    }),
                }),
            }),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_metrics_rendering() {
        let api = MockApi {
            videos: vec![video(10_000, 400, 100)],
            comments: vec![
                thread("alice", 5, "2024-01-02T00:00:00Z"),
                thread("bob", 50, "2024-01-03T00:00:00Z"),
                thread("carol", 20, "2023-01-01T00:00:00Z"),
            ],
            ..Default::default()
        };

        let output = VideoPerformance::new("vid1")
            .run_at(&api, &ReportSettings::default(), fixed_now())
            .await
            .unwrap();

        assert!(output.contains("Title: Launch Review"));
        assert!(output.contains("Duration: 0h 10m 30s"));
        assert!(output.contains("Views: 10,000"));
        // (400 + 100) / 10000 = 5%
        assert!(output.contains("Engagement Rate: 5.00%"));
        // 10000 views over 10 days
        assert!(output.contains("Views per Day: 1,000.00"));
        // Comments ranked by likes
        assert!(output.contains("1. Likes: 50"));
        assert!(output.contains("Author: bob"));
        // Only alice and bob are within the 30-day window
        assert!(output.contains("Recent Comments (30 days): 2"));
        assert!(output.contains("Average Likes per Comment: 27.50"));
    }

    #[tokio::test]
    async fn test_zero_view_video() {
        let api = MockApi {
            videos: vec![video(0, 10, 0)],
            ..Default::default()
        };

        let output = VideoPerformance::new("vid1")
            .run_at(&api, &ReportSettings::default(), fixed_now())
            .await
            .unwrap();

        assert!(output.contains("Engagement Rate: 0.00%"));
        assert!(output.contains("Views per Day: 0.00"));
    }

    #[tokio::test]
    async fn test_comments_skipped_when_disabled() {
        let api = MockApi {
            videos: vec![video(1000, 10, 5)],
            comments: vec![thread("alice", 5, "2024-01-02T00:00:00Z")],
            ..Default::default()
        };

        let output = VideoPerformance::new("vid1")
            .with_comments(false)
            .run_at(&api, &ReportSettings::default(), fixed_now())
            .await
            .unwrap();

        assert!(!output.contains("Top Comments Analysis"));
    }

    #[tokio::test]
    async fn test_missing_video_is_not_found() {
        let api = MockApi::default();
        let err = VideoPerformance::new("gone")
            .run(&api, &ReportSettings::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
