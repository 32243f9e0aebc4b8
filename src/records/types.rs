//! Record type definitions
//!
//! Records are built from the API's partially-optional resources exactly
//! once, at the enricher boundary: string counts become integers, timestamps
//! become `DateTime<Utc>`, and absent fields get their documented defaults.

use super::Record;
use crate::api::types::{ApiChannel, ApiVideo, CommentThread};
use crate::api::{parse_duration_seconds, VideoDuration};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One enriched channel
#[derive(Debug, Clone, Serialize)]
pub struct ChannelRecord {
    /// Channel id (primary identifier)
    pub id: String,
    /// Channel title
    pub title: String,
    /// Full channel description
    pub description: String,
    /// Branding keywords, empty when unset
    pub keywords: String,
    /// Country code, if declared
    pub country: Option<String>,
    /// Custom URL handle, if claimed
    pub custom_url: Option<String>,
    /// Channel creation timestamp
    pub published_at: DateTime<Utc>,
    /// Subscriber count (0 when hidden)
    pub subscriber_count: u64,
    /// Whether the subscriber count is hidden by the owner
    pub hidden_subscribers: bool,
    /// Number of public videos
    pub video_count: u64,
    /// Lifetime view count
    pub view_count: u64,
    /// Topic category URLs
    pub topics: Vec<String>,
    /// Canonical channel URL
    pub url: String,
    /// Derived relevance score
    pub score: Option<f64>,
}

impl ChannelRecord {
    /// Topic categories as human-readable names (last URL segment,
    /// underscores replaced)
    pub fn topic_names(&self) -> Vec<String> {
        self.topics
            .iter()
            .map(|topic| {
                topic
                    .rsplit('/')
                    .next()
                    .unwrap_or(topic)
                    .replace('_', " ")
            })
            .collect()
    }
}

impl Record for ChannelRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn score(&self) -> Option<f64> {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }
}

impl From<ApiChannel> for ChannelRecord {
    fn from(channel: ApiChannel) -> Self {
        let snippet = channel.snippet.unwrap_or_default();
        let stats = channel.statistics.unwrap_or_default();
        let keywords = channel
            .branding_settings
            .and_then(|b| b.channel)
            .and_then(|c| c.keywords)
            .unwrap_or_default();
        let topics = channel
            .topic_details
            .map(|t| t.topic_categories)
            .unwrap_or_default();
        let url = format!("https://www.youtube.com/channel/{}", channel.id);

        Self {
            id: channel.id,
            title: snippet.title,
            description: snippet.description,
            keywords,
            country: snippet.country,
            custom_url: snippet.custom_url,
            published_at: parse_timestamp(&snippet.published_at),
            subscriber_count: parse_count(stats.subscriber_count.as_deref()),
            hidden_subscribers: stats.hidden_subscriber_count,
            video_count: parse_count(stats.video_count.as_deref()),
            view_count: parse_count(stats.view_count.as_deref()),
            topics,
            url,
            score: None,
        }
    }
}

/// One enriched video
#[derive(Debug, Clone, Serialize)]
pub struct VideoRecord {
    /// Video id (primary identifier)
    pub id: String,
    /// Video title
    pub title: String,
    /// Owning channel title
    pub channel_title: String,
    /// Publish timestamp
    pub published_at: DateTime<Utc>,
    /// View count
    pub view_count: u64,
    /// Like count (0 when withheld)
    pub like_count: u64,
    /// Comment count
    pub comment_count: u64,
    /// Length in seconds
    pub duration_seconds: u64,
    /// Canonical watch URL
    pub url: String,
    /// Derived score
    pub score: Option<f64>,
}

impl VideoRecord {
    /// (likes + comments) / views; a video with zero views has zero
    /// engagement, not an arithmetic fault
    pub fn engagement_rate(&self) -> f64 {
        if self.view_count == 0 {
            return 0.0;
        }
        (self.like_count + self.comment_count) as f64 / self.view_count as f64
    }

    /// Views per day since publication, measured against at least one day
    pub fn views_per_day(&self, now: DateTime<Utc>) -> f64 {
        let days = (now - self.published_at).num_days().max(1);
        self.view_count as f64 / days as f64
    }

    /// Length split into clock components for display
    pub fn duration(&self) -> VideoDuration {
        VideoDuration {
            hours: self.duration_seconds / 3600,
            minutes: (self.duration_seconds % 3600) / 60,
            seconds: self.duration_seconds % 60,
        }
    }
}

impl Record for VideoRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn score(&self) -> Option<f64> {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }
}

impl From<ApiVideo> for VideoRecord {
    fn from(video: ApiVideo) -> Self {
        let snippet = video.snippet.unwrap_or_default();
        let stats = video.statistics.unwrap_or_default();
        let duration_seconds = video
            .content_details
            .and_then(|c| c.duration)
            .map(|d| parse_duration_seconds(&d))
            .unwrap_or(0);
        let url = format!("https://www.youtube.com/watch?v={}", video.id);

        Self {
            id: video.id,
            title: snippet.title,
            channel_title: snippet.channel_title,
            published_at: parse_timestamp(&snippet.published_at),
            view_count: parse_count(stats.view_count.as_deref()),
            like_count: parse_count(stats.like_count.as_deref()),
            comment_count: parse_count(stats.comment_count.as_deref()),
            duration_seconds,
            url,
            score: None,
        }
    }
}

/// One top-level comment on a video
#[derive(Debug, Clone, Serialize)]
pub struct CommentRecord {
    /// Display name of the author
    pub author: String,
    /// Rendered comment text
    pub text: String,
    /// Like count
    pub like_count: u64,
    /// Publish timestamp
    pub published_at: DateTime<Utc>,
}

impl CommentRecord {
    /// Flatten one comment thread into its top-level comment, dropping
    /// threads the API returned without a readable comment
    pub fn from_thread(thread: CommentThread) -> Option<Self> {
        let snippet = thread
            .snippet?
            .top_level_comment?
            .snippet?;
        Some(Self {
            author: snippet.author_display_name,
            text: snippet.text_display,
            like_count: snippet.like_count,
            published_at: parse_timestamp(&snippet.published_at),
        })
    }
}

/// Parse an RFC 3339 timestamp, degrading to the epoch on malformed input
fn parse_timestamp(input: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Parse a decimal-string count, treating absent or malformed values as zero
fn parse_count(input: Option<&str>) -> u64 {
    input.and_then(|s| s.parse().ok()).unwrap_or(0)
}
