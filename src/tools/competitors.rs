//! Competitor channel search
//!
//! Searches for channels matching a topic, scores each candidate by keyword
//! overlap between the query and the channel's keywords/description, keeps
//! the ones above a relevance threshold, and ranks them by subscriber count.

use crate::api::VideoApi;
use crate::config::ReportSettings;
use crate::error::Result;
use crate::pipeline::{enrich, keyword_overlap, mean, rank_by, score_and_filter, Direction, Stage};
use crate::records::ChannelRecord;
use crate::report;
use crate::MAX_BATCH_SIZE;
use tracing::{debug, info};

/// Query for the competitor search tool
#[derive(Debug, Clone)]
pub struct CompetitorSearch {
    /// Keywords or topic to search for competing channels
    pub search_query: String,
    /// Maximum number of competitor channels to return (capped at 50)
    pub max_results: u32,
    /// Minimum relevance score (0-1) for inclusion
    pub relevance_threshold: f64,
}

impl CompetitorSearch {
    pub fn new(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            max_results: 10,
            relevance_threshold: 0.5,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    /// Run the search and return the ranked competitor records plus summary
    pub async fn analyze(
        &self,
        api: &dyn VideoApi,
    ) -> Result<(Vec<ChannelRecord>, CompetitorSummary)> {
        let max_results = self.max_results.clamp(1, 50);
        info!(
            "competitor search '{}' (max {}, threshold {})",
            self.search_query, max_results, self.relevance_threshold
        );

        debug!("stage: {}", Stage::Paginating);
        let ids = api.search_channels(&self.search_query, max_results).await?;

        debug!("stage: {}", Stage::Enriching);
        let records: Vec<ChannelRecord> = enrich(&ids, MAX_BATCH_SIZE, |batch| async move {
            let channels = api.get_channels(&batch).await?;
            Ok(channels.into_iter().map(ChannelRecord::from).collect())
        })
        .await?;

        debug!("stage: {}", Stage::Scoring);
        let mut competitors = score_and_filter(records, self.relevance_threshold, |channel| {
            keyword_overlap(
                &self.search_query,
                &[&channel.keywords, &channel.description],
            )
        });

        debug!("stage: {}", Stage::Ranking);
        rank_by(
            &mut competitors,
            |c| c.subscriber_count as f64,
            Direction::Descending,
        );

        debug!("stage: {}", Stage::Summarizing);
        let summary = CompetitorSummary {
            count: competitors.len(),
            average_subscribers: mean(&competitors, |c| c.subscriber_count as f64),
            average_views: mean(&competitors, |c| c.view_count as f64),
        };

        Ok((competitors, summary))
    }

    /// Run the search and render the competitor analysis report
    pub async fn run(&self, api: &dyn VideoApi, report: &ReportSettings) -> Result<String> {
        let (competitors, summary) = self.analyze(api).await?;

        if competitors.is_empty() {
            return Ok("No competing channels found.".to_string());
        }

        Ok(render(&self.search_query, &competitors, &summary, report))
    }
}

/// Aggregate statistics over the final competitor set
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorSummary {
    pub count: usize,
    pub average_subscribers: f64,
    pub average_views: f64,
}

fn render(
    query: &str,
    competitors: &[ChannelRecord],
    summary: &CompetitorSummary,
    settings: &ReportSettings,
) -> String {
    let mut out = format!("Competitor Analysis Report for '{}'\n", query);
    out += &report::rule('=', settings.rule_width);
    out += "\n\n";

    for (idx, competitor) in competitors.iter().enumerate() {
        out += &format!("{}. {}\n", idx + 1, competitor.title);
        out += &format!(
            "   Relevance Score: {:.2}\n",
            competitor.score.unwrap_or(0.0)
        );
        out += &format!(
            "   Subscribers: {}\n",
            report::thousands(competitor.subscriber_count)
        );
        out += &format!(
            "   Total Views: {}\n",
            report::thousands(competitor.view_count)
        );
        out += &format!("   Videos: {}\n", competitor.video_count);
        out += &format!(
            "   Country: {}\n",
            competitor.country.as_deref().unwrap_or("Not specified")
        );
        out += &format!(
            "   Description: {}\n",
            report::truncate(&competitor.description, settings.description_limit)
        );
        let topics = competitor.topic_names();
        if !topics.is_empty() {
            let shown: Vec<&str> = topics.iter().take(3).map(|s| s.as_str()).collect();
            out += &format!("   Topics: {}\n", shown.join(", "));
        }
        out += &format!("   URL: {}\n", competitor.url);
        out += &report::rule('-', settings.rule_width);
        out += "\n";
    }

    out += "\nSummary Statistics:\n";
    out += &format!(
        "Average Subscribers: {}\n",
        report::thousands_rounded(summary.average_subscribers)
    );
    out += &format!(
        "Average Total Views: {}\n",
        report::thousands_rounded(summary.average_views)
    );
    out += &format!("Total Competitors Found: {}\n", summary.count);

    out
}
