//! Channel demographics report
//!
//! Fetches one channel and renders its basic statistics. Audience
//! demographics proper require the Analytics API and OAuth access, which is
//! out of scope; the report carries a note instead.

use crate::api::VideoApi;
use crate::config::ReportSettings;
use crate::error::Result;
use crate::records::ChannelRecord;
use crate::report;
use tracing::info;

/// Query for the channel demographics tool
#[derive(Debug, Clone)]
pub struct ChannelDemographics {
    /// The channel id to analyze
    pub channel_id: String,
}

impl ChannelDemographics {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
        }
    }

    /// Fetch the channel and render the demographics report
    pub async fn run(&self, api: &dyn VideoApi, settings: &ReportSettings) -> Result<String> {
        info!("channel demographics for {}", self.channel_id);

        let channel: ChannelRecord = api.get_channel(&self.channel_id).await?.into();
        Ok(render(&channel, settings))
    }
}

fn render(channel: &ChannelRecord, settings: &ReportSettings) -> String {
    let mut out = String::from("Channel Demographics Report\n");
    out += &report::rule('=', settings.rule_width);
    out += "\n\n";

    out += "Basic Statistics:\n";
    out += &report::rule('-', settings.rule_width);
    out += "\n";
    out += &format!("Channel Name: {}\n", channel.title);
    out += &format!(
        "Description: {}\n",
        report::truncate(&channel.description, settings.description_limit)
    );
    out += &format!(
        "Country: {}\n",
        channel.country.as_deref().unwrap_or("Not specified")
    );
    out += &format!(
        "Created Date: {}\n",
        channel.published_at.format("%Y-%m-%d")
    );
    if channel.hidden_subscribers {
        out += "Subscriber Count: Hidden\n";
    } else {
        out += &format!(
            "Subscriber Count: {}\n",
            report::thousands(channel.subscriber_count)
        );
    }
    out += &format!("Total Views: {}\n", report::thousands(channel.view_count));
    out += &format!("Total Videos: {}\n", report::thousands(channel.video_count));
    out += &format!(
        "Custom URL: {}\n",
        channel.custom_url.as_deref().unwrap_or("Not available")
    );

    out += "\nAdvanced Demographics:\n";
    out += &report::rule('-', settings.rule_width);
    out += "\nNote: audience demographics require YouTube Analytics API access\n";

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ApiChannel, ChannelSnippet, ChannelStatistics};
    use crate::error::Error;
    use crate::tools::testing::MockApi;

    fn mock_with_channel(hidden_subscribers: bool) -> MockApi {
        MockApi {
            channels: vec![ApiChannel {
                id: "UC123".to_string(),
                snippet: Some(ChannelSnippet {
                    title: "Tech Channel".to_string(),
                    description: "All about gadgets".to_string(),
                    published_at: "2019-04-01T10:30:00Z".to_string(),
                    country: Some("US".to_string()),
                    custom_url: Some("@techchannel".to_string()),
                }),
                statistics: Some(ChannelStatistics {
                    view_count: Some("1000000".to_string()),
                    subscriber_count: if hidden_subscribers {
                        None
                    } else {
                        Some("50000".to_string())
                    },
                    hidden_subscriber_count: hidden_subscribers,
                    video_count: Some("120".to_string()),
                }),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_report_contents() {
        let api = mock_with_channel(false);
        let output = ChannelDemographics::new("UC123")
            .run(&api, &ReportSettings::default())
            .await
            .unwrap();

        assert!(output.starts_with("Channel Demographics Report"));
        assert!(output.contains("Channel Name: Tech Channel"));
        assert!(output.contains("Country: US"));
        assert!(output.contains("Created Date: 2019-04-01"));
        assert!(output.contains("Subscriber Count: 50,000"));
        assert!(output.contains("Total Views: 1,000,000"));
        assert!(output.contains("Custom URL: @techchannel"));
    }

    #[tokio::test]
    async fn test_hidden_subscriber_count() {
        let api = mock_with_channel(true);
        let output = ChannelDemographics::new("UC123")
            .run(&api, &ReportSettings::default())
            .await
            .unwrap();
        assert!(output.contains("Subscriber Count: Hidden"));
    }

    #[tokio::test]
    async fn test_missing_channel_is_not_found() {
        let api = MockApi::default();
        let err = ChannelDemographics::new("UCnope")
            .run(&api, &ReportSettings::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
