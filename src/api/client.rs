//! YouTube Data API v3 client
//!
//! Owns auth (key injection), endpoint construction, and response decoding.
//! Errors map to the crate taxonomy: missing resources become `NotFound`,
//! everything transport- or API-level becomes `Upstream`.

use super::types::*;
use super::{VideoApi, VideoPage};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::network::HttpClient;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Client for the YouTube Data API v3
pub struct YouTubeApi {
    http: HttpClient,
    base_url: String,
    key: String,
    relevance_language: String,
}

impl YouTubeApi {
    /// Build a client from settings
    ///
    /// Fails with `MissingApiKey` when no key is configured; this is the
    /// fatal precondition for every run.
    pub fn new(settings: &Settings) -> Result<Self> {
        let key = match settings.api.key.as_deref() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(Error::MissingApiKey),
        };

        let base_url = settings.api.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| Error::Upstream(format!("invalid API base URL: {}", e)))?;

        let http = HttpClient::with_settings(&settings.outgoing).map_err(Error::upstream)?;

        Ok(Self {
            http,
            base_url,
            key,
            relevance_language: settings.api.relevance_language.clone(),
        })
    }

    /// Issue one API call and decode the JSON payload
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        mut params: HashMap<String, String>,
    ) -> Result<T> {
        params.insert("key".to_string(), self.key.clone());
        let url = format!("{}/{}", self.base_url, endpoint);

        debug!("GET {} ({} params)", endpoint, params.len());

        let response = self
            .http
            .get_with_params(&url, &params)
            .await
            .map_err(Error::upstream)?;

        if !response.is_success() {
            // The API wraps failures in an error envelope with a message
            if let Ok(envelope) = response.json::<ApiErrorEnvelope>() {
                return Err(Error::Upstream(format!(
                    "HTTP {}: {}",
                    response.status, envelope.error.message
                )));
            }
            return Err(Error::Upstream(format!("HTTP {}", response.status)));
        }

        response.json().map_err(Error::upstream)
    }
}

#[async_trait]
impl VideoApi for YouTubeApi {
    async fn search_channels(&self, query: &str, max_results: u32) -> Result<Vec<String>> {
        let params = HashMap::from([
            ("part".to_string(), "snippet".to_string()),
            ("q".to_string(), query.to_string()),
            ("type".to_string(), "channel".to_string()),
            ("maxResults".to_string(), max_results.to_string()),
            (
                "relevanceLanguage".to_string(),
                self.relevance_language.clone(),
            ),
        ]);

        let response: SearchListResponse = self.get_json("search", params).await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.snippet.and_then(|s| s.channel_id))
            .collect())
    }

    async fn get_channels(&self, ids: &[String]) -> Result<Vec<ApiChannel>> {
        let params = HashMap::from([
            (
                "part".to_string(),
                "snippet,statistics,brandingSettings,topicDetails".to_string(),
            ),
            ("id".to_string(), ids.join(",")),
            ("maxResults".to_string(), ids.len().to_string()),
        ]);

        let response: ChannelListResponse = self.get_json("channels", params).await?;
        Ok(response.items)
    }

    async fn get_channel(&self, id: &str) -> Result<ApiChannel> {
        let channels = self.get_channels(&[id.to_string()]).await?;
        channels
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("channel {}", id)))
    }

    async fn uploads_playlist(&self, channel_id: &str) -> Result<String> {
        let params = HashMap::from([
            ("part".to_string(), "contentDetails".to_string()),
            ("id".to_string(), channel_id.to_string()),
        ]);

        let response: ChannelListResponse = self.get_json("channels", params).await?;

        if response.page_info.total_results == 0 || response.items.is_empty() {
            return Err(Error::NotFound(format!("channel {}", channel_id)));
        }

        response
            .items
            .into_iter()
            .next()
            .and_then(|c| c.content_details)
            .and_then(|c| c.related_playlists.uploads)
            .ok_or_else(|| {
                Error::Upstream(format!("channel {} has no uploads playlist", channel_id))
            })
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        token: Option<&str>,
        page_size: u32,
    ) -> Result<VideoPage> {
        let mut params = HashMap::from([
            ("part".to_string(), "snippet".to_string()),
            ("playlistId".to_string(), playlist_id.to_string()),
            ("maxResults".to_string(), page_size.to_string()),
        ]);
        if let Some(token) = token {
            params.insert("pageToken".to_string(), token.to_string());
        }

        let response: PlaylistItemListResponse = self.get_json("playlistItems", params).await?;

        let ids = response
            .items
            .into_iter()
            .filter_map(|item| item.snippet.and_then(|s| s.resource_id.video_id))
            .collect();

        Ok(VideoPage {
            ids,
            next_token: response.next_page_token,
        })
    }

    async fn get_videos(&self, ids: &[String]) -> Result<Vec<ApiVideo>> {
        let params = HashMap::from([
            (
                "part".to_string(),
                "snippet,statistics,contentDetails".to_string(),
            ),
            ("id".to_string(), ids.join(",")),
        ]);

        let response: VideoListResponse = self.get_json("videos", params).await?;
        Ok(response.items)
    }

    async fn get_video(&self, id: &str) -> Result<ApiVideo> {
        let videos = self.get_videos(&[id.to_string()]).await?;
        videos
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("video {}", id)))
    }

    async fn comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<CommentThread>> {
        let params = HashMap::from([
            ("part".to_string(), "snippet".to_string()),
            ("videoId".to_string(), video_id.to_string()),
            ("order".to_string(), "relevance".to_string()),
            ("maxResults".to_string(), max_results.min(100).to_string()),
        ]);

        let response: CommentThreadListResponse = self.get_json("commentThreads", params).await?;
        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_settings(base_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.api.key = Some("test-key".to_string());
        settings.api.base_url = base_url.to_string();
        settings
    }

    #[test]
    fn test_missing_api_key() {
        let settings = Settings::default();
        let err = YouTubeApi::new(&settings).err().unwrap();
        assert!(matches!(err, Error::MissingApiKey));
        assert_eq!(err.to_string(), "API key is not set");
    }

    #[tokio::test]
    async fn test_key_injected_and_channel_decoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pageInfo": {"totalResults": 1, "resultsPerPage": 1},
                "items": [{
                    "id": "UC123",
                    "snippet": {
                        "title": "Tech Channel",
                        "description": "reviews",
                        "publishedAt": "2020-01-01T00:00:00Z"
                    },
                    "statistics": {"subscriberCount": "42"}
                }]
            })))
            .mount(&server)
            .await;

        let api = YouTubeApi::new(&test_settings(&server.uri())).unwrap();
        let channel = api.get_channel("UC123").await.unwrap();
        assert_eq!(channel.id, "UC123");
        assert_eq!(channel.snippet.unwrap().title, "Tech Channel");
    }

    #[tokio::test]
    async fn test_missing_channel_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pageInfo": {"totalResults": 0, "resultsPerPage": 0},
                "items": []
            })))
            .mount(&server)
            .await;

        let api = YouTubeApi::new(&test_settings(&server.uri())).unwrap();

        let err = api.get_channel("UCnope").await.err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));

        let err = api.uploads_playlist("UCnope").await.err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_api_error_is_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": 403, "message": "quotaExceeded"}
            })))
            .mount(&server)
            .await;

        let api = YouTubeApi::new(&test_settings(&server.uri())).unwrap();
        let err = api.get_video("abc").await.err().unwrap();
        match err {
            Error::Upstream(msg) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("quotaExceeded"));
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_playlist_page_carries_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("pageToken", "CAUQAA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"snippet": {"resourceId": {"videoId": "vid3"}}}]
            })))
            .mount(&server)
            .await;

        let api = YouTubeApi::new(&test_settings(&server.uri())).unwrap();
        let page = api.playlist_page("UU1", Some("CAUQAA"), 50).await.unwrap();
        assert_eq!(page.ids, vec!["vid3"]);
        assert!(page.next_token.is_none());
    }
}
