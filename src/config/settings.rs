//! Settings structures for ytlens configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching ytlens.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub outgoing: OutgoingSettings,
    pub report: ReportSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (YTLENS_* prefix, plus the
    /// conventional YOUTUBE_API_KEY fallback)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("YTLENS_API_KEY") {
            self.api.key = Some(val);
        } else if let Ok(val) = std::env::var("YOUTUBE_API_KEY") {
            self.api.key = Some(val);
        }
        if let Ok(val) = std::env::var("YTLENS_API_BASE_URL") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("YTLENS_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }
}

/// Data API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// API key for the Data API (required for every run)
    pub key: Option<String>,
    /// Base URL of the Data API
    pub base_url: String,
    /// Relevance language hint for channel search
    pub relevance_language: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            key: None,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            relevance_language: "en".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 10,
            verify_ssl: true,
        }
    }
}

/// Report rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Maximum description length before truncation
    pub description_limit: usize,
    /// Width of section rules in report output
    pub rule_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            description_limit: 200,
            rule_width: 60,
        }
    }
}
