use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::{ExtractError, Result};

// Non-greedy: the capture ends at the first `};` after the marker, so a blob
// that contains `};` inside a string value comes back truncated and fails to parse.
static PLAYER_RESPONSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ytInitialPlayerResponse\s*=\s*(\{.+?\});").expect("Failed to compile player response regex")
});

/// Outcome of a single extraction, serialized as either `{url, views}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    Success { url: String, views: u64 },
    Failure { error: String },
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }
}

#[derive(Clone)]
pub struct ViewCountExtractor {
    client: Client,
}

impl ViewCountExtractor {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(5)))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(ViewCountExtractor { client })
    }

    /// Fetches `url` and reads `videoDetails.viewCount` out of its embedded player response.
    ///
    /// Never fails: every error is folded into [`ExtractionResult::Failure`] with the
    /// error's display text as the message.
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        match self.try_extract(url).await {
            Ok(views) => {
                tracing::debug!(url, views, "extracted view count");
                ExtractionResult::Success {
                    url: url.to_string(),
                    views,
                }
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "view count extraction failed");
                ExtractionResult::Failure {
                    error: err.to_string(),
                }
            }
        }
    }

    async fn try_extract(&self, url: &str) -> std::result::Result<u64, ExtractError> {
        let html = self.fetch_page(url).await?;
        let blob = locate_embedded_json(&html).ok_or(ExtractError::DataNotFound)?;
        view_count_from_blob(blob)
    }

    pub async fn fetch_page(&self, url: &str) -> std::result::Result<String, ExtractError> {
        let start_time = std::time::Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ExtractError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        tracing::debug!(url, bytes = html.len(), elapsed = ?start_time.elapsed(), "fetched page");
        Ok(html)
    }
}

/// Returns the JSON object assigned to `ytInitialPlayerResponse` in `html`, if any.
pub fn locate_embedded_json(html: &str) -> Option<&str> {
    PLAYER_RESPONSE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn view_count_from_blob(blob: &str) -> std::result::Result<u64, ExtractError> {
    let data: Value = serde_json::from_str(blob)?;

    match &data["videoDetails"]["viewCount"] {
        Value::String(count) => count
            .trim()
            .parse::<u64>()
            .map_err(|_| ExtractError::InvalidViewCount(count.clone())),
        Value::Number(count) => count
            .as_u64()
            .ok_or_else(|| ExtractError::InvalidViewCount(count.to_string())),
        Value::Null => Err(ExtractError::MissingField("videoDetails.viewCount")),
        other => Err(ExtractError::InvalidViewCount(other.to_string())),
    }
}
