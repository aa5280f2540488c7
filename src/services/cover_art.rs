//! Downloading cover art payloads from their external URLs.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::CoverArtConfig;

#[derive(Debug, Error)]
pub enum CoverArtError {
    #[error("Invalid cover URL '{0}'")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Server returned an empty body")]
    EmptyBody,
}

impl From<reqwest::Error> for CoverArtError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Request(err.to_string()),
        }
    }
}

/// Source of cover image bytes.
#[async_trait::async_trait]
pub trait CoverArtFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoverArtError>;
}

pub struct HttpCoverArtFetcher {
    client: reqwest::Client,
}

impl HttpCoverArtFetcher {
    pub fn new(config: &CoverArtConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build cover art HTTP client: {e}"))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl CoverArtFetcher for HttpCoverArtFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoverArtError> {
        let parsed = parse_cover_url(url)?;

        debug!(url = %parsed, "Downloading cover art");

        let response = self.client.get(parsed).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        if bytes.is_empty() {
            return Err(CoverArtError::EmptyBody);
        }

        Ok(bytes.to_vec())
    }
}

/// Only absolute http(s) URLs are fetched.
pub fn parse_cover_url(url: &str) -> Result<Url, CoverArtError> {
    let parsed = Url::parse(url.trim()).map_err(|_| CoverArtError::InvalidUrl(url.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(CoverArtError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cover_url() {
        assert!(parse_cover_url("https://example.com/covers/1.jpg").is_ok());
        assert!(parse_cover_url(" http://example.com/a.png ").is_ok());
        assert!(matches!(
            parse_cover_url("ftp://example.com/a.png"),
            Err(CoverArtError::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_cover_url("not a url"),
            Err(CoverArtError::InvalidUrl(_))
        ));
    }
}
