//! Page retrieval.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::errors::{Result, ScrapeError};

/// Source of raw page HTML.
///
/// The scraper only needs a single GET per call, so implementations are free
/// to serve canned markup (tests, offline mode) instead of hitting the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// Fetches pages with a single plain HTTP GET. No retries.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Wrap an existing client, e.g. one with custom proxy settings.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Build a fetcher that sends `user_agent` on every request.
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Page fetch failed");
            return Err(ScrapeError::from_status(status));
        }

        let body = resp.text().await?;
        debug!(url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

/// Serves a fixed HTML body regardless of the requested URL.
pub struct StaticFetcher {
    html: String,
}

impl StaticFetcher {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, _url: &str) -> Result<String> {
        Ok(self.html.clone())
    }
}
