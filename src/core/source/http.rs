//! HTTP content source.
//!
//! Fetches site content from a remote origin, the way a browser fetches
//! fragments relative to the page URL.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::{ContentSource, SourceError, SourceResult};

/// Fetches site content over HTTP.
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a source for the given origin.
    ///
    /// A missing trailing slash is added so relative paths resolve inside
    /// the base path instead of replacing its last segment.
    pub fn new(base_url: &str) -> SourceResult<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base = Url::parse(&normalized)
            .map_err(|e| SourceError::InvalidPath(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Resolve a site-relative path to a full URL.
    pub fn url_for(&self, path: &str) -> SourceResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| SourceError::InvalidPath(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> SourceResult<String> {
        let url = self.url_for(path)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::request(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::status(path, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::request(path, e.to_string()))
    }

    fn description(&self) -> String {
        format!("HTTP origin {}", self.base)
    }
}
