//! Cache-first content source.
//!
//! Successful fetches are remembered and served from memory afterwards;
//! failures are never cached, so a path that failed once is fetched again
//! on the next request.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{ContentSource, SourceResult};

/// Wraps another source with an in-memory response cache.
pub struct CachingSource {
    inner: Arc<dyn ContentSource>,
    name: String,
    cache: RwLock<HashMap<String, String>>,
}

impl CachingSource {
    /// Create a cache named `name` in front of `inner`.
    pub fn new(name: impl Into<String>, inner: Arc<dyn ContentSource>) -> Self {
        Self {
            inner,
            name: name.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch and store every path in `paths`.
    ///
    /// Returns how many were cached; failures are logged and skipped.
    pub async fn precache(&self, paths: &[&str]) -> usize {
        let mut cached = 0;
        for path in paths {
            match self.inner.fetch_text(path).await {
                Ok(text) => {
                    self.cache.write().await.insert(path.to_string(), text);
                    cached += 1;
                }
                Err(e) => warn!("Cache {}: could not precache {}: {}", self.name, path, e),
            }
        }
        cached
    }

    /// Whether `path` is currently cached.
    pub async fn is_cached(&self, path: &str) -> bool {
        self.cache.read().await.contains_key(path)
    }
}

#[async_trait]
impl ContentSource for CachingSource {
    async fn fetch_text(&self, path: &str) -> SourceResult<String> {
        if let Some(hit) = self.cache.read().await.get(path) {
            debug!("Cache {} hit: {}", self.name, path);
            return Ok(hit.clone());
        }

        let text = self.inner.fetch_text(path).await?;
        self.cache
            .write()
            .await
            .insert(path.to_string(), text.clone());
        Ok(text)
    }

    fn description(&self) -> String {
        format!("{} (cache {})", self.inner.description(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::MemorySource;

    #[tokio::test]
    async fn test_serves_cached_copy_after_origin_changes() {
        let origin = MemorySource::new().with("js/tools.json", "[]");
        let cache = CachingSource::new("toolverse-v1", Arc::new(origin.clone()));

        assert_eq!(cache.fetch_text("js/tools.json").await.unwrap(), "[]");
        origin.remove("js/tools.json");

        assert_eq!(cache.fetch_text("js/tools.json").await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let origin = MemorySource::new();
        origin.fail("tools/calculator.html", 503);
        let cache = CachingSource::new("toolverse-v1", Arc::new(origin.clone()));

        assert!(cache.fetch_text("tools/calculator.html").await.is_err());
        assert!(!cache.is_cached("tools/calculator.html").await);

        origin.insert("tools/calculator.html", "<p>ok</p>");
        assert_eq!(
            cache.fetch_text("tools/calculator.html").await.unwrap(),
            "<p>ok</p>"
        );
    }

    #[tokio::test]
    async fn test_precache_skips_missing() {
        let origin = MemorySource::new()
            .with("components/header.html", "<nav/>")
            .with("components/footer.html", "<footer/>");
        let cache = CachingSource::new("toolverse-v1", Arc::new(origin));

        let cached = cache
            .precache(&["components/header.html", "components/footer.html", "missing.css"])
            .await;

        assert_eq!(cached, 2);
        assert!(cache.is_cached("components/header.html").await);
        assert!(!cache.is_cached("missing.css").await);
    }
}
