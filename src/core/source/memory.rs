//! In-memory content source.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{ContentSource, SourceError, SourceResult};

#[derive(Debug, Clone)]
enum Entry {
    Text(String),
    Status(u16),
}

/// Serves site content from an in-process map.
///
/// Paths can also be set to answer with an error status, which is how a
/// failing origin is represented.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemorySource::insert`].
    pub fn with(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Serve `content` at `path`.
    pub fn insert(&self, path: impl Into<String>, content: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(path.into(), Entry::Text(content.into()));
        }
    }

    /// Answer requests for `path` with HTTP `status`.
    pub fn fail(&self, path: impl Into<String>, status: u16) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(path.into(), Entry::Status(status));
        }
    }

    /// Stop serving `path`.
    pub fn remove(&self, path: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(path);
        }
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch_text(&self, path: &str) -> SourceResult<String> {
        let entry = self
            .entries
            .read()
            .map_err(|_| SourceError::request(path, "memory source poisoned"))?
            .get(path.trim_start_matches("./"))
            .cloned();

        match entry {
            Some(Entry::Text(text)) => Ok(text),
            Some(Entry::Status(status)) => Err(SourceError::status(path, status)),
            None => Err(SourceError::not_found(path)),
        }
    }

    fn description(&self) -> String {
        "in-memory site".to_string()
    }
}
