//! Filesystem content source.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{ContentSource, SourceError, SourceResult};
use crate::core::security::{PathSecurityError, validate_site_path};

/// Serves site content from a local directory.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch_text(&self, path: &str) -> SourceResult<String> {
        let file = validate_site_path(&self.root, path).map_err(|e| match e {
            PathSecurityError::PathNotFound { .. } => SourceError::not_found(path),
            other => SourceError::InvalidPath(other.to_string()),
        })?;

        debug!("Reading {}", file.display());

        tokio::fs::read_to_string(&file)
            .await
            .map_err(|e| SourceError::io(path, e))
    }

    fn description(&self) -> String {
        format!("filesystem at {}", self.root.display())
    }
}
