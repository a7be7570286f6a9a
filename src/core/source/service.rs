//! Source construction from configuration.

use std::sync::Arc;

use tracing::info;

use super::{ContentSource, SourceConfig, SourceResult};

#[cfg(feature = "fs")]
use super::fs::FsSource;

#[cfg(feature = "http")]
use super::http::HttpSource;

/// Build the content source described by `config`.
pub fn build_source(config: &SourceConfig) -> SourceResult<Arc<dyn ContentSource>> {
    info!("Using content source: {}", config.description());

    let source: Arc<dyn ContentSource> = match config {
        #[cfg(feature = "fs")]
        SourceConfig::Fs(cfg) => Arc::new(FsSource::new(cfg.root.clone())),
        #[cfg(feature = "http")]
        SourceConfig::Http(cfg) => Arc::new(HttpSource::new(&cfg.base_url)?),
    };

    Ok(source)
}
