//! Content sources for the tool suite.
//!
//! Every piece of site content (page components, the tool registry, tool
//! fragments) is fetched through a [`ContentSource`]:
//! - **Filesystem**: a local site directory - feature: `fs`
//! - **HTTP**: a remote origin via reqwest - feature: `http`
//! - **Memory**: an in-process map, always available
//!
//! [`CachingSource`] wraps any of them with cache-first lookups.

mod cache;
mod config;
mod error;
mod memory;
mod service;

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;

pub use cache::CachingSource;
pub use config::SourceConfig;
pub use error::{SourceError, SourceResult};
pub use memory::MemorySource;
pub use service::build_source;

#[cfg(feature = "fs")]
pub use config::FsConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;

/// A place site content can be fetched from.
///
/// Paths are site-relative (`tools/calculator.html`). A single call is a
/// single attempt; implementations do not retry.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the text content at `path`.
    async fn fetch_text(&self, path: &str) -> SourceResult<String>;

    /// A short description of the source for logging.
    fn description(&self) -> String;
}
