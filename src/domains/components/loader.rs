//! Component loader.

use std::sync::Arc;

use tracing::{debug, error};

use crate::core::document::{Document, FOOTER_MOUNT, HEADER_MOUNT};
use crate::core::source::ContentSource;

/// Fetches HTML fragments into mount points.
#[derive(Clone)]
pub struct ComponentLoader {
    source: Arc<dyn ContentSource>,
    document: Document,
}

impl ComponentLoader {
    pub fn new(source: Arc<dyn ContentSource>, document: Document) -> Self {
        Self { source, document }
    }

    /// Replace the content of `mount_id` with the fragment at `url`.
    ///
    /// On any failure the mount is cleared and the error is logged. Returns
    /// whether the fragment was injected. Calling it again with the same
    /// arguments yields the same content.
    pub async fn load(&self, mount_id: &str, url: &str) -> bool {
        if !self.document.contains(mount_id).await {
            error!("Mount point #{} does not exist; skipping {}", mount_id, url);
            return false;
        }

        match self.source.fetch_text(url).await {
            Ok(html) => {
                debug!("Loaded component {} into #{}", url, mount_id);
                self.document.set_content(mount_id, html).await
            }
            Err(e) => {
                error!("Failed to load {}: {}", url, e);
                self.document.set_content(mount_id, "").await;
                false
            }
        }
    }

    /// Load the shared header and footer.
    ///
    /// The two loads are independent; one failing does not skip the other.
    pub async fn load_chrome(&self, header_url: &str, footer_url: &str) -> (bool, bool) {
        let header = self.load(HEADER_MOUNT, header_url).await;
        let footer = self.load(FOOTER_MOUNT, footer_url).await;
        (header, footer)
    }
}
