//! Tool registry loader.
//!
//! Fetches the registry document, drops entries whose ids cannot be routed,
//! and falls back to an empty registry on any failure so that dependent
//! views render their empty state instead of failing.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::descriptor::ToolDescriptor;
use super::error::RegistryError;
use super::registry::ToolRegistry;
use crate::core::security::validate_tool_id;
use crate::core::source::ContentSource;

/// Loads the tool registry from a content source.
pub struct RegistryLoader {
    source: Arc<dyn ContentSource>,
    path: String,
}

impl RegistryLoader {
    /// Create a loader for the registry document at `path`.
    pub fn new(source: Arc<dyn ContentSource>, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }

    /// Load the registry, or an empty one if it cannot be fetched or parsed.
    pub async fn load(&self) -> ToolRegistry {
        match self.try_load().await {
            Ok(registry) => {
                info!("Loaded {} tools from {}", registry.len(), self.path);
                registry
            }
            Err(e) => {
                error!("Could not load tools list: {}", e);
                ToolRegistry::empty()
            }
        }
    }

    /// Load the registry, reporting why it failed.
    pub async fn try_load(&self) -> Result<ToolRegistry, RegistryError> {
        let body = self.source.fetch_text(&self.path).await?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        Ok(ToolRegistry::new(sanitize(decode(entries))))
    }
}

/// Decode each entry on its own, dropping the malformed ones.
fn decode(entries: Vec<serde_json::Value>) -> Vec<ToolDescriptor> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match serde_json::from_value(entry) {
            Ok(tool) => Some(tool),
            Err(e) => {
                warn!("Skipping malformed tool entry #{}: {}", position, e);
                None
            }
        })
        .collect()
}

/// Keep the first entry for each routable id.
fn sanitize(entries: Vec<ToolDescriptor>) -> Vec<ToolDescriptor> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|tool| match validate_tool_id(&tool.id) {
            Ok(_) if seen.insert(tool.id.clone()) => true,
            Ok(_) => {
                warn!("Skipping duplicate tool id {:?}", tool.id);
                false
            }
            Err(e) => {
                warn!("Skipping tool {:?}: {}", tool.name, e);
                false
            }
        })
        .collect()
}
