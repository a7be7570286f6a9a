//! Search index.

use std::sync::Arc;

use crate::domains::registry::{ToolDescriptor, ToolRegistry};

/// Trim and lowercase a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `tool` matches an already-normalized query.
///
/// A tool matches when its name, its description, or its tags joined with
/// spaces contain the query. Missing descriptions and tags never match.
pub fn matches_query(tool: &ToolDescriptor, normalized: &str) -> bool {
    tool.name.to_lowercase().contains(normalized)
        || tool
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(normalized))
        || (!tool.tags.is_empty() && tool.tags.join(" ").to_lowercase().contains(normalized))
}

/// Filters the registry by query.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    registry: Arc<ToolRegistry>,
}

impl SearchIndex {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Tools matching `query`, in registry order. An empty query matches
    /// everything.
    pub fn filter(&self, query: &str) -> Vec<&ToolDescriptor> {
        let normalized = normalize_query(query);
        self.registry
            .tools()
            .iter()
            .filter(|tool| matches_query(tool, &normalized))
            .collect()
    }
}
