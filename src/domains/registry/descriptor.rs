//! Tool descriptor - one entry of the registry document.

use serde::{Deserialize, Serialize};

/// Category used for tools that do not declare one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Describes one loadable tool.
///
/// `id` is both the URL fragment (`#<id>`) and the file stem of the tool's
/// HTML fragment and behavior script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ToolDescriptor {
    /// Create a descriptor with a name and category and nothing else.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category: Some(category.into()),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The category, or [`UNCATEGORIZED`] when absent or blank.
    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => UNCATEGORIZED,
        }
    }

    /// The description, or an empty string when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// The URL fragment that routes to this tool.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}
