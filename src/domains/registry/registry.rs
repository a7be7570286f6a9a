//! Tool Registry - the session-wide list of tools.
//!
//! Built once by the loader and shared behind an `Arc`; there is no way to
//! mutate it after construction.

use super::descriptor::ToolDescriptor;

/// The immutable list of known tools, in registry (append) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// A registry with no tools; what every failed load falls back to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(tools: Vec<ToolDescriptor>) -> Self {
        Self { tools }
    }

    /// All tools in registry order.
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Tool ids in registry order.
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.id.as_str()).collect()
    }
}

impl From<Vec<ToolDescriptor>> for ToolRegistry {
    fn from(tools: Vec<ToolDescriptor>) -> Self {
        Self::new(tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let registry = ToolRegistry::new(vec![
            ToolDescriptor::new("calculator", "Calculator", "Calculators"),
            ToolDescriptor::new("snake-game", "Snake", "Games"),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("snake-game").map(|t| t.name.as_str()), Some("Snake"));
        assert!(!registry.contains("tetris"));
        assert_eq!(registry.ids(), vec!["calculator", "snake-game"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }
}
