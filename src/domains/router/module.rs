//! Tool behavior modules.
//!
//! A tool is an HTML fragment plus, optionally, a behavior module. The
//! router imports the module after the fragment is mounted, calls `init`,
//! and calls `cleanup` before the next navigation touches the page.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::error::{ImportError, ToolError};
use crate::core::document::Document;

/// What a behavior module gets to work with during `init`.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Id of the tool being mounted.
    pub id: String,
    /// The page, with the tool's fragment already mounted.
    pub document: Document,
}

impl ToolContext {
    pub fn new(id: impl Into<String>, document: Document) -> Self {
        Self {
            id: id.into(),
            document,
        }
    }
}

/// Lifecycle of a tool's behavior.
///
/// `init` runs once the fragment is in the page: look up elements, start
/// timers. `cleanup` must release everything `init` started; the fragment
/// is detached right after it returns. A module with nothing to release can
/// keep the default `cleanup`.
#[async_trait]
pub trait ToolModule: Send + Sync {
    async fn init(&mut self, ctx: &ToolContext) -> Result<(), ToolError>;

    async fn cleanup(&mut self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Resolves a tool id to a fresh behavior module.
///
/// `ImportError::NotFound` is the normal answer for markup-only tools.
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    async fn import(&self, id: &str) -> Result<Box<dyn ToolModule>, ImportError>;
}

/// Builds a new instance of a behavior module.
pub type ModuleFactory = Arc<dyn Fn() -> Box<dyn ToolModule> + Send + Sync>;

/// Behavior modules compiled into the binary, keyed by tool id.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    factories: BTreeMap<String, ModuleFactory>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` for `id`, replacing any earlier registration.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn ToolModule> + Send + Sync + 'static,
    {
        let id = id.into();
        debug!("Registering behavior module for {}", id);
        self.factories.insert(id, Arc::new(factory));
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

#[async_trait]
impl ModuleLoader for ModuleRegistry {
    async fn import(&self, id: &str) -> Result<Box<dyn ToolModule>, ImportError> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| ImportError::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    #[async_trait]
    impl ToolModule for Noop {
        async fn init(&mut self, _ctx: &ToolContext) -> Result<(), ToolError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_import_registered_module() {
        let mut registry = ModuleRegistry::new();
        registry.register("snake-game", || Box::new(Noop));

        let mut module = registry.import("snake-game").await.unwrap();
        let ctx = ToolContext::new("snake-game", Document::new());
        assert!(module.init(&ctx).await.is_ok());
        assert!(module.cleanup().await.is_ok());
    }

    #[tokio::test]
    async fn test_import_unknown_is_not_found() {
        let registry = ModuleRegistry::new();

        let result = registry.import("qr-code-generator").await;

        assert!(matches!(result, Err(ImportError::NotFound(id)) if id == "qr-code-generator"));
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut registry = ModuleRegistry::new();
        registry
            .register("todo-list", || Box::new(Noop))
            .register("dice-roller", || Box::new(Noop));

        assert_eq!(registry.ids(), vec!["dice-roller", "todo-list"]);
        assert_eq!(registry.len(), 2);
    }
}
