//! Tools domain module.
//!
//! Behavior modules for individual tools. Each tool is an HTML fragment on
//! the site; the ones that need behavior get a [`ToolModule`] here, which
//! the router imports by tool id.
//!
//! ## Architecture
//!
//! - `builtin/` - Individual behavior modules (one file per tool)
//!
//! ## Adding a Behavior Module
//!
//! 1. Create a new file in `builtin/` implementing `ToolModule`
//! 2. Export it in `builtin/mod.rs`
//! 3. Register it by tool id in [`register_builtin_modules`]
//!
//! [`ToolModule`]: crate::domains::router::ToolModule

pub mod builtin;

use crate::domains::router::ModuleRegistry;

pub use builtin::{COUNTDOWN_ID, Countdown, NewYearCountdown};

/// Register every built-in behavior module.
pub fn register_builtin_modules(registry: &mut ModuleRegistry) {
    registry.register(COUNTDOWN_ID, || Box::new(NewYearCountdown::new()));
}

/// A module registry holding the built-in behavior modules.
pub fn builtin_modules() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    register_builtin_modules(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_modules_registered() {
        let registry = builtin_modules();
        assert!(registry.contains(COUNTDOWN_ID));
        assert!(!registry.contains("todo-list"));
    }
}
