//! Router domain module.
//!
//! Owns navigation: resolving the URL hash to a route, mounting the
//! matching content, and the lifecycle of the one active tool module.
//!
//! ## Architecture
//!
//! - `route.rs` - Hash fragment to `Route` resolution
//! - `module.rs` - The `ToolModule` lifecycle contract and the module
//!   registry that stands in for dynamic script import
//! - `router.rs` - The navigation state machine
//! - `error.rs` - Tool module and import error types
//!
//! ## Navigation
//!
//! Each navigation tears down the active module, fetches the new content,
//! mounts it, then imports and initializes the tool's module if it has one.
//! A navigation that is overtaken by a newer one is dropped before it
//! touches the page.

mod error;
mod module;
mod route;
mod router;

pub use error::{ImportError, ToolError};
pub use module::{ModuleFactory, ModuleLoader, ModuleRegistry, ToolContext, ToolModule};
pub use route::{ALL_TOOLS_ROUTE, Route, all_tools_hash};
pub use router::{NavigationOutcome, Phase, Router};
