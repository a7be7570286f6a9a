//! Tool registry domain module.
//!
//! The registry is the list of tool descriptors fetched once at startup. It
//! drives every navigation view and the search index, and it is never
//! mutated after it has been loaded.
//!
//! ## Architecture
//!
//! - `descriptor.rs` - The `ToolDescriptor` record
//! - `registry.rs` - The immutable, session-wide `ToolRegistry`
//! - `loader.rs` - Fetching and validating the registry document
//! - `error.rs` - Registry-specific error types

mod descriptor;
mod error;
mod loader;
mod registry;

pub use descriptor::{ToolDescriptor, UNCATEGORIZED};
pub use error::RegistryError;
pub use loader::RegistryLoader;
pub use registry::ToolRegistry;
