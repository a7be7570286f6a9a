//! Toolverse Library
//!
//! The routing and tool-loading core of a static tool-suite site: a tool
//! registry, hash routing, navigation views, search, and a lifecycle for
//! tool behavior modules that keeps at most one of them active.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Configuration, error handling, content sources, the document
//!   adapter, and application startup
//! - **domains**: Business logic organized by bounded contexts
//!   - **registry**: Tool descriptors and the registry loader
//!   - **components**: Header/footer component loading
//!   - **views**: Pure markup builders for the navigation views
//!   - **search**: Home page live search and the all-tools filter
//!   - **router**: Route resolution and the navigation state machine
//!   - **storage**: Favorites and theme preference
//!   - **tools**: Built-in tool behavior modules
//!
//! # Example
//!
//! ```rust,no_run
//! use toolverse::{Config, Toolverse};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = Toolverse::from_config(Config::from_env()).await?;
//!     app.navigate("#all-tools?q=timer").await;
//!     println!("{}", app.app_content().await);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, Toolverse};
