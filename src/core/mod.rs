//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks of the tool suite:
//! configuration, error handling, the document adapter, content sources,
//! id and path validation, and application startup.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod security;
pub mod shell;
pub mod source;

pub use app::Toolverse;
pub use config::Config;
pub use document::Document;
pub use error::{Error, Result};
pub use security::{IdError, PathSecurityError, validate_site_path, validate_tool_id};
pub use shell::Shell;
pub use source::{ContentSource, SourceConfig, SourceError};
