//! Registry-specific error types.

use thiserror::Error;

use crate::core::source::SourceError;

/// Errors that can occur while loading the tool registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry document could not be fetched.
    #[error("Failed to fetch registry: {0}")]
    Fetch(#[from] SourceError),

    /// The registry document is not a JSON array of tool descriptors.
    #[error("Failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),
}
