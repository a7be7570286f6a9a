//! Tool module error types.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by a tool module's lifecycle hooks.
#[derive(Debug, Error)]
pub enum ToolError {
    /// An element the tool expects in its fragment is missing.
    #[error("Missing element #{0}")]
    MissingElement(String),

    /// The hook failed.
    #[error("Hook failed: {0}")]
    HookFailed(String),

    /// The hook did not finish in time.
    #[error("Hook timed out after {0:?}")]
    Timeout(Duration),
}

impl ToolError {
    /// Create a "missing element" error.
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }

    /// Create a "hook failed" error.
    pub fn hook_failed(msg: impl Into<String>) -> Self {
        Self::HookFailed(msg.into())
    }
}

/// Errors from importing a tool's behavior module.
///
/// Many tools are markup only, so `NotFound` is the ordinary case.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The tool has no behavior module.
    #[error("No module for tool {0}")]
    NotFound(String),
}

impl ImportError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}
