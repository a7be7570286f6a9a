//! Content source error types.

use thiserror::Error;

/// Result type for content source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while fetching site content.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists at the requested path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The origin answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The path was rejected before any fetch was attempted.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// IO error while reading a local file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The request itself failed (connection, body decoding).
    #[error("Request failed for {path}: {message}")]
    Request { path: String, message: String },
}

impl SourceError {
    /// Create a "not found" error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a status error.
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    /// Create an IO error.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a request error.
    pub fn request(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error means the resource is absent rather than unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Status { status: 404, .. })
    }
}
