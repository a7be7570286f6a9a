//! Error types and handling for the tool suite.
//!
//! This module defines the error type surfaced by application startup and
//! the shell, wrapping the domain errors that can reach a caller.

use thiserror::Error;

/// A specialized Result type for tool suite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the tool suite.
///
/// Most failures never reach this type: fetch and import failures are
/// caught where they are issued and turned into rendered fallbacks. What
/// remains are source configuration problems, storage failures the caller
/// asked to see, and shell I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Error while setting up or reading the content source.
    #[error("Source error: {0}")]
    Source(#[from] super::source::SourceError),

    /// Error from persisted local storage.
    #[error("Storage error: {0}")]
    Storage(#[from] crate::domains::storage::StorageError),

    /// I/O errors from the shell streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
