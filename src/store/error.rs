//! Remote-store-specific error types
//!
//! Failures crossing the [`RemoteFileStore`](super::RemoteFileStore) boundary.
//! The export pipeline wraps these with the path that was being worked on;
//! they are never surfaced verbatim to a caller.

use thiserror::Error;

/// Remote-store-specific errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No object exists at the requested path
    #[error("No object found at path [{0}]")]
    NotFound(String),

    /// The requested path escapes the store root
    #[error("Path [{0}] is outside the store root")]
    OutsideRoot(String),

    /// Represents an I/O error while talking to the store
    #[error("Store I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The store could not be connected
    #[error("Store connection error: {0}")]
    ConnectionError(String),
}
