//! Tag-index-specific error types
//!
//! This module defines all error types that can occur against the tag index.
//! The lookup kinds (`NotFound`, `MultipleIds`) are part of the index
//! boundary contract and propagate to the caller unchanged; the storage kinds
//! wrap the embedded database and its codec.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`**: Failures when deserializing data from the index
//! - **`EncodeError`**: Failures when serializing data to the index
//! - **`NotFound`**: No record exists for the requested id
//! - **`MultipleIds`**: The index resolved one id to more than one record
//! - **`Incomplete`**: A merged record is missing its name or path
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Tag-index-specific errors
#[derive(Debug, Error)]
pub enum IndexError {
    /// Represents a sled database error
    #[error("Index database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding index data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding index data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// No record exists for the requested id
    #[error("No tag entry with id [{0}] found in the index")]
    NotFound(String),

    /// The index resolved one id to more than one record
    #[error("Multiple tag entries found for id [{0}]")]
    MultipleIds(String),

    /// A record is missing its name or path after a merge
    #[error("Entry with id [{id}] is missing either name [{name}] or path [{path}]")]
    Incomplete {
        id: String,
        name: String,
        path: String,
    },

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
