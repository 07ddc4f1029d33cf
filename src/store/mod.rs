//! Remote file store boundary for tagpack
//!
//! The export pipeline reads remote files through the narrow
//! [`RemoteFileStore`] trait: one metadata lookup and one whole-object fetch,
//! both keyed by the store path kept in a tag record.
//!
//! The shipped implementation is [`DirStore`], which serves a locally mounted
//! mirror of the remote account. [`LazyStore`] wraps any store with
//! connect-on-first-use semantics so one handle is created once and reused
//! across sequential exports.

pub mod dir;
pub mod error;
pub mod lazy;

pub use dir::DirStore;
pub use error::StoreError;
pub use lazy::LazyStore;

/// Metadata for one remote object
///
/// `size_bytes` is `None` when the store reports no size for the object; the
/// budget check counts such objects as zero bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMetadata {
    pub path: String,
    pub size_bytes: Option<u64>,
}

/// Boundary between the export pipeline and the remote storage service
///
/// Implementations must be reusable across sequential exports; tagpack never
/// tears a store down between calls.
pub trait RemoteFileStore {
    /// Look up the metadata of the object at `path`
    ///
    /// # Errors
    /// Returns `StoreError` if the object does not exist or the lookup fails.
    fn metadata(&self, path: &str) -> Result<RemoteMetadata, StoreError>;

    /// Read the full content of the object at `path` into memory
    ///
    /// # Errors
    /// Returns `StoreError` if the object does not exist or the read fails.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError>;
}
