//! Connect-on-first-use store wrapper
//!
//! Wraps a store factory in a one-shot lazy cell: the first call through the
//! boundary runs the factory, every later call reuses the same handle. This
//! replaces ad-hoc lazily initialized shared clients with a single
//! initialization primitive.

use once_cell::sync::OnceCell;

use super::{RemoteFileStore, RemoteMetadata, StoreError};

/// A remote file store that is connected on first use and reused afterwards
pub struct LazyStore<S, F>
where
    F: Fn() -> Result<S, StoreError>,
{
    connect: F,
    cell: OnceCell<S>,
}

impl<S, F> LazyStore<S, F>
where
    F: Fn() -> Result<S, StoreError>,
{
    /// Create a wrapper around a connect factory; nothing runs until the
    /// first boundary call
    pub const fn new(connect: F) -> Self {
        Self {
            connect,
            cell: OnceCell::new(),
        }
    }

    /// The connected store, connecting it if this is the first use
    ///
    /// # Errors
    /// Returns the factory's `StoreError` if connecting fails. A failed
    /// connect is retried on the next call.
    pub fn get(&self) -> Result<&S, StoreError> {
        self.cell.get_or_try_init(|| (self.connect)())
    }

    /// True if the factory has already run successfully
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<S, F> RemoteFileStore for LazyStore<S, F>
where
    S: RemoteFileStore,
    F: Fn() -> Result<S, StoreError>,
{
    fn metadata(&self, path: &str) -> Result<RemoteMetadata, StoreError> {
        self.get()?.metadata(path)
    }

    fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        self.get()?.fetch(path)
    }
}
