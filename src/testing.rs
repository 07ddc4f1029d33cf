//! Testing utilities for tagpack
//!
//! This module provides helper types for writing tests: a `TestIndex`
//! wrapper for temporary sled indexes, an in-memory `TagIndex` with preset
//! entries, and an in-memory `RemoteFileStore` double that counts boundary
//! calls and fails on demand.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use tempfile::TempDir;

use crate::TaggedEntry;
use crate::index::{IndexError, SledIndex, TagIndex, TagQuery};
use crate::store::{RemoteFileStore, RemoteMetadata, StoreError};

/// Wrapper for a temporary sled index that cleans up on drop
///
/// The index lives in a fresh temporary directory, so tests never share
/// state or leave artifacts behind.
///
/// # Examples
/// ```ignore
/// let test = TestIndex::new();
/// let entry = test.index().add("a.txt", "/a.txt", "docs").unwrap();
/// ```
pub struct TestIndex {
    _dir: TempDir,
    index: SledIndex,
}

impl TestIndex {
    /// Create a fresh index in a temporary directory
    ///
    /// # Panics
    /// Panics if the directory or the index cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let index = SledIndex::open(dir.path().join("index"), "test")
            .expect("Failed to open test index");
        Self { _dir: dir, index }
    }

    /// Get a reference to the underlying index
    #[must_use]
    pub const fn index(&self) -> &SledIndex {
        &self.index
    }
}

impl Default for TestIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory tag index with a preset entry list
///
/// Answers queries by filtering and paginating the preset entries, which is
/// all the export orchestrator ever asks of its index boundary.
pub struct MemoryIndex {
    entries: Vec<TaggedEntry>,
}

impl MemoryIndex {
    #[must_use]
    pub const fn new(entries: Vec<TaggedEntry>) -> Self {
        Self { entries }
    }
}

impl TagIndex for MemoryIndex {
    fn find_by_tags(&self, query: &TagQuery) -> Result<Vec<TaggedEntry>, IndexError> {
        let matches: Vec<TaggedEntry> = self
            .entries
            .iter()
            .filter(|e| query.matches(e))
            .cloned()
            .collect();
        Ok(query.paginate(matches))
    }
}

/// In-memory remote file store double
///
/// Tracks how often each boundary method was called and can be told to fail
/// metadata lookups or fetches for specific paths. Objects inserted with
/// [`MemoryStore::insert_unsized`] report no size in their metadata.
pub struct MemoryStore {
    objects: RefCell<HashMap<String, Vec<u8>>>,
    unsized_paths: RefCell<HashSet<String>>,
    failing_metadata: RefCell<HashSet<String>>,
    failing_fetch: RefCell<HashSet<String>>,
    metadata_calls: Cell<usize>,
    fetch_calls: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: RefCell::new(HashMap::new()),
            unsized_paths: RefCell::new(HashSet::new()),
            failing_metadata: RefCell::new(HashSet::new()),
            failing_fetch: RefCell::new(HashSet::new()),
            metadata_calls: Cell::new(0),
            fetch_calls: Cell::new(0),
        }
    }

    /// Store an object under a path
    pub fn insert(&self, path: &str, content: Vec<u8>) {
        self.objects.borrow_mut().insert(path.to_string(), content);
    }

    /// Store an object whose metadata reports no size
    pub fn insert_unsized(&self, path: &str, content: Vec<u8>) {
        self.insert(path, content);
        self.unsized_paths.borrow_mut().insert(path.to_string());
    }

    /// Make metadata lookups for a path fail
    pub fn fail_metadata(&self, path: &str) {
        self.failing_metadata.borrow_mut().insert(path.to_string());
    }

    /// Make fetches for a path fail
    pub fn fail_fetch(&self, path: &str) {
        self.failing_fetch.borrow_mut().insert(path.to_string());
    }

    /// Number of metadata lookups issued so far
    #[must_use]
    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.get()
    }

    /// Number of fetches issued so far
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteFileStore for MemoryStore {
    fn metadata(&self, path: &str) -> Result<RemoteMetadata, StoreError> {
        self.metadata_calls.set(self.metadata_calls.get() + 1);

        if self.failing_metadata.borrow().contains(path) {
            return Err(StoreError::ConnectionError(format!(
                "metadata lookup failed for {path}"
            )));
        }

        let objects = self.objects.borrow();
        let content = objects
            .get(path)
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;

        let size_bytes = if self.unsized_paths.borrow().contains(path) {
            None
        } else {
            Some(content.len() as u64)
        };

        Ok(RemoteMetadata {
            path: path.to_string(),
            size_bytes,
        })
    }

    fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        if self.failing_fetch.borrow().contains(path) {
            return Err(StoreError::ConnectionError(format!(
                "fetch failed for {path}"
            )));
        }

        self.objects
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }
}
