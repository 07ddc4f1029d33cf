//! Export pipeline for tagpack
//!
//! Turns a tag expression into one zip archive containing every matching
//! file. The pipeline runs strictly in sequence for each export call:
//!
//! 1. ask the tag index for the matching entries
//! 2. resolve every entry to remote metadata ([`resolve`])
//! 3. check the aggregate size against the budget ([`budget`]) - nothing is
//!    transferred before this passes
//! 4. fetch each entry in input order ([`fetch`]) and append it to the
//!    archive ([`archive`])
//! 5. finalize and hand the bytes back
//!
//! Failure anywhere abandons the whole export: entries fetched before a
//! failure are discarded and no partial archive is ever returned.

use tracing::debug;

use crate::TaggedEntry;
use crate::index::{TagIndex, TagQuery};
use crate::store::RemoteFileStore;

pub mod archive;
pub mod budget;
pub mod error;
pub mod fetch;
pub mod resolve;

pub use archive::ArchiveBuilder;
pub use budget::{aggregate_size, enforce_budget};
pub use error::ExportError;
pub use fetch::fetch_entry;
pub use resolve::resolve_metadata;

/// One named file on its way into the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub content: Vec<u8>,
}

/// The caller-visible result of one export call
///
/// `Empty` means the tag expression matched nothing; it is distinct from
/// both success-with-bytes and failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The finalized archive
    Archive(Vec<u8>),
    /// The tag index returned zero matches; no archive was produced
    Empty,
}

impl ExportOutcome {
    /// The archive bytes, if an archive was produced
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Archive(bytes) => Some(bytes),
            Self::Empty => None,
        }
    }
}

/// Drives one export from tag expression to finished archive
///
/// Holds borrowed boundaries so one index and one store handle serve any
/// number of sequential exports.
pub struct Exporter<'a> {
    index: &'a dyn TagIndex,
    store: &'a dyn RemoteFileStore,
    max_size: u64,
}

impl<'a> Exporter<'a> {
    /// Create an exporter over the given boundaries
    ///
    /// `max_size` is the largest aggregate byte count one export may
    /// transfer.
    #[must_use]
    pub const fn new(
        index: &'a dyn TagIndex,
        store: &'a dyn RemoteFileStore,
        max_size: u64,
    ) -> Self {
        Self {
            index,
            store,
            max_size,
        }
    }

    /// Run one export for the query's tag expression
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered, in pipeline order: an index
    /// error from the lookup, `MetadataUnavailable` from resolution,
    /// `BudgetExceeded` from the size check, or `DownloadFailed` from the
    /// transfer. All failures are terminal for this call.
    pub fn export(&self, query: &TagQuery) -> Result<ExportOutcome, ExportError> {
        debug!(tags = %query.tags, offset = query.offset, limit = ?query.limit, "starting export");

        let entries = self.index.find_by_tags(query)?;
        if entries.is_empty() {
            debug!(tags = %query.tags, "no entries matched, nothing to export");
            return Ok(ExportOutcome::Empty);
        }

        let bytes = self.build_archive(&entries)?;
        Ok(ExportOutcome::Archive(bytes))
    }

    /// Resolve, budget-check, fetch and assemble the given entries
    fn build_archive(&self, entries: &[TaggedEntry]) -> Result<Vec<u8>, ExportError> {
        let metadata = resolve_metadata(self.store, entries)?;
        let total = enforce_budget(&metadata, self.max_size)?;
        debug!(total, limit = self.max_size, entries = entries.len(), "budget admitted export");

        let mut builder = ArchiveBuilder::new();
        for entry in entries {
            let fetched = fetch_entry(self.store, entry)?;
            builder.append(&fetched)?;
        }

        let bytes = builder.finish()?;
        debug!(size = bytes.len(), "archive finalized");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryIndex, MemoryStore};
    use std::io::Cursor;
    use zip::ZipArchive;

    fn entry(id: &str, name: &str, path: &str) -> TaggedEntry {
        TaggedEntry::new(id.into(), name.into(), path.into(), "export".into())
    }

    fn read_back(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
        ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    #[test]
    fn test_export_archives_every_match() {
        let index = MemoryIndex::new(vec![
            entry("1", "a.txt", "/a.txt"),
            entry("2", "b.txt", "/b.txt"),
        ]);
        let store = MemoryStore::new();
        store.insert("/a.txt", vec![b'a'; 10]);
        store.insert("/b.txt", vec![b'b'; 20]);

        let exporter = Exporter::new(&index, &store, 100);
        let outcome = exporter.export(&TagQuery::all("export")).unwrap();

        let bytes = outcome.into_bytes().expect("archive produced");
        let mut archive = read_back(bytes);
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "a.txt");
        assert_eq!(archive.by_index(1).unwrap().name(), "b.txt");
    }

    #[test]
    fn test_budget_rejection_happens_before_any_fetch() {
        let index = MemoryIndex::new(vec![
            entry("1", "a.txt", "/a.txt"),
            entry("2", "b.txt", "/b.txt"),
        ]);
        let store = MemoryStore::new();
        store.insert("/a.txt", vec![0; 10]);
        store.insert("/b.txt", vec![0; 20]);

        let exporter = Exporter::new(&index, &store, 25);
        let err = exporter.export(&TagQuery::all("export")).unwrap_err();

        assert!(matches!(
            err,
            ExportError::BudgetExceeded {
                total: 30,
                limit: 25
            }
        ));
        assert_eq!(store.fetch_calls(), 0);
    }

    #[test]
    fn test_single_fetch_failure_fails_the_whole_export() {
        let index = MemoryIndex::new(vec![
            entry("1", "a.txt", "/a.txt"),
            entry("2", "b.txt", "/b.txt"),
            entry("3", "c.txt", "/c.txt"),
        ]);
        let store = MemoryStore::new();
        store.insert("/a.txt", vec![0; 1]);
        store.insert("/b.txt", vec![0; 1]);
        store.insert("/c.txt", vec![0; 1]);
        store.fail_fetch("/b.txt");

        let exporter = Exporter::new(&index, &store, 100);
        let err = exporter.export(&TagQuery::all("export")).unwrap_err();

        // The first failure in input order is the one reported
        assert!(matches!(
            err,
            ExportError::DownloadFailed { path, .. } if path == "/b.txt"
        ));
        // The third entry was never fetched
        assert_eq!(store.fetch_calls(), 2);
    }

    #[test]
    fn test_zero_matches_is_empty_not_an_error() {
        let index = MemoryIndex::new(Vec::new());
        let store = MemoryStore::new();

        let exporter = Exporter::new(&index, &store, 100);
        let outcome = exporter.export(&TagQuery::all("nothing")).unwrap();

        assert_eq!(outcome, ExportOutcome::Empty);
        assert_eq!(store.metadata_calls(), 0);
        assert_eq!(store.fetch_calls(), 0);
    }

    #[test]
    fn test_metadata_failure_stops_before_transfer() {
        let index = MemoryIndex::new(vec![entry("1", "a.txt", "/a.txt")]);
        let store = MemoryStore::new();
        store.fail_metadata("/a.txt");

        let exporter = Exporter::new(&index, &store, 100);
        let err = exporter.export(&TagQuery::all("export")).unwrap_err();

        assert!(matches!(err, ExportError::MetadataUnavailable { .. }));
        assert_eq!(store.fetch_calls(), 0);
    }

    #[test]
    fn test_unknown_sizes_count_as_zero_toward_budget() {
        let index = MemoryIndex::new(vec![entry("1", "a.txt", "/a.txt")]);
        let store = MemoryStore::new();
        store.insert_unsized("/a.txt", vec![0; 1000]);

        // The object is larger than the limit but reports no size
        let exporter = Exporter::new(&index, &store, 10);
        let outcome = exporter.export(&TagQuery::all("export")).unwrap();
        assert!(matches!(outcome, ExportOutcome::Archive(_)));
    }

    #[test]
    fn test_entry_count_equals_input_count() {
        let entries: Vec<TaggedEntry> = (0..7)
            .map(|i| entry(&i.to_string(), &format!("f{i}.bin"), &format!("/f{i}.bin")))
            .collect();
        let store = MemoryStore::new();
        for i in 0..7 {
            store.insert(&format!("/f{i}.bin"), vec![0; 3]);
        }
        let index = MemoryIndex::new(entries);

        let exporter = Exporter::new(&index, &store, 100);
        let bytes = exporter
            .export(&TagQuery::all("export"))
            .unwrap()
            .into_bytes()
            .unwrap();

        assert_eq!(read_back(bytes).len(), 7);
    }
}
