//! Byte retrieval for one export candidate
//!
//! Fetches the full content of the object a tag record points at. The entry
//! it produces is named after the record, not the store path, so the archive
//! carries user-facing names.

use tracing::debug;

use crate::TaggedEntry;
use crate::store::RemoteFileStore;

use super::{ArchiveEntry, ExportError};

/// Fetch one record's object into an in-memory archive entry
///
/// # Errors
/// Returns `ExportError::DownloadFailed` with the store cause if the read
/// fails.
pub fn fetch_entry<S: RemoteFileStore + ?Sized>(
    store: &S,
    entry: &TaggedEntry,
) -> Result<ArchiveEntry, ExportError> {
    let content = store
        .fetch(&entry.path)
        .map_err(|source| ExportError::DownloadFailed {
            path: entry.path.clone(),
            source,
        })?;

    debug!(name = %entry.name, path = %entry.path, size = content.len(), "fetched object");

    Ok(ArchiveEntry {
        name: entry.name.clone(),
        content,
    })
}
