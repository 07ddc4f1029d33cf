//! Metadata resolution for export candidates
//!
//! Maps an ordered list of tag records to the metadata of the objects they
//! point at, one store lookup per record. The first failed lookup aborts the
//! whole resolution; no partial metadata ever reaches the budget check.

use tracing::debug;

use crate::TaggedEntry;
use crate::store::{RemoteFileStore, RemoteMetadata};

use super::ExportError;

/// Resolve every entry to its remote metadata, in input order
///
/// The result has exactly one element per entry. No retries: a lookup
/// failure is reported upward as `MetadataUnavailable` with the offending
/// path.
///
/// # Errors
/// Returns `ExportError::MetadataUnavailable` on the first failed lookup.
pub fn resolve_metadata<S: RemoteFileStore + ?Sized>(
    store: &S,
    entries: &[TaggedEntry],
) -> Result<Vec<RemoteMetadata>, ExportError> {
    let mut resolved = Vec::with_capacity(entries.len());

    for entry in entries {
        let metadata =
            store
                .metadata(&entry.path)
                .map_err(|source| ExportError::MetadataUnavailable {
                    path: entry.path.clone(),
                    source,
                })?;
        debug!(path = %metadata.path, size = ?metadata.size_bytes, "resolved metadata");
        resolved.push(metadata);
    }

    Ok(resolved)
}
