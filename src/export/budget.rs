//! Size budget enforcement
//!
//! The aggregate size of an export is computed from resolved metadata and
//! checked against the configured ceiling before any byte is transferred.
//! This is a pure computation; it performs no I/O.

use crate::store::RemoteMetadata;

use super::ExportError;

/// Sum of the resolved object sizes
///
/// Objects whose size the store did not report count as zero bytes. An
/// incomplete store can therefore under-count and admit an oversized export.
#[must_use]
pub fn aggregate_size(metadata: &[RemoteMetadata]) -> u64 {
    metadata.iter().map(|m| m.size_bytes.unwrap_or(0)).sum()
}

/// Check the aggregate size against the configured limit
///
/// Returns the aggregate on success so the caller can log it.
///
/// # Errors
/// Returns `ExportError::BudgetExceeded` if the aggregate is over the limit.
pub fn enforce_budget(metadata: &[RemoteMetadata], limit: u64) -> Result<u64, ExportError> {
    let total = aggregate_size(metadata);
    if total > limit {
        return Err(ExportError::BudgetExceeded { total, limit });
    }
    Ok(total)
}
