//! Export-pipeline-specific error types
//!
//! Every failure of one export call. All kinds are terminal for the export in
//! flight; nothing in the pipeline retries. Store causes are preserved for
//! diagnostics but mapped to a neutral payload at the boundary.

use thiserror::Error;

use crate::index::IndexError;
use crate::store::StoreError;

/// Export-pipeline-specific errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// A metadata lookup failed during resolution; nothing was transferred
    #[error("Unable to retrieve metadata for path [{path}]")]
    MetadataUnavailable {
        path: String,
        source: StoreError,
    },

    /// The aggregate size of the selected files is over the configured limit
    #[error("Selected files total [{total}] bytes, exceeding the allowed [{limit}] bytes")]
    BudgetExceeded { total: u64, limit: u64 },

    /// A byte transfer failed; the whole export is abandoned
    #[error("Error occurred during download of [{path}]")]
    DownloadFailed {
        path: String,
        source: StoreError,
    },

    /// The tag index could not answer the entry lookup
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The archive container could not be written
    #[error("Error occurred during creation of the archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
