//! Boundary mapping from failures to transport responses
//!
//! The core returns typed errors; this module is the single place where an
//! error kind becomes a transport status and a machine-readable payload
//! `{ "code", "message" }`. A controller layer in front of tagpack serves a
//! finished archive as `application/zip`, an empty outcome as a plain-text
//! 404, and any error as the JSON payload produced here.
//!
//! Internal failures (storage, codec, I/O, configuration) are logged with
//! their full cause but surfaced with a redacted message.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::TagpackError;
use crate::export::{ExportError, ExportOutcome};
use crate::index::IndexError;

/// Content type of a finished archive
pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

/// Plain-text body served when an export matched nothing
pub const EMPTY_EXPORT_MESSAGE: &str = "No archive has been created for the requested tags.";

/// Message served in place of internal failure details
const REDACTED_MESSAGE: &str = "Please contact the administrator.";

/// Machine-readable error payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
        }
    }
}

/// The transport status equivalent for a successful export call
///
/// A finished archive is served as-is; a matchless export is a plain
/// not-found, distinct from every error mapping.
#[must_use]
pub const fn outcome_status(outcome: &ExportOutcome) -> u16 {
    match outcome {
        ExportOutcome::Archive(_) => 200,
        ExportOutcome::Empty => 404,
    }
}

/// The transport status equivalent for a failure
#[must_use]
pub fn status_code(err: &TagpackError) -> u16 {
    match err {
        TagpackError::IndexError(index) => index_status(index),
        TagpackError::ExportError(export) => match export {
            ExportError::Index(index) => index_status(index),
            ExportError::MetadataUnavailable { .. }
            | ExportError::BudgetExceeded { .. }
            | ExportError::DownloadFailed { .. }
            | ExportError::Archive(_) => 500,
        },
        TagpackError::ConfigError(_) | TagpackError::IoError(_) => 500,
        TagpackError::InvalidInput(_) => 400,
    }
}

/// The payload for a failure, with internal causes logged and redacted
#[must_use]
pub fn error_response(err: &TagpackError) -> ErrorResponse {
    error!(%err, "export request failed");

    match err {
        TagpackError::IndexError(index) => index_response(index),
        TagpackError::ExportError(export) => match export {
            ExportError::Index(index) => index_response(index),
            ExportError::MetadataUnavailable { .. } => {
                ErrorResponse::new("METADATA_UNAVAILABLE", export.to_string())
            }
            ExportError::BudgetExceeded { .. } => {
                ErrorResponse::new("BUDGET_EXCEEDED", export.to_string())
            }
            ExportError::DownloadFailed { .. } => {
                ErrorResponse::new("DOWNLOAD_FAILED", export.to_string())
            }
            ExportError::Archive(_) => {
                ErrorResponse::new("INTERNAL_ERROR", REDACTED_MESSAGE.to_string())
            }
        },
        TagpackError::ConfigError(_) | TagpackError::IoError(_) => {
            ErrorResponse::new("INTERNAL_ERROR", REDACTED_MESSAGE.to_string())
        }
        TagpackError::InvalidInput(msg) => ErrorResponse::new("INVALID_INPUT", msg.clone()),
    }
}

fn index_status(err: &IndexError) -> u16 {
    match err {
        IndexError::NotFound(_) => 404,
        IndexError::MultipleIds(_) => 409,
        IndexError::Incomplete { .. } => 406,
        IndexError::InvalidInput(_) => 400,
        IndexError::SledError(_) | IndexError::DecodeError(_) | IndexError::EncodeError(_) => 500,
    }
}

fn index_response(err: &IndexError) -> ErrorResponse {
    match err {
        IndexError::NotFound(_) => ErrorResponse::new("TAG_ENTRY_NOT_FOUND", err.to_string()),
        IndexError::MultipleIds(_) => {
            ErrorResponse::new("MULTIPLE_TAG_IDS_FOUND", err.to_string())
        }
        IndexError::Incomplete { .. } => {
            ErrorResponse::new("INCOMPLETE_TAG_ENTITY", err.to_string())
        }
        IndexError::InvalidInput(_) => ErrorResponse::new("INVALID_INPUT", err.to_string()),
        IndexError::SledError(_) | IndexError::DecodeError(_) | IndexError::EncodeError(_) => {
            ErrorResponse::new("INTERNAL_ERROR", REDACTED_MESSAGE.to_string())
        }
    }
}
