//! Tagpack - tag remotely-stored files and export tag matches as one archive
//!
//! This library keeps a searchable index of tag records that point at files in
//! a remote store, and builds a single zip archive out of every file matching
//! a tag expression. The index and the store are narrow boundaries: the export
//! pipeline only ever sees the [`index::TagIndex`] and [`store::RemoteFileStore`]
//! traits.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod index;
pub mod output;
pub mod response;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagpackError {
    /// Tag index error
    #[error("Index error: {0}")]
    IndexError(#[from] index::IndexError),
    /// Export pipeline error
    #[error("Export error: {0}")]
    ExportError(#[from] export::ExportError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// One tag record as kept by the tag index
///
/// Points at a file in the remote store (`path`) and carries the name the
/// file gets inside an exported archive plus its tag terms as a single
/// whitespace-separated string.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TaggedEntry {
    pub id: String,
    pub name: String,
    pub path: String,
    pub tags: String,
}

impl TaggedEntry {
    /// Create a new TaggedEntry
    #[must_use]
    pub const fn new(id: String, name: String, path: String, tags: String) -> Self {
        Self {
            id,
            name,
            path,
            tags,
        }
    }

    /// Iterate over the individual tag terms of this entry
    ///
    /// Terms are separated by whitespace and/or commas; empty terms are
    /// skipped.
    pub fn tag_terms(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
    }

    /// Apply a patch field by field: every present field overwrites, every
    /// absent field keeps the existing value.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(path) = patch.path {
            self.path = path;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    /// A record needs a non-empty name and path to be exportable
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.path.is_empty()
    }
}

/// Partial update for a [`TaggedEntry`]
///
/// The id is never patchable; it identifies the record being updated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub path: Option<String>,
    pub tags: Option<String>,
}

impl EntryPatch {
    /// True if no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.path.is_none() && self.tags.is_none()
    }
}
