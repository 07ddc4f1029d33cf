//! Zip archive assembly
//!
//! Collects fetched entries into one deflate-compressed zip container built
//! in memory. Entries are written in the order they are appended; names are
//! taken as-is, so two entries may share a name. Finalizing with zero entries
//! yields a valid empty container.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::ZipWriter;
use zip::result::ZipResult;
use zip::write::FileOptions;

use super::ArchiveEntry;

/// Incremental builder for the export archive
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl ArchiveBuilder {
    /// Start an empty archive
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    /// Append one entry to the container
    ///
    /// The entry's uncompressed size is recorded in the container alongside
    /// the compressed data.
    ///
    /// # Errors
    /// Returns a `ZipError` if the entry cannot be written.
    pub fn append(&mut self, entry: &ArchiveEntry) -> ZipResult<()> {
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        self.writer.start_file(entry.name.as_str(), options)?;
        self.writer.write_all(&entry.content)?;
        self.entries += 1;

        debug!(name = %entry.name, size = entry.content.len(), "added archive entry");
        Ok(())
    }

    /// Number of entries appended so far
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    /// True if nothing has been appended
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Close the container and return the finished bytes
    ///
    /// # Errors
    /// Returns a `ZipError` if the central directory cannot be written.
    pub fn finish(mut self) -> ZipResult<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
