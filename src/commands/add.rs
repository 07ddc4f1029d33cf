//! Add command - register a tag record

use crate::index::SledIndex;
use crate::{TagpackError, output};

type Result<T> = std::result::Result<T, TagpackError>;

/// Execute the add command - register a record for a remote file
///
/// The record gets a freshly generated id; registering the same file twice
/// creates two records.
///
/// # Errors
/// Returns an error if no tags are provided or the index cannot store the
/// record.
pub fn execute(index: &SledIndex, name: &str, path: &str, tags: &str, quiet: bool) -> Result<()> {
    if tags.trim().is_empty() {
        return Err(TagpackError::InvalidInput("No tags provided".into()));
    }

    let entry = index.add(name, path, tags)?;

    if quiet {
        println!("{}", entry.id);
    } else {
        println!("Added {}", output::entry_line(&entry, false).trim_start());
    }
    Ok(())
}
