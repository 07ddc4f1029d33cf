//! Export command - archive every match of a tag expression

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::export::{ExportOutcome, Exporter};
use crate::index::{TagIndex, TagQuery};
use crate::response::EMPTY_EXPORT_MESSAGE;
use crate::store::RemoteFileStore;
use crate::{TagpackError, output};

type Result<T> = std::result::Result<T, TagpackError>;

/// Execute the export command
///
/// Runs one export over every match of the expression and writes the
/// finished archive to `output_path`. A matchless expression leaves no file
/// behind.
///
/// # Errors
/// Returns an error if the export pipeline fails or the archive cannot be
/// written to disk.
pub fn execute(
    index: &dyn TagIndex,
    store: &dyn RemoteFileStore,
    max_size: u64,
    tags: &str,
    output_path: &Path,
    quiet: bool,
) -> Result<()> {
    let exporter = Exporter::new(index, store, max_size);

    match exporter.export(&TagQuery::all(tags))? {
        ExportOutcome::Archive(bytes) => {
            let size = bytes.len() as u64;
            fs::write(output_path, bytes)?;
            if quiet {
                println!("{}", output_path.display());
            } else {
                println!(
                    "Exported [{}] to {} ({})",
                    tags,
                    output_path.display().to_string().bold(),
                    output::format_size(size)
                );
            }
        }
        ExportOutcome::Empty => {
            if !quiet {
                println!("{EMPTY_EXPORT_MESSAGE}");
            }
        }
    }
    Ok(())
}
