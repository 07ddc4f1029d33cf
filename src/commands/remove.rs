//! Remove command - delete a record

use crate::TagpackError;
use crate::index::SledIndex;

type Result<T> = std::result::Result<T, TagpackError>;

/// Execute the remove command
///
/// # Errors
/// Returns an error if no record has the id or the deletion fails.
pub fn execute(index: &SledIndex, id: &str, quiet: bool) -> Result<()> {
    index.remove(id)?;

    if !quiet {
        println!("Record with id [{id}] has been deleted.");
    }
    Ok(())
}
