//! Show command - display one record by id

use crate::index::SledIndex;
use crate::{TagpackError, output};

type Result<T> = std::result::Result<T, TagpackError>;

/// Execute the show command
///
/// # Errors
/// Returns an error if no record has the id.
pub fn execute(index: &SledIndex, id: &str, quiet: bool) -> Result<()> {
    let entry = index.get(id)?;

    if quiet {
        println!("{}", output::entry_line(&entry, true));
    } else {
        println!("{}", output::entry_details(&entry));
    }
    Ok(())
}
