//! Update command - patch a record field by field

use crate::index::SledIndex;
use crate::{EntryPatch, TagpackError, output};

type Result<T> = std::result::Result<T, TagpackError>;

/// Execute the update command
///
/// Present fields overwrite the stored record, absent fields keep their
/// value; the merged record must still carry a name and a path.
///
/// # Errors
/// Returns an error if the patch is empty, the id is unknown, the merge
/// leaves the record incomplete, or the index cannot store the result.
pub fn execute(index: &SledIndex, id: &str, patch: EntryPatch, quiet: bool) -> Result<()> {
    if patch.is_empty() {
        return Err(TagpackError::InvalidInput(
            "Nothing to update: provide at least one of --name, --path, --tags".into(),
        ));
    }

    let updated = index.update(id, patch)?;

    if quiet {
        println!("{}", updated.id);
    } else {
        println!("Updated {}", output::entry_line(&updated, false).trim_start());
    }
    Ok(())
}
