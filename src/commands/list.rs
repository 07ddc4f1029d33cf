//! List command - page through records matching a tag expression

use crate::index::{SledIndex, TagIndex, TagQuery};
use crate::{TagpackError, output};

type Result<T> = std::result::Result<T, TagpackError>;

/// Execute the list command
///
/// Shows the id-ordered window of records matching the expression.
///
/// # Errors
/// Returns an error if the index lookup fails.
pub fn execute(
    index: &SledIndex,
    tags: &str,
    offset: usize,
    limit: usize,
    quiet: bool,
) -> Result<()> {
    let entries = index.find_by_tags(&TagQuery::page(tags, offset, limit))?;

    if entries.is_empty() {
        if !quiet {
            println!("No records match [{tags}]");
        }
        return Ok(());
    }

    if !quiet {
        println!("Records matching [{tags}]:");
    }
    for entry in &entries {
        println!("{}", output::entry_line(entry, quiet));
    }
    Ok(())
}
