//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including record lines and byte sizes.

use byte_unit::{Byte, UnitType};
use colored::Colorize;

use crate::TaggedEntry;

/// Format a record for display
#[must_use]
pub fn entry_line(entry: &TaggedEntry, quiet: bool) -> String {
    if quiet {
        entry.id.clone()
    } else {
        format!(
            "  {}  {} {} [{}]",
            entry.id.dimmed(),
            entry.name.bold(),
            entry.path,
            entry.tags
        )
    }
}

/// Format one record in full, one field per line
#[must_use]
pub fn entry_details(entry: &TaggedEntry) -> String {
    format!(
        "id:   {}\nname: {}\npath: {}\ntags: {}",
        entry.id, entry.name, entry.path, entry.tags
    )
}

/// Format a byte count in the closest binary unit
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> TaggedEntry {
        TaggedEntry::new(
            "abc".into(),
            "a.txt".into(),
            "/docs/a.txt".into(),
            "docs".into(),
        )
    }

    #[test]
    fn test_quiet_line_is_just_the_id() {
        assert_eq!(entry_line(&entry(), true), "abc");
    }

    #[test]
    fn test_entry_line_names_all_fields() {
        let line = entry_line(&entry(), false);
        assert!(line.contains("abc"));
        assert!(line.contains("a.txt"));
        assert!(line.contains("/docs/a.txt"));
        assert!(line.contains("docs"));
    }

    #[test]
    fn test_entry_details_one_field_per_line() {
        let details = entry_details(&entry());
        assert_eq!(details.lines().count(), 4);
    }

    #[test]
    fn test_format_size_picks_binary_units() {
        assert!(format_size(2048).contains("KiB"));
    }
}
