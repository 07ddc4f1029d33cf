//! Tag expression queries against the index
//!
//! A query pairs a tag expression with a pagination window. The expression is
//! a whitespace/comma separated list of tag terms; an entry matches if it
//! carries any of the terms. The single term `*` matches every entry.
//!
//! Results are always ordered by record id, so the same query yields the same
//! page regardless of how the matching ids were collected.

use crate::TaggedEntry;

/// The match-everything expression
pub const MATCH_ALL: &str = "*";

/// A tag expression plus pagination bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    /// Tag expression: `*` or a list of terms combined with OR semantics
    pub tags: String,
    /// Number of id-ordered matches to skip
    pub offset: usize,
    /// Maximum number of matches to return; `None` returns all matches
    pub limit: Option<usize>,
}

impl TagQuery {
    /// Query for every match of the expression, first to last
    #[must_use]
    pub fn all(tags: &str) -> Self {
        Self {
            tags: tags.to_string(),
            offset: 0,
            limit: None,
        }
    }

    /// Query for a window of the id-ordered matches
    #[must_use]
    pub fn page(tags: &str, offset: usize, limit: usize) -> Self {
        Self {
            tags: tags.to_string(),
            offset,
            limit: Some(limit),
        }
    }

    /// True if this query matches every entry regardless of tags
    #[must_use]
    pub fn matches_all(&self) -> bool {
        self.tags.trim() == MATCH_ALL || self.tags.trim().is_empty()
    }

    /// The individual terms of the expression
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty() && *t != MATCH_ALL)
    }

    /// True if the entry carries at least one of the query terms
    #[must_use]
    pub fn matches(&self, entry: &TaggedEntry) -> bool {
        if self.matches_all() {
            return true;
        }
        self.terms()
            .any(|term| entry.tag_terms().any(|t| t == term))
    }

    /// Apply the pagination window to an id-ordered match list
    #[must_use]
    pub fn paginate(&self, mut matches: Vec<TaggedEntry>) -> Vec<TaggedEntry> {
        if self.offset >= matches.len() {
            return Vec::new();
        }
        matches.drain(..self.offset);
        if let Some(limit) = self.limit {
            matches.truncate(limit);
        }
        matches
    }
}
