//! Tag index module for tagpack
//!
//! Provides the narrow lookup boundary the export pipeline depends on
//! ([`TagIndex`]) together with the shipped implementation: an embedded sled
//! database of tag records.
//!
//! Uses two sled trees per collection for efficient bidirectional lookups:
//! - `<collection>.entries`: id -> record, iterated in id order
//! - `<collection>.tags`: tag term -> ids reverse index

use sled::{Db, Tree};
use std::path::Path;
use uuid::Uuid;

use crate::{EntryPatch, TaggedEntry};

pub mod error;
pub mod query;

pub use error::IndexError;
pub use query::TagQuery;

/// Lookup boundary between the export pipeline and the tag store
///
/// The orchestrator only ever asks the index for the entries matching a tag
/// expression; record management is a concern of the concrete store behind
/// the trait.
pub trait TagIndex {
    /// Return the id-ordered entries matching the query's tag expression,
    /// windowed by the query's pagination bounds
    ///
    /// # Errors
    /// Returns `IndexError` if the lookup cannot be answered.
    fn find_by_tags(&self, query: &TagQuery) -> Result<Vec<TaggedEntry>, IndexError>;
}

/// Sled-backed tag index
///
/// Records are kept under a named collection so one database can host
/// several independent tag namespaces.
pub struct SledIndex {
    db: Db,
    entries: Tree, // id -> record
    tags: Tree,    // tag term -> ids reverse index
}

impl SledIndex {
    /// Opens or creates the index at the specified path, scoped to a collection
    ///
    /// # Arguments
    /// * `path` - Path to the database directory
    /// * `collection` - Namespace for the record and reverse-index trees
    ///
    /// # Examples
    /// ```no_run
    /// use tagpack::index::SledIndex;
    /// let index = SledIndex::open("my_index", "tags").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if the database cannot be opened or the internal
    /// trees cannot be created.
    pub fn open<P: AsRef<Path>>(path: P, collection: &str) -> Result<Self, IndexError> {
        let db = sled::open(path)?;
        let entries = db.open_tree(format!("{collection}.entries"))?;
        let tags = db.open_tree(format!("{collection}.tags"))?;
        Ok(Self { db, entries, tags })
    }

    /// Add a new record, assigning it a freshly generated id
    ///
    /// The same name/path/tags combination may be added any number of times;
    /// each add produces a distinct record.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if the record cannot be encoded or stored.
    pub fn add(&self, name: &str, path: &str, tags: &str) -> Result<TaggedEntry, IndexError> {
        let entry = TaggedEntry::new(
            Uuid::new_v4().to_string(),
            name.to_string(),
            path.to_string(),
            tags.to_string(),
        );
        self.put(&entry)?;
        Ok(entry)
    }

    /// Fetch one record by id
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no record has the id, or a storage
    /// error if the lookup fails.
    pub fn get(&self, id: &str) -> Result<TaggedEntry, IndexError> {
        match self.entries.get(id.as_bytes())? {
            Some(value) => {
                let (entry, _): (TaggedEntry, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(entry)
            }
            None => Err(IndexError::NotFound(id.to_string())),
        }
    }

    /// Merge a patch onto an existing record and store the merged result
    ///
    /// Present patch fields overwrite, absent fields keep the stored value.
    /// The merged record must still carry a name and a path.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if the id is unknown,
    /// `IndexError::Incomplete` if the merged record lost its name or path,
    /// or a storage error if the update cannot be persisted.
    pub fn update(&self, id: &str, patch: EntryPatch) -> Result<TaggedEntry, IndexError> {
        let mut entry = self.get(id)?;
        entry.apply(patch);

        if !entry.is_complete() {
            return Err(IndexError::Incomplete {
                id: entry.id,
                name: entry.name,
                path: entry.path,
            });
        }

        self.put(&entry)?;
        Ok(entry)
    }

    /// Delete a record by id
    ///
    /// # Errors
    ///
    /// Returns `IndexError::NotFound` if no record has the id, or a storage
    /// error if the removal fails.
    pub fn remove(&self, id: &str) -> Result<(), IndexError> {
        let existing = self.get(id)?;
        let tags: Vec<String> = existing.tag_terms().map(str::to_string).collect();
        self.remove_from_tag_index(id, &tags)?;
        self.entries.remove(id.as_bytes())?;
        Ok(())
    }

    /// Number of records in the collection
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if the flush fails.
    pub fn flush(&self) -> Result<(), IndexError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove all records and reverse-index data from the collection
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if either tree cannot be cleared.
    pub fn clear(&self) -> Result<(), IndexError> {
        self.entries.clear()?;
        self.tags.clear()?;
        Ok(())
    }

    // Private helper methods

    /// Store a record and bring the reverse index in line with its tags
    fn put(&self, entry: &TaggedEntry) -> Result<(), IndexError> {
        match self.get(&entry.id) {
            Ok(old) => {
                let old_tags: Vec<String> = old.tag_terms().map(str::to_string).collect();
                self.remove_from_tag_index(&entry.id, &old_tags)?;
            }
            Err(IndexError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let value = bincode::encode_to_vec(entry, bincode::config::standard())?;
        self.entries.insert(entry.id.as_bytes(), value)?;

        let tags: Vec<String> = entry.tag_terms().map(str::to_string).collect();
        self.add_to_tag_index(&entry.id, &tags)?;

        Ok(())
    }

    /// Decode every record in the collection, in id order
    fn all_entries(&self) -> Result<Vec<TaggedEntry>, IndexError> {
        let mut result = Vec::new();
        for item in &self.entries {
            let (_, value) = item?;
            let (entry, _): (TaggedEntry, usize) =
                bincode::decode_from_slice(&value, bincode::config::standard())?;
            result.push(entry);
        }
        Ok(result)
    }

    /// Ids recorded under one tag term in the reverse index
    fn ids_for_term(&self, term: &str) -> Result<Vec<String>, IndexError> {
        match self.tags.get(term.as_bytes())? {
            Some(value) => {
                let (ids, _): (Vec<String>, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(ids)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Record an id under each tag term in the reverse index
    fn add_to_tag_index(&self, id: &str, tags: &[String]) -> Result<(), IndexError> {
        for tag in tags {
            let mut ids = self.ids_for_term(tag)?;
            if !ids.contains(&id.to_string()) {
                ids.push(id.to_string());
            }
            let encoded = bincode::encode_to_vec(&ids, bincode::config::standard())?;
            self.tags.insert(tag.as_bytes(), encoded)?;
        }
        Ok(())
    }

    /// Drop an id from each tag term; terms left without ids are deleted
    fn remove_from_tag_index(&self, id: &str, tags: &[String]) -> Result<(), IndexError> {
        for tag in tags {
            if let Some(value) = self.tags.get(tag.as_bytes())? {
                let (mut ids, _): (Vec<String>, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;

                ids.retain(|existing| existing != id);

                if ids.is_empty() {
                    self.tags.remove(tag.as_bytes())?;
                } else {
                    let encoded = bincode::encode_to_vec(&ids, bincode::config::standard())?;
                    self.tags.insert(tag.as_bytes(), encoded)?;
                }
            }
        }
        Ok(())
    }
}

impl TagIndex for SledIndex {
    fn find_by_tags(&self, query: &TagQuery) -> Result<Vec<TaggedEntry>, IndexError> {
        let matches = if query.matches_all() {
            self.all_entries()?
        } else {
            // Union of the per-term reverse-index hits, resolved in id order
            let mut ids: Vec<String> = Vec::new();
            for term in query.terms() {
                for id in self.ids_for_term(term)? {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }
            ids.sort();

            let mut entries = Vec::with_capacity(ids.len());
            for id in &ids {
                entries.push(self.get(id)?);
            }
            entries
        };

        Ok(query.paginate(matches))
    }
}

impl Drop for SledIndex {
    fn drop(&mut self) {
        // Best-effort flush on drop. Callers should explicitly flush()
        // if they need guaranteed durability.
        let _ = self.db.flush();
    }
}
