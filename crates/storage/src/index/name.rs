//! Name index with full-name and either-name buckets
//!
//! Two maps back this index:
//! - `by_full_name`: (first, last) → ids, for queries giving both fields
//! - `by_either_name`: name → ids, one shared bucket per name whether it
//!   appeared as a first or a last name
//!
//! Keys are normalized (trimmed, lowercased). A query with both fields
//! matches first AND last exactly; a query with one field consults the
//! shared either-name bucket. Callers wanting OR across two names union
//! two single-field queries.

use crate::normalize::normalize;
use rolodex_core::{ContactId, Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};

/// Secondary index over contact names
#[derive(Debug, Default)]
pub struct NameIndex {
    by_full_name: FxHashMap<(String, String), FxHashSet<ContactId>>,
    by_either_name: FxHashMap<String, FxHashSet<ContactId>>,
}

impl NameIndex {
    /// Create a new empty NameIndex
    pub fn new() -> Self {
        Self {
            by_full_name: FxHashMap::default(),
            by_either_name: FxHashMap::default(),
        }
    }

    /// Index a contact under its first and last name
    pub fn insert(&mut self, first: &str, last: &str, id: ContactId) {
        let first = normalize(first);
        let last = normalize(last);

        self.by_either_name
            .entry(first.clone())
            .or_default()
            .insert(id);
        self.by_either_name
            .entry(last.clone())
            .or_default()
            .insert(id);
        self.by_full_name
            .entry((first, last))
            .or_default()
            .insert(id);
    }

    /// Remove a contact's entries for the given names
    ///
    /// Buckets that become empty are removed entirely to avoid
    /// accumulating empty sets.
    pub fn remove(&mut self, first: &str, last: &str, id: &ContactId) {
        let first = normalize(first);
        let last = normalize(last);

        Self::remove_from(&mut self.by_either_name, &first, id);
        if last != first {
            Self::remove_from(&mut self.by_either_name, &last, id);
        }
        Self::remove_from(&mut self.by_full_name, &(first, last), id);
    }

    fn remove_from<K: std::hash::Hash + Eq>(
        map: &mut FxHashMap<K, FxHashSet<ContactId>>,
        key: &K,
        id: &ContactId,
    ) {
        if let Some(ids) = map.get_mut(key) {
            ids.remove(id);
            if ids.is_empty() {
                map.remove(key);
            }
        }
    }

    /// Look up contacts by name
    ///
    /// With both fields given, matches contacts whose first AND last name
    /// both match. With exactly one field given, matches contacts carrying
    /// that name as either their first or their last name. Blank fields
    /// count as absent.
    ///
    /// # Errors
    ///
    /// `Error::InvalidQuery` when both fields are absent or blank.
    pub fn lookup(&self, first: Option<&str>, last: Option<&str>) -> Result<FxHashSet<ContactId>> {
        let first = first.map(normalize).filter(|s| !s.is_empty());
        let last = last.map(normalize).filter(|s| !s.is_empty());

        let ids = match (first, last) {
            (Some(first), Some(last)) => self.by_full_name.get(&(first, last)),
            (Some(name), None) | (None, Some(name)) => self.by_either_name.get(&name),
            (None, None) => {
                return Err(Error::InvalidQuery(
                    "at least one of first or last name is required".to_string(),
                ))
            }
        };

        Ok(ids.cloned().unwrap_or_default())
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.by_full_name.is_empty() && self.by_either_name.is_empty()
    }
}
