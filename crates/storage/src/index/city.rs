//! City index
//!
//! Maps the normalized city (field two of a parsed address) to the set of
//! contacts living there. Contacts without a parseable address simply have
//! no entry here; absence from this index never means absence from the
//! directory.

use crate::normalize::normalize;
use rolodex_core::ContactId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Secondary index: city → ContactIds
#[derive(Debug, Default)]
pub struct CityIndex {
    index: FxHashMap<String, FxHashSet<ContactId>>,
}

impl CityIndex {
    /// Create a new empty CityIndex
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
        }
    }

    /// Add a contact to a city's bucket
    pub fn insert(&mut self, city: &str, id: ContactId) {
        self.index.entry(normalize(city)).or_default().insert(id);
    }

    /// Remove a contact from a city's bucket
    ///
    /// If the bucket becomes empty, removes the city entry entirely.
    pub fn remove(&mut self, city: &str, id: &ContactId) {
        let key = normalize(city);
        if let Some(ids) = self.index.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.index.remove(&key);
            }
        }
    }

    /// All contacts in a city (exact, case-normalized match)
    pub fn lookup(&self, city: &str) -> FxHashSet<ContactId> {
        self.index
            .get(&normalize(city))
            .cloned()
            .unwrap_or_default()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct cities in the index
    pub fn len(&self) -> usize {
        self.index.len()
    }
}
