//! Authoritative record store
//!
//! Pure key-value semantics over ContactId → Contact. No validation
//! happens here; the engine validates before anything reaches the store.
//! Every other structure in this crate holds identifiers only and resolves
//! them through this map.

use rolodex_core::{Contact, ContactId};
use rustc_hash::FxHashMap;

/// Canonical ContactId → Contact map
///
/// The record store is the single owner of contact data. Indexes are
/// derived from it and hold only ids.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: FxHashMap<ContactId, Contact>,
}

impl RecordStore {
    /// Create a new empty RecordStore
    pub fn new() -> Self {
        Self {
            records: FxHashMap::default(),
        }
    }

    /// Get a contact by id
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.records.get(id)
    }

    /// Insert or replace a contact under its own id
    pub fn put(&mut self, contact: Contact) {
        self.records.insert(contact.id, contact);
    }

    /// Remove a contact, returning it if present
    pub fn remove(&mut self, id: &ContactId) -> Option<Contact> {
        self.records.remove(id)
    }

    /// Check if a contact exists
    pub fn contains(&self, id: &ContactId) -> bool {
        self.records.contains_key(id)
    }

    /// Iterate all live contacts
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.values()
    }

    /// Number of live contacts
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
