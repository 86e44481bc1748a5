//! Unique phone number index
//!
//! Exact-match map from phone number to contact id, enforcing the
//! one-live-contact-per-number invariant. This is the only index whose
//! insert can fail; the engine relies on that failure happening before
//! any other structure is touched.

use rolodex_core::{ContactId, Error, PhoneNumber, Result};
use rustc_hash::FxHashMap;

/// Unique index: PhoneNumber → ContactId
#[derive(Debug, Default)]
pub struct PhoneIndex {
    index: FxHashMap<PhoneNumber, ContactId>,
}

impl PhoneIndex {
    /// Create a new empty PhoneIndex
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
        }
    }

    /// Look up the contact id for a phone number
    pub fn get(&self, phone: &PhoneNumber) -> Option<ContactId> {
        self.index.get(phone).copied()
    }

    /// Check whether a phone number is in use
    pub fn contains(&self, phone: &PhoneNumber) -> bool {
        self.index.contains_key(phone)
    }

    /// Map a phone number to a contact id
    ///
    /// Idempotent for the same id. Fails if the number already maps to a
    /// different contact, leaving the index unchanged.
    ///
    /// # Errors
    ///
    /// `Error::PhoneInUse` on a uniqueness conflict.
    pub fn insert(&mut self, phone: PhoneNumber, id: ContactId) -> Result<()> {
        if let Some(existing) = self.index.get(&phone) {
            if *existing != id {
                return Err(Error::PhoneInUse(phone));
            }
        }
        self.index.insert(phone, id);
        Ok(())
    }

    /// Remove a phone number mapping, returning the id it pointed to
    pub fn remove(&mut self, phone: &PhoneNumber) -> Option<ContactId> {
        self.index.remove(phone)
    }

    /// Move a contact's mapping from one number to another
    ///
    /// Checks the new number for a conflict before either half mutates, so
    /// a failed rekey leaves both mappings exactly as they were.
    ///
    /// # Errors
    ///
    /// `Error::PhoneInUse` if `new` already maps to a different contact.
    pub fn rekey(&mut self, old: &PhoneNumber, new: PhoneNumber, id: ContactId) -> Result<()> {
        if let Some(existing) = self.index.get(&new) {
            if *existing != id {
                return Err(Error::PhoneInUse(new));
            }
        }
        self.index.remove(old);
        self.index.insert(new, id);
        Ok(())
    }

    /// Number of live phone mappings
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
