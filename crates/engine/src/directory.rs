//! Directory: the orchestrator over the record store and all indexes
//!
//! ## Design
//!
//! The Directory is the sole mutator of directory state. It owns the
//! record store and the five secondary indexes behind one
//! `parking_lot::RwLock`; a mutation holds the write guard for its full
//! span, so no reader ever observes an index entry without its record or
//! a record missing its index entries.
//!
//! Every mutating operation validates and conflict-checks before its
//! first write. The only fallible index write is the unique phone
//! mapping, and it is always the first structure touched — a failure
//! leaves no partial state behind.
//!
//! Updates are modeled as unindex-old → apply-new-values → reindex-new
//! over the non-unique indexes (name, city, token, prefix); unchanged
//! fields remove and re-add the same entries, which is a no-op. The
//! unique phone index is instead moved with `rekey`, keeping the
//! conflict check and both half-steps in one place.
//!
//! ## Thread Safety
//!
//! Directory is `Send + Sync`. Lookups take read guards and may run
//! concurrently with each other; they materialize owned `Contact` clones
//! before the guard drops.

use crate::patch::{AddressPatch, ContactPatch};
use parking_lot::RwLock;
use rolodex_core::{Contact, ContactId, Error, PhoneNumber, Result, ValidationError};
use rolodex_storage::{
    contact_tokens, CityIndex, NameIndex, PhoneIndex, PhoneTrie, RecordStore, TokenIndex,
};
use tracing::debug;

#[derive(Debug, Default)]
struct DirectoryInner {
    records: RecordStore,
    phones: PhoneIndex,
    names: NameIndex,
    cities: CityIndex,
    tokens: TokenIndex,
    prefixes: PhoneTrie,
}

impl DirectoryInner {
    /// Insert a contact's entries into every non-unique index.
    ///
    /// The phone index is not touched here: its insert is fallible and
    /// each operation places it explicitly at the front of its write
    /// sequence.
    fn index_entries(&mut self, contact: &Contact) {
        self.names
            .insert(&contact.first_name, &contact.last_name, contact.id);
        if let Some(address) = contact.parsed_address() {
            self.cities.insert(&address.city, contact.id);
        }
        for token in contact_tokens(contact) {
            self.tokens.insert(&token, contact.id);
        }
        self.prefixes.insert(&contact.phone, contact.id);
    }

    /// Remove a contact's entries from every non-unique index.
    ///
    /// Exact inverse of `index_entries` for the same contact value.
    fn unindex_entries(&mut self, contact: &Contact) {
        self.names
            .remove(&contact.first_name, &contact.last_name, &contact.id);
        if let Some(address) = contact.parsed_address() {
            self.cities.remove(&address.city, &contact.id);
        }
        for token in contact_tokens(contact) {
            self.tokens.remove(&token, &contact.id);
        }
        self.prefixes.remove(&contact.phone, &contact.id);
    }

    /// Resolve an id set into owned contacts, sorted by phone number for
    /// deterministic output.
    fn materialize(&self, ids: impl IntoIterator<Item = ContactId>) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = ids
            .into_iter()
            .filter_map(|id| self.records.get(&id).cloned())
            .collect();
        contacts.sort_by(|a, b| a.phone.cmp(&b.phone));
        contacts
    }
}

/// In-memory contact directory with indexed lookup
///
/// A Directory is a single owned object; construct it, share it behind an
/// `Arc` if needed, and drop it when done. There is no global instance.
///
/// # Example
///
/// ```
/// use rolodex_engine::Directory;
///
/// let directory = Directory::new();
/// let id = directory
///     .create("Ada", "Lovelace", "5551234567", Some("1 Main St, Springfield, IL, 62701, USA"))
///     .unwrap();
///
/// let found = directory.lookup_by_phone("5551234567").unwrap();
/// assert_eq!(found.id, id);
/// assert_eq!(directory.lookup_by_city("Springfield").len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Directory {
    inner: RwLock<DirectoryInner>,
}

impl Directory {
    /// Create a new empty Directory
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner::default()),
        }
    }

    // ========== Mutations ==========

    /// Create a contact and return its assigned id
    ///
    /// Validates the names and phone number, then checks phone
    /// uniqueness; on any failure nothing is written.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` — empty name or malformed phone number
    /// - `Error::PhoneInUse` — the number belongs to a live contact
    pub fn create(
        &self,
        first: &str,
        last: &str,
        phone: &str,
        address: Option<&str>,
    ) -> Result<ContactId> {
        validate_name(first, ValidationError::EmptyFirstName)?;
        validate_name(last, ValidationError::EmptyLastName)?;
        let phone = PhoneNumber::new(phone).map_err(ValidationError::from)?;

        let mut inner = self.inner.write();
        let id = ContactId::new();
        // Uniqueness gate: the one fallible write, performed first.
        inner.phones.insert(phone.clone(), id)?;

        let contact = Contact {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone,
            address: address.map(str::to_string),
        };
        inner.index_entries(&contact);
        debug!(id = %id, phone = %contact.phone, "contact created");
        inner.records.put(contact);
        Ok(id)
    }

    /// Apply a partial update to a contact
    ///
    /// Fields the patch does not name are untouched. If the phone number
    /// changes, the new number is conflict-checked before any state
    /// mutates.
    ///
    /// # Errors
    ///
    /// - `Error::ContactNotFound` — unknown id
    /// - `Error::Validation` — a named field fails validation
    /// - `Error::PhoneInUse` — new phone belongs to another live contact
    pub fn update(&self, id: ContactId, patch: ContactPatch) -> Result<()> {
        if let Some(first) = &patch.first_name {
            validate_name(first, ValidationError::EmptyFirstName)?;
        }
        if let Some(last) = &patch.last_name {
            validate_name(last, ValidationError::EmptyLastName)?;
        }
        let new_phone = patch
            .phone
            .as_deref()
            .map(PhoneNumber::new)
            .transpose()
            .map_err(ValidationError::from)?;

        let mut inner = self.inner.write();
        let current = inner
            .records
            .get(&id)
            .cloned()
            .ok_or(Error::ContactNotFound(id))?;

        let mut updated = current.clone();
        if let Some(first) = patch.first_name {
            updated.first_name = first;
        }
        if let Some(last) = patch.last_name {
            updated.last_name = last;
        }
        if let Some(phone) = new_phone {
            updated.phone = phone;
        }
        match patch.address {
            AddressPatch::Keep => {}
            AddressPatch::Set(address) => updated.address = Some(address),
            AddressPatch::Clear => updated.address = None,
        }

        // Uniqueness gate before any other structure mutates.
        if updated.phone != current.phone {
            inner
                .phones
                .rekey(&current.phone, updated.phone.clone(), id)?;
        }

        inner.unindex_entries(&current);
        inner.index_entries(&updated);
        debug!(id = %id, phone = %updated.phone, "contact updated");
        inner.records.put(updated);
        Ok(())
    }

    /// Delete the contact holding the given phone number
    ///
    /// Removes the record and every index entry it contributed; emptied
    /// index buckets are pruned.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` — malformed phone number
    /// - `Error::PhoneNotFound` — no live contact holds the number
    pub fn delete(&self, phone: &str) -> Result<()> {
        let phone = PhoneNumber::new(phone).map_err(ValidationError::from)?;

        let mut inner = self.inner.write();
        let id = inner
            .phones
            .get(&phone)
            .ok_or_else(|| Error::PhoneNotFound(phone.clone()))?;
        let Some(contact) = inner.records.remove(&id) else {
            // Unreachable while the phone index is consistent with the store.
            return Err(Error::ContactNotFound(id));
        };

        inner.unindex_entries(&contact);
        inner.phones.remove(&contact.phone);
        debug!(id = %id, phone = %contact.phone, "contact deleted");
        Ok(())
    }

    // ========== Lookups ==========

    /// Exact phone number lookup
    ///
    /// A malformed phone number matches nothing.
    pub fn lookup_by_phone(&self, phone: &str) -> Option<Contact> {
        let phone = PhoneNumber::new(phone).ok()?;
        let inner = self.inner.read();
        let id = inner.phones.get(&phone)?;
        inner.records.get(&id).cloned()
    }

    /// Name lookup: AND-match when both fields are given, either-position
    /// match when one is given
    ///
    /// # Errors
    ///
    /// `Error::InvalidQuery` when both fields are absent or blank.
    pub fn lookup_by_name(&self, first: Option<&str>, last: Option<&str>) -> Result<Vec<Contact>> {
        let inner = self.inner.read();
        let ids = inner.names.lookup(first, last)?;
        Ok(inner.materialize(ids))
    }

    /// All contacts whose address city matches (case-normalized, exact)
    pub fn lookup_by_city(&self, city: &str) -> Vec<Contact> {
        let inner = self.inner.read();
        let ids = inner.cities.lookup(city);
        inner.materialize(ids)
    }

    /// All contacts that contributed the value as a complete token
    ///
    /// Tokens are the contact's names, phone number, and parsed address
    /// fields; partial values never match.
    pub fn lookup_by_token(&self, token: &str) -> Vec<Contact> {
        let inner = self.inner.read();
        let ids = inner.tokens.lookup(token);
        inner.materialize(ids)
    }

    /// All contacts whose phone number starts with the given digits
    ///
    /// # Errors
    ///
    /// `Error::InvalidQuery` unless the prefix is 1 to 10 digits.
    pub fn lookup_by_prefix(&self, prefix: &str) -> Result<Vec<Contact>> {
        let inner = self.inner.read();
        let ids = inner.prefixes.lookup(prefix)?;
        Ok(inner.materialize(ids))
    }

    // ========== Housekeeping ==========

    /// Number of live contacts
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

fn validate_name(name: &str, cause: ValidationError) -> Result<()> {
    if name.trim().is_empty() {
        return Err(cause.into());
    }
    Ok(())
}
