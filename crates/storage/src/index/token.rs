//! Whole-value token index
//!
//! Every contact contributes a set of normalized whole-value tokens: first
//! name, last name, the full phone number, and each of the five address
//! fields when the address parses. A lookup matches a complete token only —
//! "il" finds a contact whose state is "IL", "spring" does not find
//! "Springfield".
//!
//! Tokenizing at write time makes lookup O(1) against O(n · fields) for a
//! scan; lookups are the hot path for a directory.

use crate::normalize::normalize;
use rolodex_core::{Contact, ContactId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Secondary index: token → ContactIds
#[derive(Debug, Default)]
pub struct TokenIndex {
    index: FxHashMap<String, FxHashSet<ContactId>>,
}

impl TokenIndex {
    /// Create a new empty TokenIndex
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
        }
    }

    /// Add a contact under one token
    pub fn insert(&mut self, token: &str, id: ContactId) {
        let key = normalize(token);
        if key.is_empty() {
            return;
        }
        self.index.entry(key).or_default().insert(id);
    }

    /// Remove a contact from one token's bucket, pruning it when empty
    pub fn remove(&mut self, token: &str, id: &ContactId) {
        let key = normalize(token);
        if let Some(ids) = self.index.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.index.remove(&key);
            }
        }
    }

    /// All contacts that contributed the given value as a complete token
    pub fn lookup(&self, token: &str) -> FxHashSet<ContactId> {
        self.index
            .get(&normalize(token))
            .cloned()
            .unwrap_or_default()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct tokens in the index
    pub fn len(&self) -> usize {
        self.index.len()
    }
}

/// The normalized token set a contact contributes to the index
///
/// Names and the phone number always contribute; the five address fields
/// contribute only when the address string parses. Duplicate values (say a
/// city equal to a last name) collapse into one token.
pub fn contact_tokens(contact: &Contact) -> FxHashSet<String> {
    let mut tokens = FxHashSet::default();
    tokens.insert(normalize(&contact.first_name));
    tokens.insert(normalize(&contact.last_name));
    tokens.insert(contact.phone.as_str().to_string());

    if let Some(address) = contact.parsed_address() {
        for field in address.fields() {
            let token = normalize(field);
            if !token.is_empty() {
                tokens.insert(token);
            }
        }
    }

    tokens
}
