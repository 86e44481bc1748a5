//! Phone prefix trie
//!
//! A ten-way trie over phone number digits. Every node on a number's path
//! is annotated with the ids of all contacts whose numbers pass through
//! it, so a prefix lookup is a walk of len(prefix) nodes followed by one
//! set clone — no subtree traversal.
//!
//! Removal deletes the id from each node on the path and prunes any child
//! whose annotation set becomes empty; the annotation invariant (a node's
//! set is the union of its subtree's numbers) means an empty set has an
//! empty subtree.

use rolodex_core::{ContactId, Error, PhoneNumber, Result, PHONE_NUMBER_LEN};
use rustc_hash::FxHashSet;

/// Number of children per node, one per decimal digit
const RADIX: usize = 10;

#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; RADIX],
    /// Contacts whose phone number passes through this node
    ids: FxHashSet<ContactId>,
}

/// Prefix index over phone numbers
#[derive(Debug, Default)]
pub struct PhoneTrie {
    root: TrieNode,
}

impl PhoneTrie {
    /// Create a new empty PhoneTrie
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
        }
    }

    /// Index a contact's phone number
    pub fn insert(&mut self, phone: &PhoneNumber, id: ContactId) {
        let mut node = &mut self.root;
        for digit in phone.digits() {
            node = node.children[digit].get_or_insert_with(Box::default);
            node.ids.insert(id);
        }
    }

    /// Remove a contact's phone number, pruning emptied subtrees
    pub fn remove(&mut self, phone: &PhoneNumber, id: &ContactId) {
        let digits: Vec<usize> = phone.digits().collect();
        Self::remove_path(&mut self.root, &digits, id);
    }

    fn remove_path(node: &mut TrieNode, digits: &[usize], id: &ContactId) {
        let Some((&digit, rest)) = digits.split_first() else {
            return;
        };
        if let Some(child) = node.children[digit].as_deref_mut() {
            child.ids.remove(id);
            if child.ids.is_empty() {
                node.children[digit] = None;
            } else {
                Self::remove_path(child, rest, id);
            }
        }
    }

    /// All contacts whose phone number starts with `prefix`
    ///
    /// # Errors
    ///
    /// `Error::InvalidQuery` unless the prefix is 1 to 10 digits.
    pub fn lookup(&self, prefix: &str) -> Result<FxHashSet<ContactId>> {
        if prefix.is_empty() || prefix.len() > PHONE_NUMBER_LEN {
            return Err(Error::InvalidQuery(format!(
                "prefix must be 1 to {} digits, got {} characters",
                PHONE_NUMBER_LEN,
                prefix.len()
            )));
        }
        if let Some(ch) = prefix.chars().find(|c| !c.is_ascii_digit()) {
            return Err(Error::InvalidQuery(format!(
                "prefix must contain only digits, got '{}'",
                ch
            )));
        }

        let mut node = &self.root;
        for digit in prefix.bytes().map(|b| (b - b'0') as usize) {
            match node.children[digit].as_deref() {
                Some(child) => node = child,
                None => return Ok(FxHashSet::default()),
            }
        }
        Ok(node.ids.clone())
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.root.children.iter().all(|c| c.is_none())
    }
}
