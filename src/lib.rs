//! Rolodex - in-memory contact directory with multi-index lookup
//!
//! Rolodex keeps a canonical record store and five secondary indexes
//! (phone, name, city, whole-value token, phone-prefix trie) consistent
//! under create, update, and delete, and answers six query shapes without
//! scanning the directory.
//!
//! # Quick Start
//!
//! ```
//! use rolodex::{Directory, ContactPatch};
//!
//! let directory = Directory::new();
//!
//! let id = directory.create(
//!     "Ada",
//!     "Lovelace",
//!     "5551234567",
//!     Some("1 Main St, Springfield, IL, 62701, USA"),
//! )?;
//!
//! // Exact and partial lookups
//! assert!(directory.lookup_by_phone("5551234567").is_some());
//! assert_eq!(directory.lookup_by_city("Springfield").len(), 1);
//! assert_eq!(directory.lookup_by_token("IL").len(), 1);
//! assert_eq!(directory.lookup_by_prefix("555")?.len(), 1);
//!
//! // Partial update
//! directory.update(id, ContactPatch::new().phone("5550000000"))?;
//! assert!(directory.lookup_by_phone("5551234567").is_none());
//! # Ok::<(), rolodex::Error>(())
//! ```
//!
//! # Architecture
//!
//! Persistence, serialization, and transport are the embedding caller's
//! concern; the engine exposes a synchronous library API and nothing
//! else. Internal layering (core types, storage structures, engine) is
//! not exposed — construct a [`Directory`] and use its methods.

pub use rolodex_core::{
    Address, AddressError, Contact, ContactId, Error, PhoneNumber, PhoneNumberError, Result,
    ValidationError,
};
pub use rolodex_engine::{AddressPatch, ContactPatch, Directory};
