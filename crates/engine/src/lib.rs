//! Directory engine for the Rolodex contact directory
//!
//! This crate provides the `Directory` orchestrator: validation, phone
//! uniqueness enforcement, atomic multi-index mutation under a single
//! lock, and the six lookup shapes (phone, name, city, token, prefix,
//! and id resolution through the record store).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod directory;
pub mod patch;

pub use directory::Directory;
pub use patch::{AddressPatch, ContactPatch};

// Re-export the core types that appear in the public API
pub use rolodex_core::{
    Address, AddressError, Contact, ContactId, Error, PhoneNumber, PhoneNumberError, Result,
    ValidationError,
};
