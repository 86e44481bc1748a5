//! Core types for the Rolodex contact directory
//!
//! This crate defines the foundational types used throughout the system:
//! - ContactId: Stable unique identifier for contacts
//! - PhoneNumber: Validated ten-digit phone number
//! - Contact / Address: The directory record and its parsed address view
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod error;
pub mod phone;
pub mod types;

// Re-export commonly used types at the crate root
pub use contact::{Address, AddressError, Contact, ADDRESS_FIELD_COUNT};
pub use error::{Error, Result, ValidationError};
pub use phone::{PhoneNumber, PhoneNumberError, PHONE_NUMBER_LEN};
pub use types::ContactId;
