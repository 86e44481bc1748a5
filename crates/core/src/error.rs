//! Error types for the directory engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Four failure kinds cross the engine boundary: validation of a required
//! field, phone uniqueness conflict, not-found (by id or by phone), and a
//! query whose preconditions are unmet. Empty result sets are never errors;
//! callers can always tell "no results" from "bad query".

use crate::phone::{PhoneNumber, PhoneNumberError};
use crate::types::ContactId;
use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the directory engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Phone uniqueness violated on create or update
    #[error("phone number {0} is already in use")]
    PhoneInUse(PhoneNumber),

    /// Operation targeted an id with no live record
    #[error("no contact with id {0}")]
    ContactNotFound(ContactId),

    /// Operation targeted a phone number with no live record
    #[error("no contact with phone number {0}")]
    PhoneNotFound(PhoneNumber),

    /// Query preconditions unmet
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl Error {
    /// True for either not-found variant (unknown id or unknown phone)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ContactNotFound(_) | Error::PhoneNotFound(_))
    }
}

/// Cause of a field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First name empty or whitespace-only
    #[error("first name cannot be empty")]
    EmptyFirstName,

    /// Last name empty or whitespace-only
    #[error("last name cannot be empty")]
    EmptyLastName,

    /// Phone number malformed
    #[error(transparent)]
    Phone(#[from] PhoneNumberError),
}
