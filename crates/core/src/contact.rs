//! Contact record and address parsing
//!
//! A contact is the sole entity in the directory: required first/last name,
//! a unique ten-digit phone number, and an optional postal address.
//!
//! The address is stored as the raw string the caller supplied. `Address`
//! is the parsed five-field view of that string, produced at index time;
//! a malformed address stays on the record and simply contributes no
//! city or address-field index entries.

use crate::phone::PhoneNumber;
use crate::types::ContactId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of comma-separated fields in a well-formed address
pub const ADDRESS_FIELD_COUNT: usize = 5;

/// Error when parsing an address string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Wrong number of comma-separated fields
    #[error("address must have {ADDRESS_FIELD_COUNT} comma-separated fields, found {found}")]
    FieldCount {
        /// Number of fields found in the input
        found: usize,
    },
}

/// Parsed view of an address string
///
/// Format: `street, city, state/province, zip, country`. Fields are
/// trimmed of surrounding whitespace; beyond that they are free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street address, e.g. "1 Main St"
    pub street: String,
    /// City name
    pub city: String,
    /// State or province
    pub state: String,
    /// Zip or postal code
    pub postcode: String,
    /// Country name
    pub country: String,
}

impl Address {
    /// Parse an address from its comma-delimited form
    ///
    /// Splits on commas and trims each field. Exactly five fields are
    /// required; empty fields are allowed.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::FieldCount` on the wrong number of fields.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let split: Vec<&str> = s.split(',').collect();

        if split.len() != ADDRESS_FIELD_COUNT {
            return Err(AddressError::FieldCount { found: split.len() });
        }

        Ok(Address {
            street: split[0].trim().to_string(),
            city: split[1].trim().to_string(),
            state: split[2].trim().to_string(),
            postcode: split[3].trim().to_string(),
            country: split[4].trim().to_string(),
        })
    }

    /// The five fields in address order
    ///
    /// Used by token indexing, which contributes each field as a
    /// whole-value token.
    pub fn fields(&self) -> [&str; ADDRESS_FIELD_COUNT] {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postcode,
            &self.country,
        ]
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}",
            self.street, self.city, self.state, self.postcode, self.country
        )
    }
}

/// One directory entry
///
/// The record store owns contacts; every index holds only the `id`.
/// Equality covers all fields — two contacts with the same phone number
/// but different names are NOT equal (uniqueness is the phone index's
/// concern, not the record's).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable identifier, assigned at creation and never reused
    pub id: ContactId,
    /// First name, non-empty
    pub first_name: String,
    /// Last name, non-empty
    pub last_name: String,
    /// Unique ten-digit phone number
    pub phone: PhoneNumber,
    /// Raw address string as supplied by the caller, if any
    pub address: Option<String>,
}

impl Contact {
    /// Parsed view of the address, if present and well-formed
    pub fn parsed_address(&self) -> Option<Address> {
        self.address.as_deref().and_then(|s| Address::parse(s).ok())
    }
}

// ============================================================================
// Tests
// ============================================================================
