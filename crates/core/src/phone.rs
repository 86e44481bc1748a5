//! Phone number type
//!
//! Phone numbers are the natural external key for the directory: unique
//! across live contacts and the argument of delete and exact lookup.
//!
//! ## Validation
//!
//! A phone number must be exactly ten ASCII digits, nothing else. The
//! `PhoneNumber` newtype makes an invalid number unrepresentable past the
//! construction boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact number of digits in a phone number
pub const PHONE_NUMBER_LEN: usize = 10;

/// A validated ten-digit phone number
///
/// ## Validation Rules
///
/// - Length: exactly 10 characters
/// - Characters: ASCII digits only, no separators or punctuation
///
/// ## Examples
///
/// Valid: "5551234567"
///
/// Invalid:
/// - "" (empty)
/// - "555123" (too short)
/// - "555-123-4567" (separators)
/// - "555123456x" (non-digit)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhoneNumber(String);

/// Error when validating a phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// Number is empty
    Empty,
    /// Number is not exactly ten characters
    WrongLength {
        /// Actual length of the input
        length: usize,
    },
    /// Number contains a non-digit character
    InvalidDigit {
        /// The invalid character
        char: char,
        /// Position of the invalid character
        position: usize,
    },
}

impl fmt::Display for PhoneNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneNumberError::Empty => write!(f, "phone number cannot be empty"),
            PhoneNumberError::WrongLength { length } => {
                write!(
                    f,
                    "phone number must be exactly {} digits, got {}",
                    PHONE_NUMBER_LEN, length
                )
            }
            PhoneNumberError::InvalidDigit { char, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (digits only)",
                    char, position
                )
            }
        }
    }
}

impl std::error::Error for PhoneNumberError {}

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the input
    ///
    /// # Errors
    ///
    /// Returns `PhoneNumberError` if the input is not exactly ten ASCII digits.
    pub fn new(number: impl Into<String>) -> Result<Self, PhoneNumberError> {
        let number = number.into();
        Self::validate(&number)?;
        Ok(PhoneNumber(number))
    }

    /// Create a PhoneNumber without validation
    ///
    /// # Safety
    ///
    /// The caller must ensure the number is valid. Use `new()` for untrusted input.
    pub fn new_unchecked(number: impl Into<String>) -> Self {
        PhoneNumber(number.into())
    }

    /// Validate a phone number string
    pub fn validate(number: &str) -> Result<(), PhoneNumberError> {
        if number.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        if number.len() != PHONE_NUMBER_LEN {
            return Err(PhoneNumberError::WrongLength {
                length: number.len(),
            });
        }

        for (pos, ch) in number.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(PhoneNumberError::InvalidDigit {
                    char: ch,
                    position: pos,
                });
            }
        }

        Ok(())
    }

    /// Get the number as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Iterate the number as digit values 0-9
    ///
    /// Infallible: construction guarantees every byte is an ASCII digit.
    pub fn digits(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.bytes().map(|b| (b - b'0') as usize)
    }

    /// Check whether this number starts with the given digit prefix
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PhoneNumber::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PhoneNumber::new(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
