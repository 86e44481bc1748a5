//! Partial update description for contacts
//!
//! A `ContactPatch` names the fields an update should change; everything
//! it does not name is left alone. The address is three-valued: leave it,
//! set it, or clear it.

/// What to do with the optional address on update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddressPatch {
    /// Leave the address as it is
    #[default]
    Keep,
    /// Replace the address with the given string
    Set(String),
    /// Remove the address from the contact
    Clear,
}

/// A partial update to a contact
///
/// Built with chained setters; unset fields are untouched by `update`.
///
/// # Example
///
/// ```
/// use rolodex_engine::ContactPatch;
///
/// let patch = ContactPatch::new()
///     .first_name("Augusta")
///     .phone("5550000000");
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    /// New first name, if changing
    pub first_name: Option<String>,
    /// New last name, if changing
    pub last_name: Option<String>,
    /// New phone number (unvalidated digits), if changing
    pub phone: Option<String>,
    /// Address change, if any
    pub address: AddressPatch,
}

impl ContactPatch {
    /// Create an empty patch that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new first name
    pub fn first_name(mut self, first: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self
    }

    /// Set a new last name
    pub fn last_name(mut self, last: impl Into<String>) -> Self {
        self.last_name = Some(last.into());
        self
    }

    /// Set a new phone number
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set a new address string
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = AddressPatch::Set(address.into());
        self
    }

    /// Remove the contact's address
    pub fn clear_address(mut self) -> Self {
        self.address = AddressPatch::Clear;
        self
    }

    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.address == AddressPatch::Keep
    }
}
