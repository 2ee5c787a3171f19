//! ContactId handle.

use std::fmt;

/// Identity of an entry stored in a [`crate::models::ContactCollection`].
///
/// Ids are handed out by the collection when an entry is loaded or appended.
/// They are never persisted and never reused within a session, so two contacts
/// with identical field values stay distinct entities.
///
/// # Example
///
/// ```
/// use contact_book::models::{Contact, ContactCollection};
///
/// let mut contacts = ContactCollection::new();
/// let a = contacts.push(Contact::new("Ann", "", ""));
/// let b = contacts.push(Contact::new("Ann", "", ""));
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(u64);

impl ContactId {
    /// Wrap a raw id value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
