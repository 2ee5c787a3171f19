//! Contact model representing one entry of the contact book.

use crate::domain::Field;
use serde::{Deserialize, Serialize};

/// A contact record: name, phone number and email.
///
/// `Contact` is a plain value. `Clone` yields a fully independent copy, which is
/// what the edit session relies on for copy-on-edit. Identity lives outside the
/// record, in [`crate::models::ContactEntry`].
///
/// Fields are only written through [`Contact::set`], which reports whether the
/// value actually changed so the owner can emit a change notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Display name
    name: String,

    /// Phone number as typed by the user
    phone_number: String,

    /// Email address
    email: String,
}

impl Contact {
    /// Create a contact with the given field values.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get a field value by field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        }
    }

    /// Write a field value.
    ///
    /// Returns `false` and leaves the record untouched when the new value equals
    /// the current one.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = match field {
            Field::Name => &mut self.name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
        };

        if *slot == value {
            return false;
        }

        *slot = value;
        true
    }

    /// Overwrite every field with the values of `other`.
    ///
    /// Returns the fields that changed.
    pub fn assign_from(&mut self, other: &Contact) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.set(*field, other.get(*field)))
            .collect()
    }
}
