//! The fixed set of editable contact fields.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three contact fields.
///
/// The set is closed: validation, error tracking and change notification all
/// enumerate [`Field::ALL`] instead of discovering fields at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    PhoneNumber,
    Email,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::PhoneNumber, Field::Email];

    /// Key used in the error map and the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::PhoneNumber => "Phone number",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    /// Accepts the canonical keys plus a few shell-friendly spellings,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "phonenumber" | "phone_number" | "phone" => Ok(Field::PhoneNumber),
            "email" | "mail" => Ok(Field::Email),
            _ => Err(ValidationError::UnknownField(s.to_string())),
        }
    }
}
