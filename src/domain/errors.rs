//! Domain validation errors.

use super::field::Field;
use std::fmt;

/// A field value broke one of the contact rules.
///
/// The `Display` output is the user-facing message stored in the session's
/// error map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is longer than allowed.
    TooLong {
        field: Field,
        max: usize,
        unit: &'static str,
    },

    /// The value is shorter than allowed.
    TooShort {
        field: Field,
        min: usize,
        unit: &'static str,
    },

    /// The value does not fully match the field's pattern.
    PatternMismatch { field: Field, pattern: &'static str },

    /// The field name is not one of name, phoneNumber, email.
    UnknownField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { field, max, unit } => {
                write!(f, "{} must be less than {} {}.", field.label(), max, unit)
            }
            Self::TooShort { field, min, unit } => {
                write!(f, "{} must be at least {} {}.", field.label(), min, unit)
            }
            Self::PatternMismatch { field, pattern } => write!(
                f,
                "{} must match the following regex: \"{}\".",
                field.label(),
                pattern
            ),
            Self::UnknownField(name) => write!(f, "Unknown contact field: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}
