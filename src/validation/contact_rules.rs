//! Per-field contact rules.
//!
//! | Field       | Rule                                                      |
//! |-------------|-----------------------------------------------------------|
//! | name        | at most 100 characters                                    |
//! | phoneNumber | 2 to 15 digits, then a full match of [`PHONE_NUMBER_PATTERN`] |
//! | email       | 6 to 100 characters, then a full match of [`EMAIL_PATTERN`]   |
//!
//! Both entry points are pure: they touch no session state and can be called
//! from anywhere.

use super::value_rules::{assert_digit_count, assert_length_range, assert_max_length, assert_regex};
use crate::domain::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters in a name.
pub const NAME_MAX_LENGTH: usize = 100;

/// Minimum number of digits in a phone number.
pub const PHONE_NUMBER_MIN_DIGITS: usize = 2;

/// Maximum number of digits in a phone number.
pub const PHONE_NUMBER_MAX_DIGITS: usize = 15;

/// Minimum number of characters in an email.
pub const EMAIL_MIN_LENGTH: usize = 6;

/// Maximum number of characters in an email.
pub const EMAIL_MAX_LENGTH: usize = 100;

/// Optional `+`, 1-3 country digits, optional parenthesized area code and
/// space, dash or dot separators.
pub const PHONE_NUMBER_PATTERN: &str =
    r"^\+?\d{1,3}\s?\(?\d{3}\)?\s?\d{3}[-\s\.]?\d{2}[-\s\.]?\d{2}$";

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_NUMBER_PATTERN).expect("Failed to compile phone number regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

/// Check a field value, returning the first rule it breaks.
pub fn check(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => assert_max_length(value, NAME_MAX_LENGTH, field),
        Field::PhoneNumber => {
            assert_digit_count(
                value,
                PHONE_NUMBER_MIN_DIGITS,
                PHONE_NUMBER_MAX_DIGITS,
                field,
            )?;
            assert_regex(value, &PHONE_NUMBER_REGEX, PHONE_NUMBER_PATTERN, field)
        }
        Field::Email => {
            assert_length_range(value, EMAIL_MIN_LENGTH, EMAIL_MAX_LENGTH, field)?;
            assert_regex(value, &EMAIL_REGEX, EMAIL_PATTERN, field)
        }
    }
}

/// Validate a field value.
///
/// Returns an empty string when the value is valid and a human-readable
/// message otherwise.
pub fn validate(field: Field, value: &str) -> String {
    match check(field, value) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}
