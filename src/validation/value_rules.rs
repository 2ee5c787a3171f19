//! Reusable string checks.
//!
//! Each check returns `Ok(())` when the value passes and a [`ValidationError`]
//! naming the offending field otherwise. Lengths are counted in Unicode scalar
//! values, not bytes.

use crate::domain::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

const CHARACTERS: &str = "characters";
const DIGITS: &str = "digits";

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit regex"));

/// Check that `value` is at most `max` characters long.
pub fn assert_max_length(value: &str, max: usize, field: Field) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field,
            max,
            unit: CHARACTERS,
        });
    }
    Ok(())
}

/// Check that the character count of `value` lies in `[min, max]`.
pub fn assert_length_range(
    value: &str,
    min: usize,
    max: usize,
    field: Field,
) -> Result<(), ValidationError> {
    check_count(value.chars().count(), min, max, field, CHARACTERS)
}

/// Check that the number of digits in `value` lies in `[min, max]`.
///
/// Separators and other non-digit characters are ignored.
pub fn assert_digit_count(
    value: &str,
    min: usize,
    max: usize,
    field: Field,
) -> Result<(), ValidationError> {
    let digits: usize = DIGIT_RUN
        .find_iter(value)
        .map(|run| run.as_str().chars().count())
        .sum();
    check_count(digits, min, max, field, DIGITS)
}

/// Check that `regex` matches `value`.
///
/// Anchoring is the caller's business: pass an `^...$` pattern for a
/// full-string match.
pub fn assert_regex(
    value: &str,
    regex: &Regex,
    pattern: &'static str,
    field: Field,
) -> Result<(), ValidationError> {
    if !regex.is_match(value) {
        return Err(ValidationError::PatternMismatch { field, pattern });
    }
    Ok(())
}

fn check_count(
    count: usize,
    min: usize,
    max: usize,
    field: Field,
    unit: &'static str,
) -> Result<(), ValidationError> {
    if count > max {
        Err(ValidationError::TooLong { field, max, unit })
    } else if count < min {
        Err(ValidationError::TooShort { field, min, unit })
    } else {
        Ok(())
    }
}
