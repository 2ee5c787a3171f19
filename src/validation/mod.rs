//! Field validation.
//!
//! Validation never fails loudly: [`validate`] maps a field value to a message,
//! empty when the value is valid. [`check`] is the typed form.

pub mod contact_rules;
pub mod value_rules;

pub use contact_rules::{check, validate};
