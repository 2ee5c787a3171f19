//! Domain value objects and types.
//!
//! This module contains the small typed building blocks shared by every layer:
//! the closed field set, entry identity handles and validation errors.

pub mod contact_id;
pub mod errors;
pub mod field;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use field::Field;
