//! Data models for the contact book.
//!
//! This module contains the contact record and the ordered collection that
//! gives each stored record its identity.

pub mod collection;
pub mod contact;

pub use collection::{ContactCollection, ContactEntry};
pub use contact::Contact;
