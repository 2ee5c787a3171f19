//! Contact Book - a single-user contact list with add, edit and remove.
//!
//! Contacts (name, phone number, email) are kept in one JSON file and edited
//! through a copy-on-edit session that validates every field as it is typed.
//!
//! # Architecture
//!
//! - **domain**: Field set, entry identity and validation errors
//! - **models**: The contact record and the ordered, identity-carrying collection
//! - **validation**: Per-field rules producing human-readable messages
//! - **matching**: Substring search over name and phone number
//! - **repositories**: The `ContactStore` seam and its JSON file implementation
//! - **services**: The edit session state machine and its change stream
//! - **shell**: Line-oriented commands over the session
//! - **observability**: Store activity counters
//! - **config**: Configuration from environment variables
//! - **error**: Error types for each layer

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;
pub mod shell;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactId, Field, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StoreError};
pub use models::{Contact, ContactCollection, ContactEntry};
pub use repositories::{ContactStore, JsonFileStore, LoadReport, LoadStatus};
pub use services::{ApplyPolicy, EditSession, Mode, SessionEvent, SessionOptions};
