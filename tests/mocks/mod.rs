//! Test doubles shared by the integration tests.

mod mock_contact_store;

pub use mock_contact_store::MockContactStore;
