pub mod document;
mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, CONTACTS_DIR_NAME, CONTACTS_FILE_NAME};
pub use traits::{ContactStore, LoadReport, LoadStatus, DATA_RESET_NOTICE};
