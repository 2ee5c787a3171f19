use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// User-facing notice shown when stored data had to be discarded.
pub const DATA_RESET_NOTICE: &str = "Data is corrupted.\nSave files have been cleared.";

/// How a load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The stored collection was read successfully (possibly empty).
    Loaded,

    /// No contact file exists yet.
    Missing,

    /// The file could not be read or parsed; an empty collection was used.
    Reset { reason: String },
}

/// Result of [`ContactStore::load`]: always a usable collection, plus how it
/// was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub contacts: Vec<Contact>,
    pub status: LoadStatus,
}

impl LoadReport {
    pub fn loaded(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            status: LoadStatus::Loaded,
        }
    }

    pub fn missing() -> Self {
        Self {
            contacts: Vec::new(),
            status: LoadStatus::Missing,
        }
    }

    pub fn reset(reason: impl Into<String>) -> Self {
        Self {
            contacts: Vec::new(),
            status: LoadStatus::Reset {
                reason: reason.into(),
            },
        }
    }

    /// The notice to show the user, if this load discarded data.
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            LoadStatus::Reset { .. } => Some(DATA_RESET_NOTICE),
            LoadStatus::Loaded | LoadStatus::Missing => None,
        }
    }
}

/// Durable storage for the whole contact collection.
///
/// Implementations never fail a load: unreadable or corrupted data degrades to
/// an empty collection reported through [`LoadStatus::Reset`]. Write failures
/// are returned to the caller.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Load the stored collection.
    async fn load(&self) -> LoadReport;

    /// Replace the stored collection with `contacts`.
    async fn save(&self, contacts: &[Contact]) -> StoreResult<()>;
}
