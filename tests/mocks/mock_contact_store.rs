use async_trait::async_trait;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Contact;
use contact_book::repositories::{ContactStore, LoadReport};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Provides an in-memory implementation of ContactStore that can be seeded
/// with a load result, made to fail on save, and tracks method calls for
/// verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    load_report: Arc<Mutex<LoadReport>>,
    saved: Arc<Mutex<Vec<Vec<Contact>>>>,
    fail_saves: Arc<AtomicBool>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a store whose load returns no contacts and no notice.
    pub fn new() -> Self {
        Self::with_report(LoadReport::missing())
    }

    /// Create a store whose load returns the given contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self::with_report(LoadReport::loaded(contacts))
    }

    /// Create a store whose load returns the given report.
    pub fn with_report(report: LoadReport) -> Self {
        Self {
            load_report: Arc::new(Mutex::new(report)),
            saved: Arc::new(Mutex::new(Vec::new())),
            fail_saves: Arc::new(AtomicBool::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Contacts passed to the most recent successful save.
    pub fn last_saved(&self) -> Option<Vec<Contact>> {
        self.saved.lock().unwrap().last().cloned()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn load(&self) -> LoadReport {
        self.track_call("load");
        self.load_report.lock().unwrap().clone()
    }

    async fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        self.track_call("save");

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::io(
                "mock/Contact.json",
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume"),
            ));
        }

        self.saved.lock().unwrap().push(contacts.to_vec());
        Ok(())
    }
}
