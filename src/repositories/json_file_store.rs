use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::observability::StoreMetrics;
use crate::repositories::document;
use crate::repositories::traits::{ContactStore, LoadReport};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Directory under the user's documents folder that holds the contact file.
pub const CONTACTS_DIR_NAME: &str = "Contacts";

/// Name of the contact file.
pub const CONTACTS_FILE_NAME: &str = "Contact.json";

/// Contact store backed by a single JSON file.
///
/// The parent directory is created on demand right before each read or write,
/// never at construction. Saves go through a temporary sibling file that is
/// renamed over the target, so a failed write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    metrics: StoreMetrics,
}

impl JsonFileStore {
    /// Create a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            metrics: StoreMetrics::new(),
        }
    }

    /// Create a store at the platform default location,
    /// `<documents>/Contacts/Contact.json`.
    pub fn at_default_location() -> StoreResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// The platform default contact file path.
    ///
    /// Falls back to `<home>/Documents` when the platform reports no documents
    /// directory.
    pub fn default_path() -> StoreResult<PathBuf> {
        let documents = dirs::document_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
            .ok_or(StoreError::NoDocumentsDir)?;
        Ok(documents.join(CONTACTS_DIR_NAME).join(CONTACTS_FILE_NAME))
    }

    /// Path of the contact file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store activity counters.
    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// `<file name>.corrupt-<UTC timestamp>` next to the contact file.
    fn backup_path(&self, now: chrono::DateTime<chrono::Utc>) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| CONTACTS_FILE_NAME.to_string());
        let stamp = now.format("%Y%m%dT%H%M%S%.3fZ");
        self.path
            .with_file_name(format!("{}.corrupt-{}", file_name, stamp))
    }

    /// First backup path for `now` that does not exist yet; a numeric suffix
    /// is appended on collision.
    async fn free_backup_path(&self, now: chrono::DateTime<chrono::Utc>) -> PathBuf {
        let base = self.backup_path(now);
        let mut candidate = base.clone();
        let mut n = 1;
        while tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            let mut name = base.as_os_str().to_owned();
            name.push(format!("-{}", n));
            candidate = PathBuf::from(name);
            n += 1;
        }
        candidate
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    async fn ensure_parent_dir(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::io(parent, e))?;
            }
        }
        Ok(())
    }

    async fn read_report(&self) -> LoadReport {
        if let Err(e) = self.ensure_parent_dir().await {
            warn!(error = %e, "Contact directory unavailable, starting empty");
            return LoadReport::reset(e.to_string());
        }

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No contact file yet");
                return LoadReport::missing();
            }
            Err(e) => {
                let err = StoreError::io(&self.path, e);
                warn!(error = %err, "Contact file unreadable, starting empty");
                return LoadReport::reset(err.to_string());
            }
        };

        match document::decode(&bytes) {
            Ok(contacts) => {
                info!(
                    path = %self.path.display(),
                    count = contacts.len(),
                    "Loaded contacts"
                );
                LoadReport::loaded(contacts)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Contact file corrupted, starting empty");
                self.move_corrupt_file_aside().await;
                LoadReport::reset(e.to_string())
            }
        }
    }

    /// Keep the unparseable file next to the target instead of overwriting it
    /// on the next save. Best effort: failures are only logged.
    async fn move_corrupt_file_aside(&self) {
        let backup = self.free_backup_path(chrono::Utc::now()).await;

        match tokio::fs::rename(&self.path, &backup).await {
            Ok(()) => info!(backup = %backup.display(), "Moved corrupted contact file aside"),
            Err(e) => warn!(error = %e, "Failed to move corrupted contact file aside"),
        }
    }

    async fn write_atomically(&self, contacts: &[Contact]) -> StoreResult<()> {
        let json = document::encode(contacts)?;
        self.ensure_parent_dir().await?;

        let temp = self.temp_path();
        if let Err(e) = tokio::fs::write(&temp, json.as_bytes()).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(StoreError::io(&temp, e));
        }

        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(StoreError::io(&self.path, e));
        }

        Ok(())
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    async fn load(&self) -> LoadReport {
        let report = self.read_report().await;
        self.metrics
            .track_load(report.contacts.len(), report.notice().is_some());
        report
    }

    async fn save(&self, contacts: &[Contact]) -> StoreResult<()> {
        let started = Instant::now();
        let result = self.write_atomically(contacts).await;
        self.metrics.track_save(
            contacts.len(),
            started.elapsed().as_millis(),
            result.is_ok(),
        );

        match &result {
            Ok(()) => info!(
                path = %self.path.display(),
                count = contacts.len(),
                "Saved contacts"
            ),
            Err(e) => warn!(error = %e, "Failed to save contacts"),
        }

        result
    }
}
