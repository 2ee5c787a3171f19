//! Contact editing state machine.
//!
//! The session owns the contact collection, the current selection, the working
//! copy of the contact being edited and the per-field error map. It runs
//! validation on every field write and persists the collection through the
//! injected [`ContactStore`] after each committed change.
//!
//! Mutating operations take `&mut self`, so two of them can never interleave:
//! a save in flight always sees a fully updated collection.

use super::events::{Mode, SessionEvent};
use super::options::{ApplyPolicy, SessionOptions};
use crate::domain::{ContactId, Field};
use crate::error::{SessionError, SessionResult};
use crate::matching::SearchFilter;
use crate::models::{Contact, ContactCollection, ContactEntry};
use crate::repositories::{ContactStore, LoadStatus};
use crate::validation;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// The add/edit/apply/cancel lifecycle over a contact collection.
pub struct EditSession {
    store: Arc<dyn ContactStore>,
    options: SessionOptions,
    contacts: ContactCollection,

    /// Selected stored entry. `None` before the first selection and while a new
    /// contact is being added.
    current: Option<ContactId>,

    /// Copy being typed into. `Some` exactly when `mode` is `Editing`; never
    /// shares storage with an entry of `contacts`.
    working: Option<Contact>,

    /// Entry replaced on Apply; `None` appends the working copy instead.
    editing_index: Option<usize>,

    mode: Mode,
    errors: BTreeMap<Field, String>,
    search_text: String,
    load_notice: Option<String>,
    events: broadcast::Sender<SessionEvent>,
}

impl EditSession {
    /// Load the collection from `store` and start in `Selecting` mode with
    /// nothing selected.
    pub async fn load(store: Arc<dyn ContactStore>, options: SessionOptions) -> Self {
        let report = store.load().await;

        if let LoadStatus::Reset { reason } = &report.status {
            warn!(reason = %reason, "Stored contacts discarded");
        }

        let load_notice = report.notice().map(str::to_string);
        let contacts = ContactCollection::from_contacts(report.contacts);
        let (events, _) = broadcast::channel(options.event_capacity.max(1));
        let errors = Field::ALL
            .into_iter()
            .map(|field| (field, String::new()))
            .collect();

        debug!(count = contacts.len(), "Edit session ready");

        Self {
            store,
            options,
            contacts,
            current: None,
            working: None,
            editing_index: None,
            mode: Mode::Selecting,
            errors,
            search_text: String::new(),
            load_notice,
            events,
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// The "data corrupted, reset" notice from the initial load.
    ///
    /// Returns it once; later calls return `None`.
    pub fn take_load_notice(&mut self) -> Option<String> {
        self.load_notice.take()
    }

    /// The full collection.
    pub fn contacts(&self) -> &ContactCollection {
        &self.contacts
    }

    /// Entries whose name or phone number contains the search text.
    pub fn shown_contacts(&self) -> Vec<&ContactEntry> {
        SearchFilter::new(&self.search_text, self.options.case_sensitive_search)
            .apply(&self.contacts)
    }

    /// Id of the selected stored entry.
    pub fn current_id(&self) -> Option<ContactId> {
        self.current
    }

    /// The contact on display: the working copy while editing, otherwise the
    /// selected stored entry.
    pub fn current_contact(&self) -> Option<&Contact> {
        match &self.working {
            Some(working) => Some(working),
            None => self
                .current
                .and_then(|id| self.contacts.get(id))
                .map(|entry| &entry.contact),
        }
    }

    /// Displayed value of a field, empty when nothing is on display.
    pub fn field(&self, field: Field) -> &str {
        self.current_contact()
            .map(|contact| contact.get(field))
            .unwrap_or("")
    }

    /// Per-field error messages; an empty message means valid.
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// True when every field's error message is empty.
    pub fn is_contact_correct(&self) -> bool {
        self.errors.values().all(|error| error.is_empty())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True while not editing.
    pub fn is_selecting_status(&self) -> bool {
        self.mode == Mode::Selecting
    }

    /// True when a stored contact is selected and no edit is in progress.
    pub fn is_readonly_contact_selected(&self) -> bool {
        self.current.is_some() && self.is_selecting_status()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Index of the entry that Apply will overwrite, `None` for a new entry or
    /// when not editing.
    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Select a stored contact, discarding any edit in progress.
    pub fn select(&mut self, id: ContactId) -> SessionResult<()> {
        if self.contacts.get(id).is_none() {
            return Err(SessionError::UnknownContact(id));
        }

        if self.is_selecting_status() && self.current == Some(id) {
            return Ok(());
        }

        if self.working.is_some() {
            debug!(selected = %id, "Selection discards working copy");
        }

        self.change_selection(Some(id));
        Ok(())
    }

    /// Start editing a new, empty contact.
    pub fn add(&mut self) {
        if self.working.is_some() {
            debug!("Add discards working copy");
        }

        self.current = None;
        self.editing_index = None;
        self.working = Some(Contact::default());
        self.set_mode(Mode::Editing);
        self.notify(SessionEvent::SelectionChanged);
        self.notify_fields();
        debug!("Adding new contact");
    }

    /// Start editing a copy of the selected contact.
    pub fn edit(&mut self) -> SessionResult<()> {
        if self.working.is_some() {
            return Err(SessionError::EditInProgress);
        }

        let id = self.current.ok_or(SessionError::NoSelection)?;
        let (index, copy) = self
            .contacts
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.id == id)
            .map(|(index, entry)| (index, entry.contact.clone()))
            .ok_or(SessionError::UnknownContact(id))?;

        self.editing_index = Some(index);
        self.working = Some(copy);
        self.set_mode(Mode::Editing);
        self.notify(SessionEvent::SelectionChanged);
        self.notify_fields();
        debug!(contact = %id, index = index, "Editing contact");
        Ok(())
    }

    /// Write a field of the working copy and re-validate it.
    ///
    /// Returns `false` when the value was already equal; nothing is notified
    /// in that case.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> SessionResult<bool> {
        let working = self.working.as_mut().ok_or(SessionError::NotEditing)?;
        if !working.set(field, value) {
            return Ok(false);
        }

        self.notify(SessionEvent::FieldChanged(field));
        self.validate(field);
        Ok(true)
    }

    /// Commit the working copy: append it as a new entry or overwrite the
    /// edited entry, return to `Selecting` and persist the collection.
    ///
    /// On a persistence failure the in-memory commit is kept and the error is
    /// returned.
    pub async fn apply(&mut self) -> SessionResult<ContactId> {
        if self.working.is_none() {
            return Err(SessionError::NotEditing);
        }

        if self.options.apply_policy == ApplyPolicy::RequireValid && !self.is_contact_correct() {
            return Err(SessionError::InvalidContact);
        }

        let working = self.working.take().ok_or(SessionError::NotEditing)?;
        let id = match self.editing_index.take() {
            None => self.contacts.push(working),
            Some(index) => match self.contacts.overwrite(index, &working) {
                Some(id) => id,
                None => {
                    warn!(index = index, "Edited entry no longer exists, appending");
                    self.contacts.push(working)
                }
            },
        };

        self.current = Some(id);
        self.set_mode(Mode::Selecting);
        self.notify(SessionEvent::ContactsChanged);
        self.notify(SessionEvent::ShownContactsChanged);
        self.notify(SessionEvent::SelectionChanged);
        self.notify_fields();
        debug!(contact = %id, "Applied contact");

        self.persist().await?;
        Ok(id)
    }

    /// Discard the working copy and return to `Selecting`.
    pub fn cancel(&mut self) -> SessionResult<()> {
        if self.working.take().is_none() {
            return Err(SessionError::NotEditing);
        }

        self.editing_index = None;
        self.set_mode(Mode::Selecting);
        self.notify(SessionEvent::SelectionChanged);
        self.notify_fields();
        debug!("Edit cancelled");
        Ok(())
    }

    /// Remove the selected contact, reselect a neighbour and persist.
    ///
    /// After removing position `index`: the new last entry is selected when the
    /// removed one was last (and not first), otherwise the entry that moved
    /// into `index`, otherwise nothing.
    pub async fn remove(&mut self) -> SessionResult<Contact> {
        if self.working.is_some() {
            return Err(SessionError::EditInProgress);
        }

        let id = self.current.ok_or(SessionError::NoSelection)?;
        let index = self
            .contacts
            .position(id)
            .ok_or(SessionError::UnknownContact(id))?;
        let removed = self
            .contacts
            .remove_at(index)
            .ok_or(SessionError::UnknownContact(id))?;

        let len = self.contacts.len();
        let next = if index > 0 && index >= len {
            self.contacts.last().map(|entry| entry.id)
        } else if index < len {
            self.contacts.at(index).map(|entry| entry.id)
        } else {
            None
        };

        self.change_selection(next);
        self.notify(SessionEvent::ContactsChanged);
        self.notify(SessionEvent::ShownContactsChanged);
        debug!(contact = %id, index = index, "Removed contact");

        self.persist().await?;
        Ok(removed.contact)
    }

    /// Change the search text.
    pub fn search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }

        self.search_text = text;
        self.notify(SessionEvent::SearchChanged);
        self.notify(SessionEvent::ShownContactsChanged);
    }

    /// Swap the selection: drops any working copy, forces `Selecting` and
    /// re-runs validation for every field.
    fn change_selection(&mut self, id: Option<ContactId>) {
        self.working = None;
        self.editing_index = None;
        self.current = id;
        self.set_mode(Mode::Selecting);
        self.validate_all();
        self.notify(SessionEvent::SelectionChanged);
        self.notify_fields();
    }

    /// Switch mode and re-validate every field under the new mode.
    fn set_mode(&mut self, mode: Mode) {
        let changed = self.mode != mode;
        self.mode = mode;
        self.validate_all();

        if changed {
            self.notify(SessionEvent::ModeChanged(mode));
            self.notify(SessionEvent::SelectionChanged);
        }
    }

    /// Recompute the error for `field`. Outside `Editing` the error is always
    /// cleared.
    fn validate(&mut self, field: Field) {
        let error = match self.mode {
            Mode::Selecting => String::new(),
            Mode::Editing => validation::validate(field, self.field(field)),
        };

        if self.errors.get(&field) != Some(&error) {
            self.errors.insert(field, error);
            self.notify(SessionEvent::ErrorsChanged(field));
        }
    }

    fn validate_all(&mut self) {
        for field in Field::ALL {
            self.validate(field);
        }
    }

    fn notify_fields(&self) {
        for field in Field::ALL {
            self.notify(SessionEvent::FieldChanged(field));
        }
    }

    fn notify(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    async fn persist(&self) -> SessionResult<()> {
        let snapshot = self.contacts.snapshot();
        self.store.save(&snapshot).await?;
        Ok(())
    }
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("contacts", &self.contacts.len())
            .field("current", &self.current)
            .field("mode", &self.mode)
            .field("editing_index", &self.editing_index)
            .field("search_text", &self.search_text)
            .finish()
    }
}
