//! Ordered contact collection with per-entry identity.

use super::contact::Contact;
use crate::domain::ContactId;

/// A stored contact together with its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub id: ContactId,
    pub contact: Contact,
}

/// The ordered sequence of stored contacts.
///
/// Insertion order is significant: it drives list display and reselection
/// after a removal. Every entry receives a fresh [`ContactId`] when it enters
/// the collection.
#[derive(Debug, Clone, Default)]
pub struct ContactCollection {
    entries: Vec<ContactEntry>,
    next_id: u64,
}

impl ContactCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from loaded contacts, keeping their order.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut collection = Self::new();
        for contact in contacts {
            collection.push(contact);
        }
        collection
    }

    /// Append a contact and return its new id.
    pub fn push(&mut self, contact: Contact) -> ContactId {
        self.next_id += 1;
        let id = ContactId::from_raw(self.next_id);
        self.entries.push(ContactEntry { id, contact });
        id
    }

    /// Position of the entry with the given id.
    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, id: ContactId) -> Option<&ContactEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&ContactEntry> {
        self.entries.get(index)
    }

    /// Overwrite the fields of the entry at `index` with `values`, keeping the
    /// entry's identity. Returns the entry id, or `None` if `index` is out of
    /// range.
    pub fn overwrite(&mut self, index: usize, values: &Contact) -> Option<ContactId> {
        let entry = self.entries.get_mut(index)?;
        entry.contact.assign_from(values);
        Some(entry.id)
    }

    pub fn last(&self) -> Option<&ContactEntry> {
        self.entries.last()
    }

    /// Remove and return the entry at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Option<ContactEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    /// Copy the contact values out, in order, for persistence.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.entries
            .iter()
            .map(|entry| entry.contact.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a ContactCollection {
    type Item = &'a ContactEntry;
    type IntoIter = std::slice::Iter<'a, ContactEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
