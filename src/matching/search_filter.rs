//! Substring search over the contact list.
//!
//! A contact is shown when its name or phone number contains the search text.
//! The empty search text shows every contact.

use crate::models::{Contact, ContactEntry};

/// A compiled search query.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    needle: String,
    case_sensitive: bool,
}

impl SearchFilter {
    /// Create a filter for `text`.
    ///
    /// With `case_sensitive = false` both sides are lowercased before matching.
    pub fn new(text: &str, case_sensitive: bool) -> Self {
        let needle = if case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };
        Self {
            needle,
            case_sensitive,
        }
    }

    /// Check whether a contact passes the filter.
    pub fn matches(&self, contact: &Contact) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        if self.case_sensitive {
            contact.name().contains(&self.needle) || contact.phone_number().contains(&self.needle)
        } else {
            contact.name().to_lowercase().contains(&self.needle)
                || contact.phone_number().to_lowercase().contains(&self.needle)
        }
    }

    /// Keep the matching entries, preserving collection order.
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a ContactEntry>
    where
        I: IntoIterator<Item = &'a ContactEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| self.matches(&entry.contact))
            .collect()
    }
}
