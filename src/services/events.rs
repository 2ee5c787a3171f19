//! Change notifications published by the edit session.

use crate::domain::Field;

/// Browsing vs. editing.
///
/// Validation errors are only shown while `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Selecting,
    Editing,
}

/// A piece of observable session state that changed.
///
/// The presentation layer re-reads the named state from the session when it
/// receives the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Entries were added, overwritten or removed.
    ContactsChanged,

    /// The filtered list may differ.
    ShownContactsChanged,

    /// The current contact or the read-only-selection flag changed.
    SelectionChanged,

    /// The displayed value of a field changed.
    FieldChanged(Field),

    /// The error message of a field changed; `is_contact_correct` may differ.
    ErrorsChanged(Field),

    /// The session switched mode.
    ModeChanged(Mode),

    /// The search text changed.
    SearchChanged,
}
