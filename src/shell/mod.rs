//! Line-oriented front end for the edit session.
//!
//! Parses intents from text, dispatches them to [`EditSession`] and renders the
//! resulting state. It holds no state of its own.

pub mod command;

pub use command::{Command, HELP};

use crate::domain::Field;
use crate::error::SessionError;
use crate::services::{EditSession, Mode};
use std::fmt::Write;

/// What the shell loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the output and read the next command.
    Continue(String),
    /// Leave the loop.
    Quit,
}

/// Run one command against the session.
pub async fn execute(session: &mut EditSession, command: Command) -> Flow {
    let output = match command {
        Command::Quit => return Flow::Quit,
        Command::Help => HELP.to_string(),
        Command::List => render_list(session),
        Command::Show => render_current(session),
        Command::Search(text) => {
            session.search(text);
            render_list(session)
        }
        Command::Select(position) => {
            let id = position
                .checked_sub(1)
                .and_then(|index| session.shown_contacts().get(index).map(|entry| entry.id));
            match id {
                Some(id) => {
                    let result = session.select(id);
                    outcome(session, result)
                }
                None => format!("No contact at position {}", position),
            }
        }
        Command::Add => {
            session.add();
            render_current(session)
        }
        Command::Edit => {
            let result = session.edit();
            outcome(session, result)
        }
        Command::Set(field, value) => {
            let result = session.set_field(field, value).map(|_| ());
            outcome(session, result)
        }
        Command::Apply => {
            let result = session.apply().await.map(|_| ());
            outcome(session, result)
        }
        Command::Cancel => {
            let result = session.cancel();
            outcome(session, result)
        }
        Command::Remove => match session.remove().await {
            Ok(removed) => format!(
                "Removed {}\n{}",
                display_name(removed.name()),
                render_list(session)
            ),
            Err(SessionError::Persistence(err)) => format!(
                "Removed, but saving failed: {}\n{}",
                err,
                render_list(session)
            ),
            Err(err) => format!("Error: {}", err),
        },
    };

    Flow::Continue(output)
}

/// Render the state after an intent, or the reason it was refused.
fn outcome(session: &EditSession, result: Result<(), SessionError>) -> String {
    match result {
        Ok(()) => render_current(session),
        Err(SessionError::Persistence(err)) => format!(
            "Applied, but saving failed: {}\n{}",
            err,
            render_current(session)
        ),
        Err(err) => format!("Error: {}", err),
    }
}

/// Render the shown list, marking the selected entry.
pub fn render_list(session: &EditSession) -> String {
    let shown = session.shown_contacts();
    if shown.is_empty() {
        return if session.search_text().is_empty() {
            "(no contacts)".to_string()
        } else {
            format!("(no contacts match \"{}\")", session.search_text())
        };
    }

    let mut out = String::new();
    for (position, entry) in shown.iter().enumerate() {
        let marker = if session.current_id() == Some(entry.id) {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(
            out,
            "{} {:>3}. {:<24} {:<20} {}",
            marker,
            position + 1,
            display_name(entry.contact.name()),
            entry.contact.phone_number(),
            entry.contact.email()
        );
    }
    out.trim_end().to_string()
}

/// Render the contact on display with its field errors.
pub fn render_current(session: &EditSession) -> String {
    let mut out = String::new();
    let heading = match (session.mode(), session.current_id()) {
        (Mode::Editing, None) => "New contact (editing)",
        (Mode::Editing, Some(_)) => "Contact (editing)",
        (Mode::Selecting, Some(_)) => "Contact",
        (Mode::Selecting, None) => return "(nothing selected)".to_string(),
    };
    let _ = writeln!(out, "{}", heading);

    for field in Field::ALL {
        let _ = write!(out, "  {:<13} {}", field.label(), session.field(field));
        let error = session.error(field);
        if !error.is_empty() {
            let _ = write!(out, "   <- {}", error);
        }
        out.push('\n');
    }

    if session.mode() == Mode::Editing && !session.is_contact_correct() {
        out.push_str("  (contact has errors)\n");
    }

    out.trim_end().to_string()
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(no name)"
    } else {
        name
    }
}
