//! Shell command parsing.

use crate::domain::Field;
use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the shown (filtered) list
    List,
    /// Set the search text; empty clears it
    Search(String),
    /// Select by 1-based position in the shown list
    Select(usize),
    Add,
    Edit,
    /// Write a field of the working copy; the value may be empty
    Set(Field, String),
    Apply,
    Cancel,
    Remove,
    /// Print the current contact with its errors
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                  show contacts matching the search
  search [text]         filter by name or phone number (empty clears)
  select <n>            select the n-th shown contact
  add                   start a new contact
  edit                  edit the selected contact
  set <field> [value]   set name, phone or email of the contact being edited
  apply                 save the contact being edited
  cancel                discard the contact being edited
  remove                delete the selected contact
  show                  show the current contact
  help                  show this help
  quit                  exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> CommandResult<Self> {
        // Trailing whitespace is kept: it can be part of a `set` value.
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        let (word, raw_rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };
        let rest = raw_rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List),
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "select" | "sel" => parse_position(rest).map(Command::Select),
            "add" | "new" => Ok(Command::Add),
            "edit" => Ok(Command::Edit),
            "set" => parse_set(raw_rest),
            "apply" | "save" => Ok(Command::Apply),
            "cancel" => Ok(Command::Cancel),
            "remove" | "rm" | "delete" => Ok(Command::Remove),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_position(rest: &str) -> CommandResult<usize> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "select",
            argument: "a position",
        });
    }

    match rest.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CommandError::InvalidPosition(rest.to_string())),
    }
}

fn parse_set(rest: &str) -> CommandResult<Command> {
    let rest = rest.trim_start();
    if rest.trim_end().is_empty() {
        return Err(CommandError::MissingArgument {
            command: "set",
            argument: "a field name",
        });
    }

    // One separator between field and value; the value is taken verbatim.
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value),
        None => (rest, ""),
    };
    let field = name.parse::<Field>()?;
    Ok(Command::Set(field, value.to_string()))
}
