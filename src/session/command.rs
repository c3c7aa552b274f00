//! The browse loop's command grammar.
//!
//! One line of input maps to one command; parsing is total and reports
//! usage errors without touching the session.

use thiserror::Error;

use crate::models::UserId;

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Open the edit view for a user.
    Edit(UserId),
    /// Delete a user, then refetch the list.
    Delete(UserId),
    /// Assign a value to a field of the user being edited.
    Set { key: String, value: String },
    /// Submit the edited user.
    Submit,
    /// Leave the edit view without submitting.
    Cancel,
    /// Navigate to a raw path (e.g. `users` or `edit?id=3`).
    Open(String),
    /// History back.
    Back,
    /// History forward.
    Forward,
    /// Refetch the list.
    Refresh,
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Command-line text shown by `help`.
pub const HELP: &str = "\
  edit <id>         open the edit view for a user
  delete <id>       delete a user and refetch the list
  set <key> <val>   change a field of the user being edited
  submit            save the edited user
  cancel            back to the list without saving
  open <path>       navigate to a path (users, edit?id=<id>)
  back / forward    move through navigation history
  refresh           refetch the list
  quit              leave";

/// Rejected input line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' — try 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid id '{0}'")]
    InvalidId(String),
}

impl SessionCommand {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, rest)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        match head {
            "edit" => Ok(SessionCommand::Edit(parse_id(rest, "edit <id>")?)),
            "delete" | "del" => Ok(SessionCommand::Delete(parse_id(rest, "delete <id>")?)),
            "set" => match rest {
                [key, value @ ..] if !value.is_empty() => Ok(SessionCommand::Set {
                    key: (*key).to_string(),
                    value: value.join(" "),
                }),
                _ => Err(CommandError::Usage("set <key> <value>")),
            },
            "submit" => Ok(SessionCommand::Submit),
            "cancel" => Ok(SessionCommand::Cancel),
            "open" => match rest {
                [path] => Ok(SessionCommand::Open((*path).to_string())),
                _ => Err(CommandError::Usage("open <path>")),
            },
            "back" => Ok(SessionCommand::Back),
            "forward" | "fwd" => Ok(SessionCommand::Forward),
            "refresh" => Ok(SessionCommand::Refresh),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(rest: &[&str], usage: &'static str) -> Result<UserId, CommandError> {
    match rest {
        [raw] => raw
            .parse()
            .map_err(|_| CommandError::InvalidId((*raw).to_string())),
        _ => Err(CommandError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_commands() {
        assert_eq!(SessionCommand::parse("edit 3"), Ok(SessionCommand::Edit(3)));
        assert_eq!(
            SessionCommand::parse("delete 10"),
            Ok(SessionCommand::Delete(10))
        );
        assert_eq!(SessionCommand::parse("del 2"), Ok(SessionCommand::Delete(2)));
    }

    #[test]
    fn rejects_bad_ids() {
        assert_eq!(
            SessionCommand::parse("edit abc"),
            Err(CommandError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("edit"),
            Err(CommandError::Usage("edit <id>"))
        );
    }

    #[test]
    fn set_joins_the_value_tokens() {
        assert_eq!(
            SessionCommand::parse("set name Leanne Graham"),
            Ok(SessionCommand::Set {
                key: "name".to_string(),
                value: "Leanne Graham".to_string(),
            })
        );
        assert_eq!(
            SessionCommand::parse("set name"),
            Err(CommandError::Usage("set <key> <value>"))
        );
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(
            SessionCommand::parse("open edit?id=3"),
            Ok(SessionCommand::Open("edit?id=3".to_string()))
        );
        assert_eq!(SessionCommand::parse("back"), Ok(SessionCommand::Back));
        assert_eq!(SessionCommand::parse("fwd"), Ok(SessionCommand::Forward));
        assert_eq!(SessionCommand::parse("refresh"), Ok(SessionCommand::Refresh));
    }

    #[test]
    fn parses_bare_words() {
        assert_eq!(SessionCommand::parse("submit"), Ok(SessionCommand::Submit));
        assert_eq!(SessionCommand::parse("cancel"), Ok(SessionCommand::Cancel));
        assert_eq!(SessionCommand::parse("help"), Ok(SessionCommand::Help));
        assert_eq!(SessionCommand::parse("q"), Ok(SessionCommand::Quit));
    }

    #[test]
    fn empty_and_unknown_lines() {
        assert_eq!(SessionCommand::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            SessionCommand::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(
            SessionCommand::parse("  edit   4  "),
            Ok(SessionCommand::Edit(4))
        );
    }
}
