//! Clap argument types and validation.

use clap::{Parser, ValueEnum};

use roster::models::UserId;
use roster::output::ViewRenderer;
use roster::view::View;

/// Browse, edit, and delete records of a remote user directory.
#[derive(Parser, Debug)]
#[command(name = "roster", version = roster::constants::VERSION)]
pub struct Cli {
    /// Base URL of the remote service (overrides config and environment).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Never show the loading spinner.
    #[arg(long, global = true, default_value_t = false)]
    pub no_spinner: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Start an interactive browsing session.
    Browse(BrowseArgs),

    /// Fetch the collection and print the list view once.
    List(ListArgs),

    /// Apply field changes to a user and submit them.
    Edit(EditArgs),

    /// Delete a user, then print the refreshed list.
    Delete(DeleteArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `browse` subcommand.
#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Initial navigation path (`users` or `edit?id=<id>`).
    #[arg(long, default_value = "users")]
    pub path: String,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `edit` subcommand.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Id of the user to edit.
    pub id: UserId,

    /// Field assignment, repeatable: `--set email=new@example.com`.
    #[arg(long = "set", value_name = "KEY=VALUE", required = true)]
    pub set: Vec<String>,

    /// Output format for the refreshed list.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the `delete` subcommand.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Id of the user to delete.
    pub id: UserId,

    /// Output format for the refreshed list.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a view using the renderer for this format.
    pub fn render(&self, view: &View) -> String {
        match self {
            OutputFormat::Terminal => roster::output::terminal::TerminalRenderer.render(view),
            OutputFormat::Json => roster::output::json::JsonRenderer.render(view),
        }
    }
}

/// Split a `KEY=VALUE` argument into its parts.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid assignment '{raw}', expected KEY=VALUE")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("email=a=b@example.com").unwrap(),
            ("email".to_string(), "a=b@example.com".to_string())
        );
    }

    #[test]
    fn parse_assignment_allows_empty_value() {
        assert_eq!(
            parse_assignment("suite=").unwrap(),
            ("suite".to_string(), String::new())
        );
    }

    #[test]
    fn parse_assignment_rejects_malformed_input() {
        assert!(parse_assignment("email").is_err());
        assert!(parse_assignment("=value").is_err());
    }
}
