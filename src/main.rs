//! roster — terminal client for a remote user directory.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io::IsTerminal;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use roster::api::RestDirectory;
use roster::config::Config;
use roster::constants;
use roster::env::Env;
use roster::progress::Spinner;
use roster::session::command::{CommandError, SessionCommand, HELP};
use roster::session::{Notice, Session, Step};

use cli::args::{BrowseArgs, Cli, Command, DeleteArgs, EditArgs, ListArgs, OutputFormat};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let no_spinner = cli.no_spinner;

    match cli.command {
        Command::Browse(args) => run_browse(no_spinner, &config, args).await,
        Command::List(args) => run_list(no_spinner, &config, args).await,
        Command::Edit(args) => run_edit(no_spinner, &config, args).await,
        Command::Delete(args) => run_delete(no_spinner, &config, args).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Layered config plus CLI flag overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().ok();
    let mut config =
        Config::load(cwd.as_deref(), &Env::real()).context("failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    Ok(config)
}

fn build_session(no_spinner: bool, config: &Config) -> Session {
    let directory = Arc::new(RestDirectory::new(config.api.resource_url()));
    let spinner_enabled = !no_spinner && config.ui.spinner && std::io::stderr().is_terminal();
    Session::new(directory, Spinner::new(spinner_enabled))
}

fn print_step(step: &Step, format: OutputFormat) {
    print!("{}", format.render(&step.view));
    print_notices(&step.notices);
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        eprintln!("  {} {}", "⚠".yellow().bold(), notice.message.yellow());
        if let Some(hint) = &notice.retry_hint {
            eprintln!("    {}", format!("retry with '{hint}'").dimmed());
        }
    }
}

/// Fetch the collection once and print the list view.
async fn run_list(no_spinner: bool, config: &Config, args: ListArgs) -> Result<()> {
    let mut session = build_session(no_spinner, config);
    let step = session.open("users").await;
    print_step(&step, args.format);
    Ok(())
}

/// Apply `--set` assignments to one user and submit them.
async fn run_edit(no_spinner: bool, config: &Config, args: EditArgs) -> Result<()> {
    let assignments = args
        .set
        .iter()
        .map(|raw| cli::args::parse_assignment(raw))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut session = build_session(no_spinner, config);
    let step = session.open("users").await;
    print_notices(&step.notices);

    for (key, value) in &assignments {
        session
            .set_field(args.id, key, value)
            .with_context(|| format!("cannot edit user {}", args.id))?;
    }

    let step = session.submit_edit(args.id).await;
    print_step(&step, args.format);
    Ok(())
}

/// Delete one user and print the refreshed list.
async fn run_delete(no_spinner: bool, config: &Config, args: DeleteArgs) -> Result<()> {
    let mut session = build_session(no_spinner, config);
    let step = session.remove(args.id).await;
    print_step(&step, args.format);
    Ok(())
}

/// The interactive loop: eager fetch, then one command per input line.
async fn run_browse(no_spinner: bool, config: &Config, args: BrowseArgs) -> Result<()> {
    cli::print_banner();

    let mut session = build_session(no_spinner, config);
    let step = session.open(&args.path).await;
    print_step(&step, OutputFormat::Terminal);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("  {} {e}", "✖".red().bold());
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Edit(id) => {
                let step = session.edit(id);
                print_step(&step, OutputFormat::Terminal);
            }
            SessionCommand::Delete(id) => {
                let step = session.remove(id).await;
                print_step(&step, OutputFormat::Terminal);
            }
            SessionCommand::Set { key, value } => match session.current_edit_id() {
                None => eprintln!(
                    "  {} {}",
                    "✖".red().bold(),
                    "'set' is only available in the edit view".red()
                ),
                Some(id) => match session.set_field(id, &key, &value) {
                    Ok(()) => eprintln!("  {} {}", "✔".green().bold(), format!("{key} = {value}").dimmed()),
                    Err(e) => eprintln!("  {} {}", "✖".red().bold(), e.to_string().red()),
                },
            },
            SessionCommand::Submit => match session.current_edit_id() {
                None => eprintln!(
                    "  {} {}",
                    "✖".red().bold(),
                    "'submit' is only available in the edit view".red()
                ),
                Some(id) => {
                    let step = session.submit_edit(id).await;
                    print_step(&step, OutputFormat::Terminal);
                }
            },
            SessionCommand::Cancel => {
                let step = session.cancel_edit().await;
                print_step(&step, OutputFormat::Terminal);
            }
            SessionCommand::Open(path) => {
                let step = session.open(&path).await;
                print_step(&step, OutputFormat::Terminal);
            }
            SessionCommand::Back => match session.back().await {
                Some(step) => print_step(&step, OutputFormat::Terminal),
                None => eprintln!("  {}", "no earlier entry".dimmed()),
            },
            SessionCommand::Forward => match session.forward().await {
                Some(step) => print_step(&step, OutputFormat::Terminal),
                None => eprintln!("  {}", "no later entry".dimmed()),
            },
            SessionCommand::Refresh => {
                if let Err(e) = session.refresh().await {
                    print_notices(&[Notice {
                        message: format!("could not load users, showing the last known list: {e}"),
                        retry_hint: Some("refresh".to_string()),
                    }]);
                }
                print!(
                    "{}",
                    OutputFormat::Terminal.render(&session.render_current())
                );
            }
        }
    }

    Ok(())
}

fn prompt() {
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "{} ", "roster>".bold());
    let _ = handle.flush();
}
