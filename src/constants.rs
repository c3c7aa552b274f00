//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and URLs so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "roster";

/// Local config filename (e.g. `.roster.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".roster.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "roster";

/// Base URL of the public mock service the client talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exposed by `build.rs`.
pub const TARGET: &str = env!("TARGET");


// ── Environment variable names ──────────────────────────────────────

pub const ENV_API_URL: &str = "ROSTER_API_URL";
pub const ENV_RESOURCE: &str = "ROSTER_RESOURCE";
pub const ENV_SPINNER: &str = "ROSTER_SPINNER";
