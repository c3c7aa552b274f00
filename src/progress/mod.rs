//! Loading indicator for terminal output.
//!
//! Shows a single status line on stderr for the duration of a network
//! call. Designed for interactive terminals; silenced with `--no-spinner`
//! or when stderr is not a terminal. Hiding is tied to a guard's `Drop`,
//! so the line is cleared on the error path as well.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Renders and clears the loading line.
pub struct Spinner {
    /// If false, all output is suppressed.
    enabled: bool,
    /// Whether a status line is currently on screen.
    visible: Mutex<bool>,
}

impl Spinner {
    /// Create a spinner. `enabled` controls whether anything is printed.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            visible: Mutex::new(false),
        }
    }

    /// Show the status line and return a guard that clears it when dropped.
    pub fn start(&self, label: &str) -> SpinnerGuard<'_> {
        if self.enabled {
            let mut visible = self.visible.lock().unwrap();
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            let _ = write!(handle, "  {} {}", "◌".cyan().bold(), label.dimmed());
            let _ = handle.flush();
            *visible = true;
        }
        SpinnerGuard { spinner: self }
    }

    /// Clear the status line if one is showing.
    fn hide(&self) {
        let mut visible = self.visible.lock().unwrap();
        if *visible {
            let stderr = io::stderr();
            let mut handle = stderr.lock();
            // Return to column 0 and clear the line.
            let _ = write!(handle, "\r\x1b[2K");
            let _ = handle.flush();
            *visible = false;
        }
    }
}

/// Clears the spinner line when dropped.
pub struct SpinnerGuard<'a> {
    spinner: &'a Spinner,
}

impl Drop for SpinnerGuard<'_> {
    fn drop(&mut self) {
        self.spinner.hide();
    }
}
