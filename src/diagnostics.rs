//! Shared diagnostics helpers for consistent, colored output.

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence `info` output for the rest of the run.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Print a progress message with a colored prefix.
pub fn info(message: impl AsRef<str>) {
    if QUIET.load(Ordering::Relaxed) {
        return;
    }
    eprintln!("{} {}", "INFO".green().bold(), message.as_ref());
}

/// Format a warning message with a colored prefix.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "WARN".yellow().bold(), message.as_ref());
}

/// Format an error message with a colored prefix.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR".red().bold(), message.as_ref())
}
