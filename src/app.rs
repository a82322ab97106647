//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use striking::ini::IniError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Failure (exit code 1) - unreadable or malformed file, missing entry, etc.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common errors.
pub fn print_error_hint(error: &RunError) {
    match error {
        RunError::Ini(IniError::Malformed { .. }) => {
            eprintln!("\nEvery non-comment line must be '[section]' or contain exactly one '='.");
        }
        RunError::Ini(IniError::InvalidEntry { .. }) => {
            eprintln!("\nThe file was left unchanged.");
        }
        RunError::Ini(IniError::NoSectionForKey { .. }) => {
            eprintln!("\nRun 'striking show <FILE>' to list the available sections and keys.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output stays clean on stdout.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
