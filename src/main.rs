//! Striking: INI configuration tool
//!
//! Entry point for the striking application.

use std::io::Write;
use std::process::ExitCode;

use striking::cli::Cli;

mod app;
mod run;

use app::{exit_code, print_error_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);
    tracing::debug!(file = %cli.file().display(), "Running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run::execute(&cli.command, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            print_error_hint(&e);
            exit_code::FAILURE
        }
    }
}
