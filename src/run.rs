//! Command execution logic.
//!
//! Runs a parsed [`Command`] against its INI file and writes the result
//! to the given output.

use std::io::{self, Write};

use thiserror::Error;

use striking::cli::Command;
use striking::ini::{IniError, IniFile, LineClassifier};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Parsing, lookup, or file I/O failed.
    #[error(transparent)]
    Ini(#[from] IniError),

    /// Failed to render the store as JSON.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write command output.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Executes a command, writing any result to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or written, a looked-up
/// entry is missing, or output cannot be written.
pub fn execute<W: Write>(command: &Command, out: &mut W) -> Result<(), RunError> {
    match command {
        Command::Show { file, json } => {
            let store = IniFile::open(file)?.into_store();
            if *json {
                serde_json::to_writer_pretty(&mut *out, &store)?;
                writeln!(out)?;
            } else {
                write!(out, "{store}")?;
            }
        }
        Command::Get { file, key, section } => {
            let ini = IniFile::open(file)?;
            let store = ini.store();
            let section = match section {
                Some(section) => section.as_str(),
                None => store.section_of_key(key)?,
            };
            writeln!(out, "{}", store.value(section, key)?)?;
        }
        Command::Set {
            file,
            section,
            key,
            value,
        } => {
            LineClassifier::new().check_entry(section, key, value)?;

            let mut ini = IniFile::open(file)?;
            ini.store_mut().set_value(section, key.as_str(), value.as_str());
            ini.save(&[])?;
            tracing::info!(section = section.as_str(), key = key.as_str(), "Updated entry");
        }
    }
    Ok(())
}
