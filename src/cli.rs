//! CLI argument parsing using clap.
//!
//! Defines the command-line interface and its subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Striking: inspect and edit INI configuration files
#[derive(Debug, Parser)]
#[command(name = "striking")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for striking
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a file and print its sections
    Show {
        /// Path to the INI file
        file: PathBuf,

        /// Print the sections as JSON instead of INI
        #[arg(long)]
        json: bool,
    },

    /// Print a single value
    Get {
        /// Path to the INI file
        file: PathBuf,

        /// Key to look up
        key: String,

        /// Section holding the key (default: first section containing it)
        #[arg(long, short)]
        section: Option<String>,
    },

    /// Set a value and rewrite the file
    Set {
        /// Path to the INI file
        file: PathBuf,

        /// Section to write to (created if absent)
        section: String,

        /// Key to write
        key: String,

        /// New value
        value: String,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the file the command operates on.
    #[must_use]
    pub fn file(&self) -> &std::path::Path {
        match &self.command {
            Command::Show { file, .. } | Command::Get { file, .. } | Command::Set { file, .. } => {
                file.as_path()
            }
        }
    }
}
