//! Error types for parsing, lookup, and persistence of INI data.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for INI operations.
///
/// Covers malformed input, failed section/key lookups, and file I/O.
#[derive(Debug, Error)]
pub enum IniError {
    /// A key-value line contained zero or more than one `=`.
    #[error("Malformed line {line}: expected exactly one '=' in '{content}'")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// The requested section does not exist in the store.
    #[error("Section '{section}' not found")]
    SectionNotFound {
        /// Name of the missing section
        section: String,
    },

    /// No section in the store contains the key (key-only resolution).
    #[error("No section contains key '{key}'")]
    NoSectionForKey {
        /// The key that could not be resolved
        key: String,
    },

    /// The section exists but does not contain the key.
    #[error("Key '{key}' not found in section '{section}'")]
    KeyNotFound {
        /// Name of the section that was searched
        section: String,
        /// The missing key
        key: String,
    },

    /// An entry could not be written in a form that parses back unchanged.
    #[error("Invalid entry '{key}' in section '{section}': {reason}")]
    InvalidEntry {
        /// Target section
        section: String,
        /// Target key
        key: String,
        /// What makes the entry unwritable
        reason: &'static str,
    },

    /// Failed to read the INI file.
    #[error("Failed to read INI file '{}': {source}", path.display())]
    FileRead {
        /// Path to the INI file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the INI file.
    #[error("Failed to write INI file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the INI file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl IniError {
    /// Returns `true` for section or key lookup failures.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound { .. } | Self::NoSectionForKey { .. } | Self::KeyNotFound { .. }
        )
    }
}
