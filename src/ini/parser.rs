//! Line-by-line INI parser.
//!
//! Drives a [`LineClassifier`] over the input and fills a [`Store`],
//! tracking the current section. Parsing stops at the first malformed line.

use std::path::Path;

use super::defaults;
use super::{IniError, Line, LineClassifier, Store};

/// INI parser configured with a line classifier.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    classifier: LineClassifier,
}

impl Parser {
    /// Creates a parser with the default comment markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser using the given classifier.
    #[must_use]
    pub const fn with_classifier(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// Returns the classifier used by this parser.
    #[must_use]
    pub const fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Parses INI text into a new store.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Malformed`] for the first key-value line without
    /// exactly one `=`.
    pub fn parse_str(&self, content: &str) -> Result<Store, IniError> {
        let mut store = Store::new();
        self.parse_into(content, &mut store)?;
        Ok(store)
    }

    /// Clears `store` and refills it from INI text.
    ///
    /// A leading UTF-8 byte-order mark is skipped.
    ///
    /// Lines before a malformed line stay applied when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::Malformed`] for the first key-value line without
    /// exactly one `=`.
    pub fn parse_into(&self, content: &str, store: &mut Store) -> Result<(), IniError> {
        store.clear();
        let content = content.strip_prefix(defaults::BYTE_ORDER_MARK).unwrap_or(content);
        let mut current = defaults::IMPLICIT_SECTION;

        for (index, raw) in content.lines().enumerate() {
            match self.classifier.classify(raw) {
                Line::Irrelevant => {}
                Line::Section(name) => {
                    tracing::debug!(line = index + 1, section = name, "Entering section");
                    current = name;
                    store.section_entry(name);
                }
                Line::IgnoredHeader(header) => {
                    tracing::debug!(
                        line = index + 1,
                        header,
                        section = current,
                        "Ignoring header with invalid section name"
                    );
                }
                Line::KeyValue { key, value } => store.set_value(current, key, value),
                Line::Malformed => {
                    return Err(IniError::Malformed {
                        line: index + 1,
                        content: raw.trim().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Reads and parses an INI file into a new store.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileRead`] if the file cannot be read, or
    /// [`IniError::Malformed`] for invalid content.
    pub fn parse_file(&self, path: &Path) -> Result<Store, IniError> {
        let mut store = Store::new();
        self.parse_file_into(path, &mut store)?;
        Ok(store)
    }

    /// Clears `store` and refills it from an INI file.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileRead`] if the file cannot be read, or
    /// [`IniError::Malformed`] for invalid content.
    pub fn parse_file_into(&self, path: &Path, store: &mut Store) -> Result<(), IniError> {
        let content = std::fs::read_to_string(path).map_err(|e| IniError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.parse_into(&content, store)?;
        tracing::info!(path = %path.display(), sections = store.len(), "Parsed INI file");
        Ok(())
    }
}

/// Parses an INI file with the default dialect.
///
/// # Errors
///
/// Returns [`IniError::FileRead`] if the file cannot be read, or
/// [`IniError::Malformed`] for invalid content.
pub fn parse(path: impl AsRef<Path>) -> Result<Store, IniError> {
    Parser::new().parse_file(path.as_ref())
}
