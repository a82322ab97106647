//! Line classification for the INI dialect.
//!
//! Each physical line is classified on its own, without lookahead:
//!
//! - blank lines and lines whose trimmed form starts with a comment marker
//!   are [`Line::Irrelevant`];
//! - lines starting with `[` are section headers, accepted only when the
//!   whole trimmed line matches [`SECTION_PATTERN`](super::defaults::SECTION_PATTERN);
//! - everything else is a key-value line that must contain exactly one `=`
//!   once an inline comment has been cut off.
//!
//! Inline comments are only recognised on key-value lines, so a marker
//! inside a header (`[a;b]`) is part of the header text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{IniError, defaults};

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(defaults::SECTION_PATTERN).expect("section pattern is a valid regex")
});

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty, whitespace-only, or a full-line comment.
    Irrelevant,

    /// A valid section header; holds the name between the brackets.
    Section(&'a str),

    /// A line starting with `[` that does not match the section pattern.
    /// Holds the trimmed line.
    IgnoredHeader(&'a str),

    /// A `key=value` line.
    KeyValue {
        /// Key with trailing whitespace removed
        key: &'a str,
        /// Value with leading whitespace and any inline comment removed
        value: &'a str,
    },

    /// A non-header line without exactly one `=`.
    Malformed,
}

/// Classifies raw lines according to a configurable comment marker set.
///
/// # Examples
///
/// ```
/// use striking::ini::{Line, LineClassifier};
///
/// let classifier = LineClassifier::new();
///
/// assert_eq!(classifier.classify("[owner]"), Line::Section("owner"));
/// assert_eq!(
///     classifier.classify("name = John ; trailing comment"),
///     Line::KeyValue { key: "name", value: "John" }
/// );
/// assert_eq!(classifier.classify("; just a comment"), Line::Irrelevant);
/// ```
#[derive(Debug, Clone)]
pub struct LineClassifier {
    comment_markers: HashSet<char>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier {
    /// Creates a classifier using the default comment marker (`;`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_comment_markers([defaults::COMMENT_MARKER])
    }

    /// Creates a classifier with exactly the given comment markers.
    #[must_use]
    pub fn with_comment_markers(markers: impl IntoIterator<Item = char>) -> Self {
        Self {
            comment_markers: markers.into_iter().collect(),
        }
    }

    /// Adds a comment marker to the set.
    pub fn add_comment_marker(&mut self, marker: char) -> &mut Self {
        self.comment_markers.insert(marker);
        self
    }

    /// Returns the configured comment markers.
    #[must_use]
    pub const fn comment_markers(&self) -> &HashSet<char> {
        &self.comment_markers
    }

    /// Returns `true` if `c` starts a comment.
    #[must_use]
    pub fn is_comment_marker(&self, c: char) -> bool {
        self.comment_markers.contains(&c)
    }

    /// Classifies a raw (untrimmed) line.
    #[must_use]
    pub fn classify<'a>(&self, raw: &'a str) -> Line<'a> {
        let trimmed = raw.trim();

        let Some(first) = trimmed.chars().next() else {
            return Line::Irrelevant;
        };
        if self.is_comment_marker(first) {
            return Line::Irrelevant;
        }

        if first == '[' {
            return if SECTION_RE.is_match(trimmed) {
                Line::Section(&trimmed[1..trimmed.len() - 1])
            } else {
                Line::IgnoredHeader(trimmed)
            };
        }

        let content = self.strip_inline_comment(trimmed).trim_end();
        let mut parts = content.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => Line::KeyValue {
                key: key.trim_end(),
                value: value.trim_start(),
            },
            _ => Line::Malformed,
        }
    }

    /// Checks that an entry, once written, parses back to the same section,
    /// key, and value.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::InvalidEntry`] when the section name fails the
    /// section pattern, or the key or value contains `=`, a comment marker,
    /// or a line break, or the key starts with `[`.
    pub fn check_entry(&self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
        let invalid = |reason: &'static str| IniError::InvalidEntry {
            section: section.to_string(),
            key: key.to_string(),
            reason,
        };

        if !SECTION_RE.is_match(&format!("[{section}]")) {
            return Err(invalid("section names may only contain letters and dots"));
        }
        if key.starts_with('[') {
            return Err(invalid("key must not start with '['"));
        }
        for text in [key, value] {
            if text.contains('=') {
                return Err(invalid("key and value must not contain '='"));
            }
            if text.contains(['\n', '\r']) {
                return Err(invalid("key and value must not contain line breaks"));
            }
            if text.contains(|c: char| self.is_comment_marker(c)) {
                return Err(invalid("key and value must not contain a comment marker"));
            }
        }
        Ok(())
    }

    /// Cuts the line at the first comment marker, if any.
    fn strip_inline_comment<'a>(&self, line: &'a str) -> &'a str {
        line.find(|c: char| self.is_comment_marker(c))
            .map_or(line, |pos| &line[..pos])
    }
}
