//! In-memory section → key → value store.
//!
//! Sections and keys keep insertion order, which drives both the writer's
//! output order and key-only section resolution.

use indexmap::IndexMap;
use serde::Serialize;

use super::IniError;

/// The entries of one section, in insertion order.
pub type Section = IndexMap<String, String>;

/// Two-level mapping from section name to its key-value entries.
///
/// Keys are unique within a section; writing an existing key replaces
/// its value in place.
///
/// # Examples
///
/// ```
/// use striking::ini::Store;
///
/// let mut store = Store::new();
/// store.set_value("owner", "name", "John Doe");
///
/// assert_eq!(store.value("owner", "name").unwrap(), "John Doe");
/// assert!(store.value("owner", "email").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Store {
    sections: IndexMap<String, Section>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the store has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Removes all sections.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Returns `true` if a section with this name exists.
    #[must_use]
    pub fn contains_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Returns the named section.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::SectionNotFound`] if the section does not exist.
    pub fn get(&self, section: &str) -> Result<&Section, IniError> {
        self.sections
            .get(section)
            .ok_or_else(|| IniError::SectionNotFound {
                section: section.to_string(),
            })
    }

    /// Returns the named section mutably.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::SectionNotFound`] if the section does not exist.
    pub fn get_mut(&mut self, section: &str) -> Result<&mut Section, IniError> {
        self.sections
            .get_mut(section)
            .ok_or_else(|| IniError::SectionNotFound {
                section: section.to_string(),
            })
    }

    /// Replaces the contents of a section, creating it if absent.
    ///
    /// An existing section keeps its position in the iteration order.
    pub fn set(&mut self, section: impl Into<String>, contents: Section) {
        self.sections.insert(section.into(), contents);
    }

    /// Returns the named section, creating an empty one at the end if absent.
    pub fn section_entry(&mut self, section: &str) -> &mut Section {
        self.sections.entry(section.to_string()).or_default()
    }

    /// Returns the value stored under `section` / `key`.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::SectionNotFound`] or [`IniError::KeyNotFound`].
    pub fn value(&self, section: &str, key: &str) -> Result<&str, IniError> {
        self.get(section)?
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| IniError::KeyNotFound {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Writes a value, creating the section if absent.
    pub fn set_value(
        &mut self,
        section: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.section_entry(section).insert(key.into(), value.into());
    }

    /// Returns the name of the first section containing `key`.
    ///
    /// Sections are scanned in insertion order, so the section declared
    /// first in the source file wins.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::NoSectionForKey`] if no section has the key.
    pub fn section_of_key(&self, key: &str) -> Result<&str, IniError> {
        self.sections
            .iter()
            .find(|(_, entries)| entries.contains_key(key))
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| IniError::NoSectionForKey {
                key: key.to_string(),
            })
    }

    /// Iterates over sections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
