//! Path-bound INI document.

use std::path::{Path, PathBuf};

use crate::bind::{self, Bindable, BindingSource};

use super::{IniError, Parser, Section, Store};

/// An INI file on disk together with its parsed store.
///
/// Every [`parse`](Self::parse) rebuilds the store from scratch, and every
/// [`save`](Self::save) rewrites the whole file.
///
/// # Examples
///
/// ```no_run
/// use striking::ini::IniFile;
///
/// let mut file = IniFile::open("settings.ini")?;
/// let name = file.store().value("owner", "name")?.to_string();
///
/// file.store_mut().set_value("owner", "name", name.to_uppercase());
/// file.save(&[])?;
/// # Ok::<(), striking::ini::IniError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IniFile {
    path: PathBuf,
    parser: Parser,
    store: Store,
}

impl IniFile {
    /// Creates a handle with an empty store; nothing is read yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_parser(path, Parser::new())
    }

    /// Creates a handle that parses with a custom parser.
    #[must_use]
    pub fn with_parser(path: impl Into<PathBuf>, parser: Parser) -> Self {
        Self {
            path: path.into(),
            parser,
            store: Store::new(),
        }
    }

    /// Creates a handle and parses the file immediately.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileRead`] or [`IniError::Malformed`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, IniError> {
        let mut file = Self::new(path);
        file.parse()?;
        Ok(file)
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parsed store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the store mutably.
    pub const fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Consumes the handle, returning its store.
    #[must_use]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Clears the store and re-reads the file.
    ///
    /// When a malformed line is hit, entries from earlier lines remain in
    /// the store.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileRead`] or [`IniError::Malformed`].
    pub fn parse(&mut self) -> Result<(), IniError> {
        self.parser.parse_file_into(&self.path, &mut self.store)
    }

    /// Returns the named section; indexer-style shorthand for
    /// `self.store().get(section)`.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::SectionNotFound`] if the section does not exist.
    pub fn get(&self, section: &str) -> Result<&Section, IniError> {
        self.store.get(section)
    }

    /// Replaces the contents of a section, creating it if absent;
    /// indexer-style shorthand for `self.store_mut().set(section, contents)`.
    pub fn set(&mut self, section: impl Into<String>, contents: Section) {
        self.store.set(section, contents);
    }

    /// Fills the bound fields of `host` from the current store.
    ///
    /// # Errors
    ///
    /// Returns a lookup error when a bound entry is missing.
    pub fn fill<T: Bindable>(&self, host: &mut T) -> Result<(), IniError> {
        bind::fill(&self.store, host)
    }

    /// Merges `hosts` into the store and rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileWrite`] if the file cannot be written.
    pub fn save(&mut self, hosts: &[&dyn BindingSource]) -> Result<(), IniError> {
        bind::save(&mut self.store, &self.path, hosts)
    }
}
