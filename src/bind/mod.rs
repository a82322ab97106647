//! Declarative binding between store entries and struct fields.
//!
//! A bindable type publishes a static table of [`FieldBinding`]s, each
//! pairing a [`Binding`] descriptor with a getter and a setter for one
//! `String` field. The binder walks that table in both directions:
//!
//! - [`fill`] copies values from a [`Store`](crate::ini::Store) into the host;
//! - [`export`] / [`save`] copy host values back into the store.
//!
//! Entries lacking either accessor are not read-write and are skipped by
//! both directions. Key-only descriptors are resolved on reads but never
//! written back.
//!
//! The [`impl_bindable!`](crate::impl_bindable) macro generates the table:
//!
//! ```
//! use striking::impl_bindable;
//! use striking::bind::fill;
//! use striking::ini::Parser;
//!
//! #[derive(Default)]
//! struct Settings {
//!     owner_name: String,
//!     server: String,
//!     name: String,
//! }
//!
//! impl_bindable!(Settings {
//!     owner_name => ("owner", "name"),
//!     server => ("database", "server"),
//!     name => "name",
//! });
//!
//! let store = Parser::new()
//!     .parse_str("[owner]\nname=John Doe\n[database]\nserver=192.0.2.62\n")
//!     .unwrap();
//!
//! let mut settings = Settings::default();
//! fill(&store, &mut settings).unwrap();
//!
//! assert_eq!(settings.owner_name, "John Doe");
//! assert_eq!(settings.server, "192.0.2.62");
//! assert_eq!(settings.name, "John Doe");
//! ```

mod binder;


pub use binder::{BindingSource, export, fill, save};

use std::fmt;

use crate::ini::{IniError, Store};

/// Where a field's value lives in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Only the key is given; the section is the first one containing it.
    KeyOnly(&'static str),

    /// Explicit section and key.
    SectionAndKey {
        /// Section name
        section: &'static str,
        /// Key within the section
        key: &'static str,
    },
}

impl Binding {
    /// Creates a key-only binding.
    #[must_use]
    pub const fn key(key: &'static str) -> Self {
        Self::KeyOnly(key)
    }

    /// Creates a binding with an explicit section.
    #[must_use]
    pub const fn section_key(section: &'static str, key: &'static str) -> Self {
        Self::SectionAndKey { section, key }
    }

    /// Returns the key part of the binding.
    #[must_use]
    pub const fn key_name(&self) -> &'static str {
        match self {
            Self::KeyOnly(key) | Self::SectionAndKey { key, .. } => *key,
        }
    }

    /// Resolves the section this binding refers to.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::NoSectionForKey`] when a key-only binding matches
    /// no section.
    pub fn resolve<'a>(&self, store: &'a Store) -> Result<&'a str, IniError> {
        match self {
            Self::KeyOnly(key) => store.section_of_key(key),
            Self::SectionAndKey { section, .. } => Ok(*section),
        }
    }
}

impl From<&'static str> for Binding {
    fn from(key: &'static str) -> Self {
        Self::KeyOnly(key)
    }
}

impl From<(&'static str, &'static str)> for Binding {
    fn from((section, key): (&'static str, &'static str)) -> Self {
        Self::SectionAndKey { section, key }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyOnly(key) => write!(f, "{key}"),
            Self::SectionAndKey { section, key } => write!(f, "[{section}] {key}"),
        }
    }
}

/// Reads a field as a string.
pub type Getter<T> = fn(&T) -> String;

/// Assigns a string to a field.
pub type Setter<T> = fn(&mut T, String);

/// One binding descriptor attached to one field of `T`.
///
/// A field may carry several descriptors; it then appears once per
/// descriptor, and the last one processed wins on reads.
pub struct FieldBinding<T> {
    field: &'static str,
    binding: Binding,
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

impl<T> FieldBinding<T> {
    /// Creates a read-write field binding.
    #[must_use]
    pub fn new(
        field: &'static str,
        binding: impl Into<Binding>,
        getter: Getter<T>,
        setter: Setter<T>,
    ) -> Self {
        Self {
            field,
            binding: binding.into(),
            getter: Some(getter),
            setter: Some(setter),
        }
    }

    /// Creates a binding for a field that can only be read.
    ///
    /// Such entries are skipped by the binder.
    #[must_use]
    pub fn read_only(field: &'static str, binding: impl Into<Binding>, getter: Getter<T>) -> Self {
        Self {
            field,
            binding: binding.into(),
            getter: Some(getter),
            setter: None,
        }
    }

    /// Creates a binding for a field that can only be assigned.
    ///
    /// Such entries are skipped by the binder.
    #[must_use]
    pub fn write_only(field: &'static str, binding: impl Into<Binding>, setter: Setter<T>) -> Self {
        Self {
            field,
            binding: binding.into(),
            getter: None,
            setter: Some(setter),
        }
    }

    /// Name of the bound field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// The binding descriptor.
    #[must_use]
    pub const fn binding(&self) -> Binding {
        self.binding
    }

    /// Returns both accessors when the field is read-write.
    #[must_use]
    pub fn accessors(&self) -> Option<(Getter<T>, Setter<T>)> {
        self.getter.zip(self.setter)
    }
}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field", &self.field)
            .field("binding", &self.binding)
            .field("readable", &self.getter.is_some())
            .field("writable", &self.setter.is_some())
            .finish()
    }
}

/// A type whose fields are bound to store entries.
///
/// Usually implemented through [`impl_bindable!`](crate::impl_bindable).
pub trait Bindable: Sized {
    /// Returns the binding table, in field declaration order.
    fn bindings() -> Vec<FieldBinding<Self>>;
}

/// Implements [`Bindable`] for a struct with `String` fields.
///
/// Each entry maps a field to either a bare key (`"name"`) or a
/// `(section, key)` pair. A field may be listed more than once.
///
/// ```
/// use striking::impl_bindable;
///
/// struct Database {
///     server: String,
///     user: String,
/// }
///
/// impl_bindable!(Database {
///     server => ("database", "server"),
///     user => "user",
/// });
/// ```
#[macro_export]
macro_rules! impl_bindable {
    ($host:ty { $($field:ident => $binding:expr),* $(,)? }) => {
        impl $crate::bind::Bindable for $host {
            fn bindings() -> ::std::vec::Vec<$crate::bind::FieldBinding<Self>> {
                ::std::vec![$(
                    $crate::bind::FieldBinding::<Self>::new(
                        ::core::stringify!($field),
                        $binding,
                        |host: &Self| ::std::string::ToString::to_string(&host.$field),
                        |host: &mut Self, value: ::std::string::String| host.$field = value,
                    )
                ),*]
            }
        }
    };
}
