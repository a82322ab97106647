//! Two-way copying between a [`Store`] and bindable hosts.

use std::path::Path;

use crate::ini::{IniError, Store, writer};

use super::{Bindable, Binding};

/// Fills every read-write bound field of `host` from `store`.
///
/// Fields are processed in table order; a field listed under several
/// descriptors ends up with the value of the last one. On error, fields
/// processed before the failing entry keep their new values.
///
/// # Errors
///
/// Returns [`IniError::NoSectionForKey`] when a key-only binding matches no
/// section, and [`IniError::SectionNotFound`] / [`IniError::KeyNotFound`]
/// when the resolved entry is absent.
pub fn fill<T: Bindable>(store: &Store, host: &mut T) -> Result<(), IniError> {
    for entry in T::bindings() {
        let Some((_, setter)) = entry.accessors() else {
            tracing::debug!(field = entry.field(), "Skipping field that is not read-write");
            continue;
        };

        let binding = entry.binding();
        let section = binding.resolve(store)?;
        let value = store.value(section, binding.key_name())?;

        tracing::debug!(field = entry.field(), section, key = binding.key_name(), "Filling field");
        setter(host, value.to_string());
    }
    Ok(())
}

/// Copies every read-write field with an explicit section into `store`.
///
/// Key-only bindings are not written back. Missing sections are created.
pub fn export<T: Bindable>(host: &T, store: &mut Store) {
    for entry in T::bindings() {
        let Some((getter, _)) = entry.accessors() else {
            tracing::debug!(field = entry.field(), "Skipping field that is not read-write");
            continue;
        };

        match entry.binding() {
            Binding::SectionAndKey { section, key } => {
                store.set_value(section, key, getter(host));
            }
            Binding::KeyOnly(key) => {
                tracing::debug!(field = entry.field(), key, "Key-only binding is not saved");
            }
        }
    }
}

/// Object-safe view of a bindable host, used to save heterogeneous hosts
/// in one call.
pub trait BindingSource {
    /// Copies this host's bound fields into `store`.
    fn export_into(&self, store: &mut Store);
}

impl<T: Bindable> BindingSource for T {
    fn export_into(&self, store: &mut Store) {
        export(self, store);
    }
}

/// Merges `hosts` into `store`, then rewrites the file at `path`.
///
/// Hosts are applied in order, so a later host overwrites an earlier one
/// bound to the same section and key. With no hosts, the store is written
/// as is.
///
/// # Errors
///
/// Returns [`IniError::FileWrite`] if the file cannot be written.
pub fn save(store: &mut Store, path: &Path, hosts: &[&dyn BindingSource]) -> Result<(), IniError> {
    for host in hosts {
        host.export_into(store);
    }
    writer::write_file(store, path)
}
