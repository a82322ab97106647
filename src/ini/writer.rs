//! INI serialization.
//!
//! Emits every section as a `[name]` header followed by one `key=value` line
//! per entry, in store order. Values are written verbatim: no quoting, no
//! escaping.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{IniError, Store};

/// Writes the whole store to `out`.
///
/// # Errors
///
/// Returns any error produced by the underlying writer.
pub fn write_store<W: Write>(store: &Store, out: &mut W) -> io::Result<()> {
    write!(out, "{store}")
}

/// Truncates the file at `path` and writes the whole store to it.
///
/// The file handle is flushed and closed before returning, on success and
/// on error alike.
///
/// # Errors
///
/// Returns [`IniError::FileWrite`] if the file cannot be created or written.
pub fn write_file(store: &Store, path: &Path) -> Result<(), IniError> {
    let to_error = |source: io::Error| IniError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    write_store(store, &mut out).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    tracing::info!(path = %path.display(), sections = store.len(), "Wrote INI file");
    Ok(())
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, entries) in self.iter() {
            writeln!(f, "[{name}]")?;
            for (key, value) in entries {
                writeln!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}
