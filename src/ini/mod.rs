//! INI reading and writing.
//!
//! This module provides:
//! - Line classification ([`LineClassifier`], [`Line`])
//! - The sectioned key-value store ([`Store`], [`Section`])
//! - Parsing ([`Parser`], [`parse`])
//! - Serialization ([`writer`])
//! - A path-bound document handle ([`IniFile`])
//!
//! # Dialect
//!
//! - Section header: `[name]`, where `name` holds ASCII letters and dots
//!   only. Headers with other characters are ignored and the previous
//!   section stays current.
//! - Comment: a line starting with a comment marker (`;` by default), or
//!   an inline marker that cuts off the rest of a key-value line.
//! - Entry: `key=value` with exactly one `=`; anything else aborts parsing.
//! - Entries before the first valid header go to the implicit section
//!   `""`, which is written back as `[]`.
//! - A repeated header adds to the existing section.

pub mod defaults;
mod error;
mod file;
mod line;
mod parser;
mod store;
pub mod writer;

#[cfg(test)]
mod file_tests;
#[cfg(test)]
mod store_tests;

pub use error::IniError;
pub use file::IniFile;
pub use line::{Line, LineClassifier};
pub use parser::{Parser, parse};
pub use store::{Section, Store};
