//! Striking: INI configuration files bound to typed structs.
//!
//! A library for reading and writing flat, sectioned `key=value`
//! configuration files and copying their entries to and from struct
//! fields through declarative bindings.
//!
//! - [`ini`] parses files into a [`Store`], and writes a store back out.
//! - [`bind`] fills bound struct fields from a store and merges them back
//!   before saving.
//! - [`cli`] defines the command-line interface of the `striking` binary.

pub mod bind;
pub mod cli;
pub mod ini;


pub use bind::{Bindable, Binding, BindingSource, FieldBinding, fill, save};
pub use ini::{IniError, IniFile, Parser, Section, Store, parse};
