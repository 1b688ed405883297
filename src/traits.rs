//! Traits for table-backed parsing in rns-babel.

use std::{io::Read, path::Path};

use crate::{
    error::Error,
    table::{Table, open_source},
};

/// A trait for parsing one localization table into a typed value.
///
/// Implementors only provide [`Parser::from_table`]; reading from files,
/// readers, strings and bytes is shared.
///
/// # Example
///
/// ```rust,no_run
/// use rns_babel::{traits::Parser, types::KeyEntry};
/// let entries = Vec::<KeyEntry>::read_from("Data/Strings_Menu.csv")?;
/// println!("{} rows", entries.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from an already decoded table.
    fn from_table(table: &Table) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from any reader.
    fn from_reader<R: Read>(reader: R) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_table(&Table::from_reader(reader)?)
    }

    /// Parse from file path. The file is closed before this returns.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(open_source(path)?)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(s.as_bytes())
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(bytes)
    }
}
