//! Key-only sheets (`Strings.csv`, `Strings_*.csv`).
//!
//! Layout: `Key,<lang 1>,<lang 2>,...`.

use crate::{
    error::Error,
    formats::{SheetKind, parse_keyed_rows},
    table::Table,
    traits::Parser,
    types::KeyEntry,
};

impl Parser for Vec<KeyEntry> {
    fn from_table(table: &Table) -> Result<Self, Error> {
        parse_keyed_rows(
            table,
            SheetKind::String.language_offset(),
            |row, translations| {
                Ok(KeyEntry {
                    key: table.cell(row, 0)?.to_string(),
                    translations,
                })
            },
        )
    }
}
