//! Key + level sheets (`Names_*.csv`, `Descriptions_*.csv`, `Titles_*.csv`).
//!
//! Layout: `Key,Level,<lang 1>,<lang 2>,...`. The same key appears once per
//! level and levels are not guaranteed to be sorted, so entries keep file
//! order rather than being grouped by key.

use crate::{
    error::Error,
    formats::{SheetKind, parse_keyed_rows},
    table::Table,
    traits::Parser,
    types::KeyLevelEntry,
};

impl Parser for Vec<KeyLevelEntry> {
    fn from_table(table: &Table) -> Result<Self, Error> {
        parse_keyed_rows(
            table,
            SheetKind::Name.language_offset(),
            |row, translations| {
                Ok(KeyLevelEntry {
                    key: table.cell(row, 0)?.to_string(),
                    level: table.int_cell(row, 1)?,
                    translations,
                })
            },
        )
    }
}
