//! All sheet layouts understood by rns-babel.
//!
//! Every translation sheet shares one shape: row 0 is a header whose cells
//! from a fixed offset onward name the languages, and each following row is
//! one entry. The layouts differ only in the metadata columns before that
//! offset. This module provides [`SheetKind`] and the shared row walk.

pub mod dialogue;
pub mod key;
pub mod key_level;
pub mod language;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error::Error, table::Table, types::Translation};

/// Represents every kind of translation sheet found in the game's data folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SheetKind {
    /// `Names_*.csv`, key + level.
    Name,
    /// `Descriptions_*.csv`, key + level.
    Description,
    /// `Titles_*.csv`, key + level.
    Title,
    /// `Strings.csv` and `Strings_*.csv`, key only.
    String,
    /// Enumerated strings (`Strings_Dialog.csv`), handled like plain strings.
    StringEnum,
    /// Dialogue scripts: type, flag/script, expression, then languages.
    Dialogue,
}

impl SheetKind {
    pub const ALL: [SheetKind; 6] = [
        SheetKind::Name,
        SheetKind::Description,
        SheetKind::Title,
        SheetKind::String,
        SheetKind::StringEnum,
        SheetKind::Dialogue,
    ];

    /// Index of the first language column.
    pub fn language_offset(&self) -> usize {
        match self {
            SheetKind::Name | SheetKind::Description | SheetKind::Title => 2,
            SheetKind::String | SheetKind::StringEnum => 1,
            SheetKind::Dialogue => 3,
        }
    }

    /// File name prefix inside the data folder, if the kind lives there.
    pub fn file_prefix(&self) -> Option<&'static str> {
        match self {
            SheetKind::Name => Some("Names"),
            SheetKind::Description => Some("Descriptions"),
            SheetKind::Title => Some("Titles"),
            SheetKind::String | SheetKind::StringEnum => Some("Strings"),
            SheetKind::Dialogue => None,
        }
    }
}

impl Display for SheetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetKind::Name => write!(f, "name"),
            SheetKind::Description => write!(f, "description"),
            SheetKind::Title => write!(f, "title"),
            SheetKind::String => write!(f, "string"),
            SheetKind::StringEnum => write!(f, "string_enum"),
            SheetKind::Dialogue => write!(f, "dialogue"),
        }
    }
}

/// Accepts the [`Display`] names case-insensitively, plus the plural file
/// prefixes (`names`, `titles`, ...) and `dialog`.
///
/// Returns [`Error::UnknownSheetKind`] for anything else.
impl FromStr for SheetKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "name" | "names" => Ok(SheetKind::Name),
            "description" | "descriptions" => Ok(SheetKind::Description),
            "title" | "titles" => Ok(SheetKind::Title),
            "string" | "strings" => Ok(SheetKind::String),
            "string_enum" | "stringenum" => Ok(SheetKind::StringEnum),
            "dialogue" | "dialog" => Ok(SheetKind::Dialogue),
            other => Err(Error::UnknownSheetKind(other.to_string())),
        }
    }
}

/// Walks the data rows of a row-keyed sheet.
///
/// Rows with an empty key cell become `E::default()` at their position.
/// Every other row gets its translations paired with the header languages
/// (cells past `offset`, stopping at the shorter of row and header) and is
/// handed to `parse_row` together with its table row index for the metadata
/// columns. The first error aborts the walk.
pub(crate) fn parse_keyed_rows<E, F>(
    table: &Table,
    offset: usize,
    mut parse_row: F,
) -> Result<Vec<E>, Error>
where
    E: Default,
    F: FnMut(usize, Vec<Translation>) -> Result<E, Error>,
{
    let header = table.row(0)?;
    let languages = header.get(offset..).unwrap_or_default();

    let mut entries = Vec::with_capacity(table.len().saturating_sub(1));
    for (row, cells) in table.rows.iter().enumerate().skip(1) {
        if cells.first().is_none_or(String::is_empty) {
            entries.push(E::default());
            continue;
        }

        let translations = languages
            .iter()
            .zip(cells.iter().skip(offset))
            .map(|(language, value)| Translation::new(language.as_str(), value.as_str()))
            .collect();

        entries.push(parse_row(row, translations)?);
    }

    Ok(entries)
}
