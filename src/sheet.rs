//! Parsed translation sheets.
//!
//! A [`Sheet`] is one parsed file tagged by its [`SheetKind`]. Entries are
//! stored in an index-aligned `Vec`: `entries[i]` is data row `i + 1` of the
//! source, and blank rows stay in place as placeholder entries because other
//! game tables refer to strings by row position.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::Error,
    formats::SheetKind,
    table::{Table, open_source},
    traits::Parser,
    types::{DialogueEntry, KeyEntry, KeyLevelEntry},
};

/// Entries of one sheet plus the file they were read from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SheetData<E> {
    /// Source file, if the sheet was read from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// One entry per data row, placeholders included.
    pub entries: Vec<E>,
}

impl<E> SheetData<E> {
    pub fn new(source: Option<PathBuf>, entries: Vec<E>) -> Self {
        Self { source, entries }
    }

    /// Returns the entry for a 1-based source row (row 0 is the header).
    pub fn row(&self, row: usize) -> Option<&E> {
        row.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }
}

impl SheetData<KeyEntry> {
    pub fn find(&self, key: &str) -> Option<&KeyEntry> {
        self.entries.iter().find(|e| !e.is_placeholder() && e.key == key)
    }
}

impl SheetData<KeyLevelEntry> {
    /// Finds the first row with `key`, whatever its level.
    pub fn find(&self, key: &str) -> Option<&KeyLevelEntry> {
        self.entries.iter().find(|e| !e.is_placeholder() && e.key == key)
    }

    pub fn find_level(&self, key: &str, level: i32) -> Option<&KeyLevelEntry> {
        self.entries
            .iter()
            .find(|e| !e.is_placeholder() && e.key == key && e.level == level)
    }
}

pub type NameSheet = SheetData<KeyLevelEntry>;
pub type DescriptionSheet = SheetData<KeyLevelEntry>;
pub type TitleSheet = SheetData<KeyLevelEntry>;
pub type StringSheet = SheetData<KeyEntry>;
pub type StringEnumSheet = SheetData<KeyEntry>;
pub type DialogueFile = SheetData<DialogueEntry>;

/// One parsed translation file. The variant is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Sheet {
    Name(NameSheet),
    Description(DescriptionSheet),
    Title(TitleSheet),
    String(StringSheet),
    StringEnum(StringEnumSheet),
    Dialogue(DialogueFile),
}

impl Sheet {
    /// Builds a sheet of `kind` from a decoded table.
    pub fn from_table(kind: SheetKind, table: &Table, source: Option<PathBuf>) -> Result<Self, Error> {
        Ok(match kind {
            SheetKind::Name => Sheet::Name(SheetData::new(
                source,
                Vec::<KeyLevelEntry>::from_table(table)?,
            )),
            SheetKind::Description => Sheet::Description(SheetData::new(
                source,
                Vec::<KeyLevelEntry>::from_table(table)?,
            )),
            SheetKind::Title => Sheet::Title(SheetData::new(
                source,
                Vec::<KeyLevelEntry>::from_table(table)?,
            )),
            SheetKind::String => {
                Sheet::String(SheetData::new(source, Vec::<KeyEntry>::from_table(table)?))
            }
            SheetKind::StringEnum => {
                Sheet::StringEnum(SheetData::new(source, Vec::<KeyEntry>::from_table(table)?))
            }
            SheetKind::Dialogue => Sheet::Dialogue(SheetData::new(
                source,
                Vec::<DialogueEntry>::from_table(table)?,
            )),
        })
    }

    /// Parses a sheet of `kind` from any reader.
    pub fn from_reader<R: Read>(kind: SheetKind, reader: R) -> Result<Self, Error> {
        Self::from_table(kind, &Table::from_reader(reader)?, None)
    }

    /// Opens and parses the sheet at `path`.
    ///
    /// The file handle is dropped before this returns, on success and on
    /// every error path.
    pub fn read_from<P: AsRef<Path>>(kind: SheetKind, path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let table = Table::from_reader(open_source(path)?)?;
        let sheet = Self::from_table(kind, &table, Some(path.to_path_buf()))?;
        debug!(
            path = %path.display(),
            kind = %kind,
            entries = sheet.len(),
            "parsed sheet"
        );
        Ok(sheet)
    }

    pub fn kind(&self) -> SheetKind {
        match self {
            Sheet::Name(_) => SheetKind::Name,
            Sheet::Description(_) => SheetKind::Description,
            Sheet::Title(_) => SheetKind::Title,
            Sheet::String(_) => SheetKind::String,
            Sheet::StringEnum(_) => SheetKind::StringEnum,
            Sheet::Dialogue(_) => SheetKind::Dialogue,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        match self {
            Sheet::Name(data) | Sheet::Description(data) | Sheet::Title(data) => {
                data.source.as_deref()
            }
            Sheet::String(data) | Sheet::StringEnum(data) => data.source.as_deref(),
            Sheet::Dialogue(data) => data.source.as_deref(),
        }
    }

    /// Number of entries, placeholders included.
    pub fn len(&self) -> usize {
        match self {
            Sheet::Name(data) | Sheet::Description(data) | Sheet::Title(data) => data.len(),
            Sheet::String(data) | Sheet::StringEnum(data) => data.len(),
            Sheet::Dialogue(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key + level entries, for name, description and title sheets.
    pub fn key_level_entries(&self) -> Option<&[KeyLevelEntry]> {
        match self {
            Sheet::Name(data) | Sheet::Description(data) | Sheet::Title(data) => {
                Some(data.entries.as_slice())
            }
            _ => None,
        }
    }

    /// Key entries, for string and string enum sheets.
    pub fn key_entries(&self) -> Option<&[KeyEntry]> {
        match self {
            Sheet::String(data) | Sheet::StringEnum(data) => Some(data.entries.as_slice()),
            _ => None,
        }
    }

    pub fn dialogue_entries(&self) -> Option<&[DialogueEntry]> {
        match self {
            Sheet::Dialogue(data) => Some(data.entries.as_slice()),
            _ => None,
        }
    }

    /// Writing sheets back to disk is not supported yet.
    pub fn update(&self) -> Result<(), Error> {
        Err(Error::NotImplemented("sheet update"))
    }
}
