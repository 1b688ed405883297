//! Core types for rns-babel.
//! Sheet parsers decode into these; the web UI and dashboard read them.

use std::{fmt::Display, num::ParseIntError};

use serde::{Deserialize, Serialize};

/// Rendering configuration of one supported language.
///
/// One record exists per language column of `LanguageEnable.csv`. The order of
/// those records is the canonical language order used by every other sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// Name of the language (`Lang` row).
    pub name: String,

    /// Name of the language in its own script (`Desc` row).
    pub native_name: String,

    /// Whether the language can be selected in game.
    pub enabled: bool,

    /// Whether the language renders with an external font.
    pub external_font: bool,

    /// Name of the external font, only meaningful with `external_font` set.
    pub font_name: String,

    /// Whether the language uses full width glyphs (e.g. Japanese).
    pub full_width: bool,

    pub font_size: i32,

    pub offset_amount: i32,
    pub offset_amount_fancy: i32,
    pub offset_amount_dialog: i32,

    /// Width assigned to each character.
    pub character_width: i32,
    /// Width assigned to each character of fancy text.
    pub character_width_fancy: i32,
    /// Width assigned to each character inside dialogue boxes.
    pub character_width_dialog: i32,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            native_name: String::new(),
            enabled: true,
            external_font: false,
            font_name: String::new(),
            full_width: false,
            font_size: 55,
            offset_amount: 3,
            offset_amount_fancy: 0,
            offset_amount_dialog: 0,
            character_width: 40,
            character_width_fancy: 56,
            character_width_dialog: 40,
        }
    }
}

/// The text of one entry in one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Translation {
    /// Language name, as written in the sheet header.
    pub language: String,
    pub value: String,
}

impl Translation {
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            value: value.into(),
        }
    }
}

impl Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.language, self.value)
    }
}

fn find_translation<'a>(translations: &'a [Translation], language: &str) -> Option<&'a str> {
    translations
        .iter()
        .find(|t| t.language == language)
        .map(|t| t.value.as_str())
}

/// One row of a key-indexed sheet (`Strings*.csv`).
///
/// A row whose key cell is empty is kept as `KeyEntry::default()` so row
/// positions stay aligned with the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct KeyEntry {
    pub key: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl KeyEntry {
    pub fn is_placeholder(&self) -> bool {
        self.key.is_empty()
    }

    /// Gets the translation for a specific language.
    pub fn translation(&self, language: &str) -> Option<&str> {
        find_translation(&self.translations, language)
    }
}

/// One row of a key and level indexed sheet (names, descriptions, titles).
///
/// Keys repeat across levels and levels are not sorted within a file, so rows
/// are stored in file order. Blank rows become `KeyLevelEntry::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct KeyLevelEntry {
    pub key: String,
    pub level: i32,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl KeyLevelEntry {
    pub fn is_placeholder(&self) -> bool {
        self.key.is_empty()
    }

    /// Gets the translation for a specific language.
    pub fn translation(&self, language: &str) -> Option<&str> {
        find_translation(&self.translations, language)
    }
}

/// A dialogue cell that holds either a number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Text(String),
}

impl CellValue {
    /// Classifies a raw cell: a cell starting with an ASCII digit is an
    /// integer, anything else (including an empty cell) is text.
    ///
    /// Fails when a digit-led cell is not a valid integer, e.g. `12abc`.
    pub fn classify(cell: &str) -> Result<Self, ParseIntError> {
        if cell.as_bytes().first().is_some_and(u8::is_ascii_digit) {
            cell.parse().map(CellValue::Integer)
        } else {
            Ok(CellValue::Text(cell.to_string()))
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(value) => Some(*value),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Integer(_) => None,
            CellValue::Text(value) => Some(value),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Text(value) => write!(f, "{}", value),
        }
    }
}

/// One row of a dialogue file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DialogueEntry {
    /// Line type code.
    pub kind: i32,
    /// Flag or script reference; numeric ids and script names both occur.
    pub flag_script: CellValue,
    pub expression_var0: CellValue,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl DialogueEntry {
    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }

    /// Gets the translation for a specific language.
    pub fn translation(&self, language: &str) -> Option<&str> {
        find_translation(&self.translations, language)
    }
}
