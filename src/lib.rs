#![forbid(unsafe_code)]
//! Typed ingestion of a game's localization spreadsheets.
//!
//! The game ships its translatable text as comma-separated sheets under
//! `Data/`: a language registry (`LanguageEnable.csv`) plus name,
//! description, title, string and dialogue sheets whose header row lists the
//! languages. This crate parses them into strongly-typed [`Sheet`]s.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rns_babel::{SheetKind, parse_game_files_concurrent};
//!
//! let files = parse_game_files_concurrent("path/to/game")?;
//! for language in files.enabled_languages() {
//!     println!("{} ({})", language.name, language.native_name);
//! }
//! println!("{} name sheets", files.sheets_of_kind(SheetKind::Name).count());
//! # Ok::<(), rns_babel::Error>(())
//! ```
//!
//! Single sheets can be parsed from any reader as well:
//!
//! ```rust
//! use rns_babel::{Sheet, SheetKind};
//!
//! let csv = "Key,English,French\ngreet,Hello,Bonjour\n,,\n";
//! let sheet = Sheet::from_reader(SheetKind::String, csv.as_bytes())?;
//! assert_eq!(sheet.len(), 2);
//! # Ok::<(), rns_babel::Error>(())
//! ```
//!
//! Blank rows are kept as placeholder entries: other game tables refer to
//! strings by row position, so entry `i` always matches data row `i + 1`.

pub mod error;
pub mod formats;
pub mod ingest;
pub mod options;
pub mod sheet;
pub mod table;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::SheetKind,
    ingest::{
        GameFiles, parse_game_files, parse_game_files_concurrent,
        parse_game_files_concurrent_with_options, parse_game_files_with_options,
        parse_sheets_concurrent,
    },
    options::{IngestOptions, SheetSource},
    sheet::{Sheet, SheetData},
    table::Table,
    types::{CellValue, DialogueEntry, KeyEntry, KeyLevelEntry, LanguageConfig, Translation},
};
