//! Options controlling which files an ingestion run reads.

use std::path::{Path, PathBuf};

use crate::formats::SheetKind;

pub const DEFAULT_DATA_DIR: &str = "Data";
pub const DEFAULT_LANGUAGE_FILE: &str = "LanguageEnable.csv";

pub const KNOWN_NAME_FILES: [&str; 5] = ["HBS", "Item", "Move", "Potion", "Trinkets"];
pub const KNOWN_DESCRIPTION_FILES: [&str; 5] = ["HBS", "Item", "Move", "Potion", "Trinkets"];
pub const KNOWN_TITLE_FILES: [&str; 3] = ["Character", "Enemy", "NPC"];
/// Suffixed string sheets; the unsuffixed `Strings.csv` is always read too.
pub const KNOWN_STRING_FILES: [&str; 8] = [
    "Art_Description",
    "Art_Title",
    "Effect",
    "Intro",
    "Item",
    "Menu",
    "Music",
    "Unlock",
];
pub const KNOWN_STRING_ENUM_FILES: [&str; 1] = ["Dialog"];
pub const KNOWN_DIALOGUE_FILES: [&str; 9] = [
    "birds",
    "dragon",
    "frog",
    "hearts",
    "mouse",
    "other",
    "shopkeeper",
    "test",
    "wolf",
];

/// One file an ingestion run will parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub kind: SheetKind,
    pub path: PathBuf,
}

/// Ingestion behavior options for [`crate::ingest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Folder holding the sheets, relative to the game root.
    pub data_dir: PathBuf,
    /// Language registry file name inside `data_dir`.
    pub language_file: String,
    pub name_files: Vec<String>,
    pub description_files: Vec<String>,
    pub title_files: Vec<String>,
    pub string_files: Vec<String>,
    pub string_enum_files: Vec<String>,
    /// Dialogue files are listed for consumers but not ingested.
    pub dialogue_files: Vec<String>,
}

fn to_owned_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            language_file: DEFAULT_LANGUAGE_FILE.to_string(),
            name_files: to_owned_list(&KNOWN_NAME_FILES),
            description_files: to_owned_list(&KNOWN_DESCRIPTION_FILES),
            title_files: to_owned_list(&KNOWN_TITLE_FILES),
            string_files: to_owned_list(&KNOWN_STRING_FILES),
            string_enum_files: to_owned_list(&KNOWN_STRING_ENUM_FILES),
            dialogue_files: to_owned_list(&KNOWN_DIALOGUE_FILES),
        }
    }
}

impl IngestOptions {
    /// Creates options for the game's known file set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_language_file(mut self, language_file: impl Into<String>) -> Self {
        self.language_file = language_file.into();
        self
    }

    pub fn with_name_files(mut self, files: Vec<String>) -> Self {
        self.name_files = files;
        self
    }

    pub fn with_description_files(mut self, files: Vec<String>) -> Self {
        self.description_files = files;
        self
    }

    pub fn with_title_files(mut self, files: Vec<String>) -> Self {
        self.title_files = files;
        self
    }

    pub fn with_string_files(mut self, files: Vec<String>) -> Self {
        self.string_files = files;
        self
    }

    pub fn with_string_enum_files(mut self, files: Vec<String>) -> Self {
        self.string_enum_files = files;
        self
    }

    pub fn with_dialogue_files(mut self, files: Vec<String>) -> Self {
        self.dialogue_files = files;
        self
    }

    /// Path of the language registry under `root`.
    pub fn language_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir).join(&self.language_file)
    }

    /// Every sheet to parse under `root`, in category order: names,
    /// descriptions, titles, `Strings.csv`, strings, string enums.
    pub fn sheet_sources(&self, root: &Path) -> Vec<SheetSource> {
        let data_dir = root.join(&self.data_dir);
        let suffixed = |kind: SheetKind, name: &str| {
            let prefix = kind.file_prefix().unwrap_or_default();
            SheetSource {
                kind,
                path: data_dir.join(format!("{prefix}_{name}.csv")),
            }
        };

        let mut sources = Vec::with_capacity(self.expected_sheet_count());
        sources.extend(self.name_files.iter().map(|n| suffixed(SheetKind::Name, n)));
        sources.extend(
            self.description_files
                .iter()
                .map(|n| suffixed(SheetKind::Description, n)),
        );
        sources.extend(self.title_files.iter().map(|n| suffixed(SheetKind::Title, n)));
        sources.push(SheetSource {
            kind: SheetKind::String,
            path: data_dir.join("Strings.csv"),
        });
        sources.extend(
            self.string_files
                .iter()
                .map(|n| suffixed(SheetKind::String, n)),
        );
        sources.extend(
            self.string_enum_files
                .iter()
                .map(|n| suffixed(SheetKind::StringEnum, n)),
        );
        sources
    }

    /// Number of sheets [`IngestOptions::sheet_sources`] yields.
    pub fn expected_sheet_count(&self) -> usize {
        self.name_files.len()
            + self.description_files.len()
            + self.title_files.len()
            + 1
            + self.string_files.len()
            + self.string_enum_files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sheet_sources() {
        let options = IngestOptions::new();
        let sources = options.sheet_sources(Path::new("game"));
        assert_eq!(sources.len(), 23);
        assert_eq!(sources.len(), options.expected_sheet_count());

        assert_eq!(
            sources[0],
            SheetSource {
                kind: SheetKind::Name,
                path: PathBuf::from("game/Data/Names_HBS.csv"),
            }
        );
        assert_eq!(sources[5].kind, SheetKind::Description);
        assert_eq!(
            sources[5].path,
            PathBuf::from("game/Data/Descriptions_HBS.csv")
        );
        assert_eq!(sources[10].path, PathBuf::from("game/Data/Titles_Character.csv"));
        assert_eq!(sources[13].kind, SheetKind::String);
        assert_eq!(sources[13].path, PathBuf::from("game/Data/Strings.csv"));
        assert_eq!(
            sources[14].path,
            PathBuf::from("game/Data/Strings_Art_Description.csv")
        );
        assert_eq!(
            sources[22],
            SheetSource {
                kind: SheetKind::StringEnum,
                path: PathBuf::from("game/Data/Strings_Dialog.csv"),
            }
        );
    }

    #[test]
    fn test_language_path() {
        let options = IngestOptions::new();
        assert_eq!(
            options.language_path(Path::new("game")),
            PathBuf::from("game/Data/LanguageEnable.csv")
        );
        let options = options
            .with_data_dir("Localization")
            .with_language_file("Languages.csv");
        assert_eq!(
            options.language_path(Path::new("game")),
            PathBuf::from("game/Localization/Languages.csv")
        );
    }

    #[test]
    fn test_custom_lists() {
        let options = IngestOptions::new()
            .with_name_files(vec!["Item".to_string()])
            .with_description_files(Vec::new())
            .with_title_files(Vec::new())
            .with_string_files(vec!["Menu".to_string()])
            .with_string_enum_files(Vec::new());
        let sources = options.sheet_sources(Path::new("."));
        let kinds: Vec<SheetKind> = sources.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SheetKind::Name, SheetKind::String, SheetKind::String]
        );
        assert_eq!(options.expected_sheet_count(), 3);
    }

    #[test]
    fn test_dialogue_files_are_listed_but_not_sourced() {
        let options = IngestOptions::new();
        assert_eq!(options.dialogue_files.len(), 9);
        assert!(
            options
                .sheet_sources(Path::new("."))
                .iter()
                .all(|s| s.kind != SheetKind::Dialogue)
        );
    }
}
