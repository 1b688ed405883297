//! Reading a whole game folder.
//!
//! [`parse_game_files`] reads the language registry and then every known
//! sheet one after another, stopping at the first failure. The result keeps
//! category order, then file order within each category.
//!
//! [`parse_game_files_concurrent`] reads the registry first, then parses every
//! sheet on the rayon pool. Workers never panic on bad input: each one sends
//! its `Result` through a channel bounded to the number of sheets, and the
//! orchestrator drains exactly that many messages after the join. Sheets end
//! up in arrival order. Every failure is logged, and the first one received
//! is returned, so both variants either fully succeed or fail.

use std::{
    path::{Path, PathBuf},
    sync::mpsc,
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::Error,
    formats::SheetKind,
    options::{IngestOptions, SheetSource},
    sheet::Sheet,
    traits::Parser,
    types::LanguageConfig,
};

/// Everything parsed from one game folder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct GameFiles {
    /// Language registry, in canonical language order.
    pub languages: Vec<LanguageConfig>,

    /// Name, description, title, string and string enum sheets.
    pub sheets: Vec<Sheet>,

    /// Dialogue files. Not ingested yet, always empty.
    #[serde(default)]
    pub dialogues: Vec<Sheet>,
}

impl GameFiles {
    /// Iterates over the sheets of one kind, in stored order.
    pub fn sheets_of_kind(&self, kind: SheetKind) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter().filter(move |sheet| sheet.kind() == kind)
    }

    /// Finds the sheet read from `path`.
    pub fn sheet_by_source(&self, path: &Path) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.source() == Some(path))
    }

    /// Finds a language by its `Lang` name.
    pub fn language(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.name == name)
    }

    pub fn enabled_languages(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled)
    }
}

/// Parses the known file set under `root` sequentially.
pub fn parse_game_files<P: AsRef<Path>>(root: P) -> Result<GameFiles, Error> {
    parse_game_files_with_options(root, &IngestOptions::default())
}

/// Parses the file set described by `options` under `root` sequentially.
///
/// The first failing file aborts the run and its error is returned as is.
pub fn parse_game_files_with_options<P: AsRef<Path>>(
    root: P,
    options: &IngestOptions,
) -> Result<GameFiles, Error> {
    let root = root.as_ref();
    info!(root = %root.display(), "parsing game files");

    let languages = Vec::<LanguageConfig>::read_from(options.language_path(root))?;

    let sources = options.sheet_sources(root);
    let mut sheets = Vec::with_capacity(sources.len());
    for source in sources {
        sheets.push(Sheet::read_from(source.kind, &source.path)?);
    }

    info!(
        languages = languages.len(),
        sheets = sheets.len(),
        "parsed game files"
    );
    Ok(GameFiles {
        languages,
        sheets,
        dialogues: Vec::new(),
    })
}

/// Parses the known file set under `root` on the rayon pool.
pub fn parse_game_files_concurrent<P: AsRef<Path>>(root: P) -> Result<GameFiles, Error> {
    parse_game_files_concurrent_with_options(root, &IngestOptions::default())
}

/// Parses the file set described by `options` under `root` on the rayon pool.
///
/// Sheets are stored in arrival order. All workers run to completion even
/// when some fail; each failure is logged and the first one received is
/// returned.
pub fn parse_game_files_concurrent_with_options<P: AsRef<Path>>(
    root: P,
    options: &IngestOptions,
) -> Result<GameFiles, Error> {
    let root = root.as_ref();
    info!(root = %root.display(), "parsing game files concurrently");

    let languages = Vec::<LanguageConfig>::read_from(options.language_path(root))?;

    let results = parse_sheets_concurrent(options.sheet_sources(root));
    let mut sheets = Vec::with_capacity(results.len());
    let mut first_error = None;
    for (path, result) in results {
        match result {
            Ok(sheet) => sheets.push(sheet),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse sheet");
                first_error.get_or_insert(err);
            }
        }
    }
    if let Some(err) = first_error {
        return Err(err);
    }

    info!(
        languages = languages.len(),
        sheets = sheets.len(),
        "parsed game files"
    );
    Ok(GameFiles {
        languages,
        sheets,
        dialogues: Vec::new(),
    })
}

/// Parses every source in its own rayon task.
///
/// Returns one `(path, result)` pair per source, in the order the workers
/// finished. Failed sheets are reported alongside the successful ones, so
/// callers that tolerate partial results can use this directly.
pub fn parse_sheets_concurrent(
    sources: Vec<SheetSource>,
) -> Vec<(PathBuf, Result<Sheet, Error>)> {
    let launched = sources.len();
    let (tx, rx) = mpsc::sync_channel(launched);

    rayon::scope(|scope| {
        for source in sources {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = Sheet::read_from(source.kind, &source.path);
                // `rx` outlives the scope and the channel has room for every
                // worker, so this neither blocks nor fails.
                let _ = tx.send((source.path, result));
            });
        }
    });
    drop(tx);

    rx.iter().take(launched).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const LANGUAGES: &str = "Lang,English\nDesc,English\nenabled,1\nexternalFont,0\nfont,\nfullWidth,0\nfontSize,55\noffsetAmount,3\noffsetAmountFancy,0\noffsetAmountDialog,0\ncharacterWidth,40\ncharacterWidthFancy,56\ncharacterWidthDialog,40\n";

    fn small_options() -> IngestOptions {
        IngestOptions::new()
            .with_name_files(vec!["Item".to_string()])
            .with_description_files(vec!["Item".to_string()])
            .with_title_files(Vec::new())
            .with_string_files(vec!["Menu".to_string()])
            .with_string_enum_files(Vec::new())
    }

    fn write_small_game(root: &Path) {
        let data = root.join("Data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("LanguageEnable.csv"), LANGUAGES).unwrap();
        fs::write(data.join("Names_Item.csv"), "Key,Level,English\npotion,0,Potion\n").unwrap();
        fs::write(
            data.join("Descriptions_Item.csv"),
            "Key,Level,English\npotion,0,Heals you\n",
        )
        .unwrap();
        fs::write(data.join("Strings.csv"), "Key,English\nok,OK\n").unwrap();
        fs::write(data.join("Strings_Menu.csv"), "Key,English\nstart,Start\n").unwrap();
    }

    #[test]
    fn test_sequential_keeps_category_order() {
        let dir = tempfile::tempdir().unwrap();
        write_small_game(dir.path());

        let files = parse_game_files_with_options(dir.path(), &small_options()).unwrap();
        let kinds: Vec<SheetKind> = files.sheets.iter().map(Sheet::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SheetKind::Name,
                SheetKind::Description,
                SheetKind::String,
                SheetKind::String,
            ]
        );
        assert_eq!(files.languages.len(), 1);
        assert!(files.dialogues.is_empty());
        assert_eq!(files.sheets_of_kind(SheetKind::String).count(), 2);
        assert!(files.language("English").is_some());
        assert_eq!(files.enabled_languages().count(), 1);
        assert!(
            files
                .sheet_by_source(&dir.path().join("Data").join("Strings_Menu.csv"))
                .is_some()
        );
    }

    #[test]
    fn test_concurrent_collects_every_sheet() {
        let dir = tempfile::tempdir().unwrap();
        write_small_game(dir.path());

        let files =
            parse_game_files_concurrent_with_options(dir.path(), &small_options()).unwrap();
        assert_eq!(files.sheets.len(), 4);
        assert_eq!(files.sheets_of_kind(SheetKind::Name).count(), 1);
        assert_eq!(files.sheets_of_kind(SheetKind::Description).count(), 1);
        assert_eq!(files.sheets_of_kind(SheetKind::String).count(), 2);
    }

    #[test]
    fn test_concurrent_reports_failures_without_hanging() {
        let dir = tempfile::tempdir().unwrap();
        write_small_game(dir.path());
        fs::remove_file(dir.path().join("Data").join("Strings.csv")).unwrap();
        fs::write(
            dir.path().join("Data").join("Names_Item.csv"),
            "Key,Level,English\npotion,zero,Potion\n",
        )
        .unwrap();

        let results = parse_sheets_concurrent(small_options().sheet_sources(dir.path()));
        assert_eq!(results.len(), 4);
        let failures: Vec<&PathBuf> = results
            .iter()
            .filter(|(_, result)| result.is_err())
            .map(|(path, _)| path)
            .collect();
        assert_eq!(failures.len(), 2);
        assert!(failures.iter().any(|p| p.ends_with("Strings.csv")));
        assert!(failures.iter().any(|p| p.ends_with("Names_Item.csv")));

        let err = parse_game_files_concurrent_with_options(dir.path(), &small_options())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingSource(_) | Error::FieldConversion { .. }
        ));
    }

    #[test]
    fn test_no_sources_returns_immediately() {
        assert!(parse_sheets_concurrent(Vec::new()).is_empty());
    }
}
