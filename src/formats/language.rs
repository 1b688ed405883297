//! The language registry (`LanguageEnable.csv`).
//!
//! Unlike the translation sheets this table is transposed: one row per
//! attribute, one column per language, and column 0 holds the attribute
//! label. Rows are read by position, not by label.

use crate::{error::Error, table::Table, traits::Parser, types::LanguageConfig};

const ROW_NAME: usize = 0;
const ROW_NATIVE_NAME: usize = 1;
const ROW_ENABLED: usize = 2;
const ROW_EXTERNAL_FONT: usize = 3;
const ROW_FONT_NAME: usize = 4;
const ROW_FULL_WIDTH: usize = 5;
const ROW_FONT_SIZE: usize = 6;
const ROW_OFFSET: usize = 7;
const ROW_OFFSET_FANCY: usize = 8;
const ROW_OFFSET_DIALOG: usize = 9;
const ROW_CHARACTER_WIDTH: usize = 10;
const ROW_CHARACTER_WIDTH_FANCY: usize = 11;
const ROW_CHARACTER_WIDTH_DIALOG: usize = 12;

/// Number of attribute rows the registry must provide.
pub const LANGUAGE_ROW_COUNT: usize = ROW_CHARACTER_WIDTH_DIALOG + 1;

fn parse_language(table: &Table, column: usize) -> Result<LanguageConfig, Error> {
    Ok(LanguageConfig {
        name: table.cell(ROW_NAME, column)?.to_string(),
        native_name: table.cell(ROW_NATIVE_NAME, column)?.to_string(),
        enabled: table.bool_cell(ROW_ENABLED, column)?,
        external_font: table.bool_cell(ROW_EXTERNAL_FONT, column)?,
        font_name: table.cell(ROW_FONT_NAME, column)?.to_string(),
        full_width: table.bool_cell(ROW_FULL_WIDTH, column)?,
        font_size: table.int_cell(ROW_FONT_SIZE, column)?,
        offset_amount: table.int_cell(ROW_OFFSET, column)?,
        offset_amount_fancy: table.int_cell(ROW_OFFSET_FANCY, column)?,
        offset_amount_dialog: table.int_cell(ROW_OFFSET_DIALOG, column)?,
        character_width: table.int_cell(ROW_CHARACTER_WIDTH, column)?,
        character_width_fancy: table.int_cell(ROW_CHARACTER_WIDTH_FANCY, column)?,
        character_width_dialog: table.int_cell(ROW_CHARACTER_WIDTH_DIALOG, column)?,
    })
}

impl Parser for Vec<LanguageConfig> {
    /// One record per language column of the `Lang` row, in column order.
    /// Rows past the thirteenth are ignored.
    fn from_table(table: &Table) -> Result<Self, Error> {
        if table.len() < LANGUAGE_ROW_COUNT {
            return Err(Error::MissingRow { row: table.len() });
        }

        let count = table.row(ROW_NAME)?.len().saturating_sub(1);
        (1..=count)
            .map(|column| parse_language(table, column))
            .collect()
    }
}
