//! Dialogue files.
//!
//! Layout: `Type,FlagScript,ExpressionVar0,<lang 1>,...`. The type code is
//! always numeric; the two following cells hold either a number or a name,
//! decided per cell by [`CellValue::classify`].

use crate::{
    error::Error,
    formats::{SheetKind, parse_keyed_rows},
    table::Table,
    traits::Parser,
    types::{CellValue, DialogueEntry},
};

fn classify_cell(table: &Table, row: usize, column: usize) -> Result<CellValue, Error> {
    let value = table.cell(row, column)?;
    CellValue::classify(value).map_err(|_| Error::field_conversion(row, column, value, "integer"))
}

impl Parser for Vec<DialogueEntry> {
    fn from_table(table: &Table) -> Result<Self, Error> {
        parse_keyed_rows(
            table,
            SheetKind::Dialogue.language_offset(),
            |row, translations| {
                Ok(DialogueEntry {
                    kind: table.int_cell(row, 0)?,
                    flag_script: classify_cell(table, row, 1)?,
                    expression_var0: classify_cell(table, row, 2)?,
                    translations,
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Translation;
    use indoc::indoc;

    #[test]
    fn test_mixed_integer_and_text_cells() {
        let content = indoc! {"
            Type,FlagScript,ExpressionVar0,English,French
            1,12,happy,Hi!,Salut !
            2,wolf_intro,3,Grr.,Grr.
            ,,,,
            0,,,...,...
        "};
        let entries = Vec::<DialogueEntry>::from_str(content).unwrap();
        assert_eq!(entries.len(), 4);

        assert_eq!(entries[0].kind, 1);
        assert_eq!(entries[0].flag_script, CellValue::Integer(12));
        assert_eq!(
            entries[0].expression_var0,
            CellValue::Text("happy".to_string())
        );
        assert_eq!(
            entries[0].translations,
            vec![
                Translation::new("English", "Hi!"),
                Translation::new("French", "Salut !"),
            ]
        );

        assert_eq!(
            entries[1].flag_script,
            CellValue::Text("wolf_intro".to_string())
        );
        assert_eq!(entries[1].expression_var0, CellValue::Integer(3));

        assert!(entries[2].is_placeholder());

        assert_eq!(entries[3].kind, 0);
        assert_eq!(entries[3].flag_script, CellValue::Text(String::new()));
        assert_eq!(entries[3].translation("English"), Some("..."));
    }

    #[test]
    fn test_non_integer_type_aborts_parse() {
        let content = "Type,FlagScript,ExpressionVar0,English\nnarrator,1,1,Hello\n";
        assert!(matches!(
            Vec::<DialogueEntry>::from_str(content),
            Err(Error::FieldConversion { row: 1, column: 0, .. })
        ));
    }

    #[test]
    fn test_digit_led_cell_that_is_not_an_integer_aborts_parse() {
        let content = "Type,FlagScript,ExpressionVar0,English\n1,2nd_flag,0,Hello\n";
        match Vec::<DialogueEntry>::from_str(content).unwrap_err() {
            Error::FieldConversion {
                row,
                column,
                value,
                expected,
            } => {
                assert_eq!((row, column), (1, 1));
                assert_eq!(value, "2nd_flag");
                assert_eq!(expected, "integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_expression_column() {
        let content = "Type,FlagScript,ExpressionVar0,English\n1,2\n";
        assert!(matches!(
            Vec::<DialogueEntry>::from_str(content),
            Err(Error::MissingColumn { row: 1, column: 2 })
        ));
    }
}
