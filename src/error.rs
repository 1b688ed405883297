//! All error types for the rns-babel crate.
//!
//! These are returned from every fallible operation (opening, decoding,
//! parsing sheets and ingesting a game folder).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing source: {0}")]
    MissingSource(String),

    #[error("malformed table: {0}")]
    MalformedTable(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot convert `{value}` at row {row}, column {column} to {expected}")]
    FieldConversion {
        row: usize,
        column: usize,
        value: String,
        expected: &'static str,
    },

    #[error("row {row} is missing")]
    MissingRow { row: usize },

    #[error("row {row} has no column {column}")]
    MissingColumn { row: usize, column: usize },

    #[error("unknown sheet kind `{0}`")]
    UnknownSheetKind(String),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl Error {
    /// Creates a new field conversion error for the cell at `row`/`column`.
    pub fn field_conversion(
        row: usize,
        column: usize,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Error::FieldConversion {
            row,
            column,
            value: value.into(),
            expected,
        }
    }
}
