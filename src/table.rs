//! Raw table reading.
//!
//! Decodes a comma-separated source into rows of string cells. No semantic
//! checks happen here; the sheet parsers decide which cells they require and
//! use the accessors below to fail with a positioned error.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    str::FromStr,
};

use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};

use crate::error::Error;

/// A fully materialized table. Rows may be ragged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from already split rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Reads every record of a comma-separated source.
    ///
    /// The first line is kept as row 0; headers are interpreted by the sheet
    /// parsers, not by the reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Table { rows })
    }

    /// Reads a table from a string.
    pub fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(s.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cells of `row`, failing with [`Error::MissingRow`] past the end.
    pub fn row(&self, row: usize) -> Result<&[String], Error> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or(Error::MissingRow { row })
    }

    /// Returns a single cell, failing when the row or column does not exist.
    pub fn cell(&self, row: usize, column: usize) -> Result<&str, Error> {
        self.row(row)?
            .get(column)
            .map(String::as_str)
            .ok_or(Error::MissingColumn { row, column })
    }

    /// Parses a cell as a base-10 integer.
    pub fn int_cell<T: FromStr>(&self, row: usize, column: usize) -> Result<T, Error> {
        let value = self.cell(row, column)?;
        value
            .parse()
            .map_err(|_| Error::field_conversion(row, column, value, "integer"))
    }

    /// Parses a cell as a boolean literal (see [`parse_bool`]).
    pub fn bool_cell(&self, row: usize, column: usize) -> Result<bool, Error> {
        let value = self.cell(row, column)?;
        parse_bool(value).ok_or_else(|| Error::field_conversion(row, column, value, "boolean"))
    }
}

/// Parses the boolean literals used by the game's data files.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Opens a source file for table reading.
///
/// A byte order mark is honored and stripped, so UTF-16 exports are
/// transcoded to UTF-8 and UTF-8 exports lose the leading BOM that would
/// otherwise end up in the first header cell. A file that does not exist is
/// reported as [`Error::MissingSource`].
pub fn open_source<P: AsRef<Path>>(path: P) -> Result<DecodeReaderBytes<File, Vec<u8>>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingSource(path.display().to_string()),
        _ => Error::Io(e),
    })?;

    Ok(DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .strip_bom(true)
        .build(file))
}
