//! Tabular CSV datasets and the load-boundary error type.
//!
//! A [`Dataset`] is an ordered set of named numeric columns of equal length,
//! implicitly indexed by row position. It is loaded once per file selection
//! and replaced wholesale on the next load. Malformed input is rejected here,
//! at the load boundary, with a [`DatasetError`] naming the offending row and
//! column; "no file selected" is not an error and is represented by the
//! absence of a dataset.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Everything that can go wrong while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// The input has no header row at all.
    #[error("input contains no header row")]
    Empty,
    /// A data row whose field count differs from the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A field that does not parse as a number.
    #[error("line {line}, column {column:?}: not a number: {value:?}")]
    NonNumeric {
        line: usize,
        column: String,
        value: String,
    },
}

/// One named column of numeric values.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// An immutable, positionally-indexed table of numeric columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Read a CSV file with a header row from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Parse CSV with a header row from any buffered reader.
    ///
    /// Columns are read positionally; every data field must parse as `f64`.
    /// Empty lines are ignored. Line numbers in errors are 1-based physical
    /// line numbers (the header is line 1).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DatasetError> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(DatasetError::Empty),
        };
        let mut columns: Vec<Column> = header
            .split(',')
            .map(|name| Column {
                name: name.trim().to_string(),
                values: Vec::new(),
            })
            .collect();
        if columns.is_empty() || (columns.len() == 1 && columns[0].name.is_empty()) {
            return Err(DatasetError::Empty);
        }

        for (idx, line) in lines.enumerate() {
            let line_no = idx + 2;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != columns.len() {
                return Err(DatasetError::RaggedRow {
                    line: line_no,
                    expected: columns.len(),
                    found: fields.len(),
                });
            }
            for (column, field) in columns.iter_mut().zip(fields) {
                let value: f64 =
                    field
                        .trim()
                        .parse()
                        .map_err(|_| DatasetError::NonNumeric {
                            line: line_no,
                            column: column.name.clone(),
                            value: field.trim().to_string(),
                        })?;
                column.values.push(value);
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows. All columns have the same length by construction.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }
}
