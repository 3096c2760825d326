//! In-memory table of named, equal-length columns.

use crate::cell::Cell;
use crate::error::{Result, SplitError};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (CSV header).
    pub name: String,
    /// The column's cell values, one per row.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Returns the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the column has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered collection of named columns, all of equal length.
///
/// Columns are addressable both by 0-based position and by name. The
/// splitters never mutate an existing column; their output is the input
/// table with new columns appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a new empty table.
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Build a table from pre-made columns, validating equal lengths.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// All columns in positional order.
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at the given 0-based position.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// First column with the given name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in positional order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Append a column, enforcing the row-count invariant.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.len() != self.num_rows() {
            return Err(SplitError::RowCountMismatch {
                name: column.name,
                len: column.cells.len(),
                expected: self.num_rows(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Load a headered CSV file into a table.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Load headered CSV bytes into a table.
    pub fn from_csv_bytes(data: &[u8]) -> Result<Self> {
        Self::from_csv_reader(data)
    }

    /// Load headered CSV data from a reader.
    ///
    /// Empty fields become [`Cell::Null`]; everything else is text. Ragged
    /// records are a CSV error (the reader is not flexible).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|name| Column::new(name, Vec::new()))
            .collect();

        let mut record = csv::StringRecord::new();
        while csv_reader.read_record(&mut record)? {
            for (idx, field) in record.iter().enumerate() {
                let cell = if field.is_empty() {
                    Cell::Null
                } else {
                    Cell::text(field)
                };
                columns[idx].cells.push(cell);
            }
        }

        Ok(Self { columns })
    }

    /// Write the table as headered CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.columns.iter().map(|c| c.name.as_str()))?;
        for row in 0..self.num_rows() {
            csv_writer.write_record(self.columns.iter().map(|c| c.cells[row].to_string()))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the table as headered CSV to a file.
    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_csv(file)
    }
}
