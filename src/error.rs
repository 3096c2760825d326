use std::io;
use thiserror::Error;

/// Error type for column splitting operations.
#[derive(Error, Debug)]
pub enum SplitError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Dynamically built split pattern failed to compile.
    #[error("Invalid split pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Table has no rows; match ratios would divide by zero.
    #[error("Table has no rows to analyze")]
    EmptyTable,

    /// Threshold outside the [0, 1] range.
    #[error("Threshold '{name}' must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// Column index past the end of the table.
    #[error("Column index {index} out of range for table with {num_columns} columns")]
    ColumnIndexOutOfRange { index: usize, num_columns: usize },

    /// Appended column length disagrees with the table's row count.
    #[error("Column '{name}' has {len} rows, expected {expected}")]
    RowCountMismatch {
        name: String,
        len: usize,
        expected: usize,
    },
}

/// Result type alias for splitting operations.
pub type Result<T> = std::result::Result<T, SplitError>;
