//! Column detectors sharing the detect-then-perform protocol.
//!
//! Each detector is constructed against one table plus an ignore-set (and
//! thresholds where applicable). `detection` is a read-only classification
//! pass over the non-ignored columns; `performing` expands previously
//! detected columns into derived columns appended to a copy of the table.
//! Detection trusts nothing, performing trusts its indices: thresholds are
//! not rechecked.

pub mod num_alpha;
pub mod phone;
pub mod punctuation;

use crate::cell::Cell;
use crate::error::{Result, SplitError};
use crate::table::{Column, Table};
use foldhash::HashSet;

/// Two-phase contract shared by all column detectors.
pub trait Splitter {
    /// Classify columns, returning the ascending indices that match this
    /// detector's pattern class.
    fn detection(&self) -> Vec<usize>;

    /// Expand the given (previously detected) columns, returning the bound
    /// table with the derived columns appended. Original columns are never
    /// mutated, removed, or reordered.
    fn performing(&self, columns: &[usize]) -> Result<Table>;
}

/// All column indices minus the ignore-set, in ascending order.
pub(crate) fn candidate_columns(table: &Table, ignore: &HashSet<usize>) -> Vec<usize> {
    (0..table.num_columns())
        .filter(|idx| !ignore.contains(idx))
        .collect()
}

/// Fraction of a column's cells that parse as numbers.
pub(crate) fn numeric_ratio(cells: &[Cell]) -> f64 {
    let numeric = cells.iter().filter(|c| c.is_numeric()).count();
    numeric as f64 / cells.len() as f64
}

/// Reject tables with no rows up front; every match ratio divides by the
/// row count.
pub(crate) fn check_non_empty(table: &Table) -> Result<()> {
    if table.is_empty() {
        return Err(SplitError::EmptyTable);
    }
    Ok(())
}

/// Reject threshold fractions outside [0, 1].
pub(crate) fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SplitError::InvalidThreshold { name, value })
    }
}

/// Look up a caller-supplied column index, rejecting out-of-range values.
pub(crate) fn lookup_column(table: &Table, index: usize) -> Result<&Column> {
    table
        .column(index)
        .ok_or(SplitError::ColumnIndexOutOfRange {
            index,
            num_columns: table.num_columns(),
        })
}

/// Transpose per-row token lists (already padded to `width`) into `width`
/// new columns named `<base>_<tag>_<i>`, in left-to-right token order.
pub(crate) fn transpose_tokens(
    token_rows: &[Vec<Cell>],
    width: usize,
    base: &str,
    tag: &str,
) -> Vec<Column> {
    let mut columns = Vec::with_capacity(width);
    for idx in 0..width {
        let cells = token_rows.iter().map(|row| row[idx].clone()).collect();
        columns.push(Column::new(format!("{base}_{tag}_{idx}"), cells));
    }
    columns
}
