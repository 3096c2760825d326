//! Phone-number column detection and normalization.

use super::{candidate_columns, check_non_empty, lookup_column, Splitter};
use crate::cell::Cell;
use crate::error::Result;
use crate::patterns::PHONE_PATTERN;
use crate::table::{Column, Table};
use foldhash::HashSet;
use rayon::prelude::*;

/// Detection threshold: strictly more than half of a column's rows must be
/// phone-shaped. A majority vote avoids false positives from ID-like
/// numeric columns while tolerating a minority of malformed entries.
const MATCH_RATIO: f64 = 0.5;

/// Name suffix for derived columns.
const SUFFIX: &str = "phone";

/// Detects columns whose values are mostly phone-number-shaped and expands
/// each into a normalized hyphen-joined number column.
///
/// # Example
///
/// ```
/// use colsplit::{Cell, Column, PhoneParser, Splitter, Table};
///
/// let table = Table::from_columns(vec![Column::new(
///     "contact",
///     vec![
///         Cell::text("(212) 555-1234"),
///         Cell::text("555-1234"),
///         Cell::text("not a phone"),
///     ],
/// )])
/// .unwrap();
///
/// let parser = PhoneParser::new(&table, []).unwrap();
/// let detected = parser.detection();
/// assert_eq!(detected, vec![0]);
///
/// let expanded = parser.performing(&detected).unwrap();
/// let phones = expanded.column_by_name("contact_phone").unwrap();
/// assert_eq!(phones.cells[0], Cell::text("212-555-1234"));
/// ```
#[derive(Debug)]
pub struct PhoneParser<'a> {
    table: &'a Table,
    ignore: HashSet<usize>,
}

impl<'a> PhoneParser<'a> {
    /// Bind a parser to a table and a set of column indices to skip.
    ///
    /// Fails with [`crate::SplitError::EmptyTable`] on a zero-row table.
    pub fn new(table: &'a Table, ignore: impl IntoIterator<Item = usize>) -> Result<Self> {
        check_non_empty(table)?;
        Ok(Self {
            table,
            ignore: ignore.into_iter().collect(),
        })
    }

    /// Majority-vote test: does the column look like phone numbers?
    fn is_phone(cells: &[Cell]) -> bool {
        let matches = cells
            .iter()
            .filter(|cell| PHONE_PATTERN.is_match(&cell.as_text()))
            .count();
        matches as f64 / cells.len() as f64 > MATCH_RATIO
    }

    /// Reassemble each matching row from its captured parts (area code,
    /// exchange, line number) joined by `-`. The extension group is captured
    /// by the pattern but excluded from the result. Non-matching rows yield
    /// an empty string.
    fn parse_column(column: &Column) -> Column {
        let cells = column
            .cells
            .iter()
            .map(|cell| {
                let text = cell.as_text();
                let number = match PHONE_PATTERN.captures(&text) {
                    Some(caps) => (1..=4)
                        .filter_map(|group| caps.get(group))
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join("-"),
                    None => String::new(),
                };
                Cell::text(number.trim_matches('-'))
            })
            .collect();
        Column::new(format!("{}_{SUFFIX}", column.name), cells)
    }
}

impl Splitter for PhoneParser<'_> {
    fn detection(&self) -> Vec<usize> {
        candidate_columns(self.table, &self.ignore)
            .into_par_iter()
            .filter(|&idx| Self::is_phone(&self.table.columns()[idx].cells))
            .collect()
    }

    fn performing(&self, columns: &[usize]) -> Result<Table> {
        let mut out = self.table.clone();
        for &idx in columns {
            let column = lookup_column(self.table, idx)?;
            out.push_column(Self::parse_column(column))?;
        }
        Ok(out)
    }
}
