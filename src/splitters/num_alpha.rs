//! Splitting columns of alternating numeric and alphabetic runs.

use super::{
    candidate_columns, check_non_empty, check_threshold, lookup_column, numeric_ratio,
    transpose_tokens, Splitter,
};
use crate::cell::Cell;
use crate::error::Result;
use crate::patterns::{NUM_ALPHA_PREFIX_PATTERN, NUM_ALPHA_TOKEN_PATTERN};
use crate::table::{Column, Table};
use foldhash::HashSet;
use rayon::prelude::*;

/// Name suffix for derived columns.
const SUFFIX: &str = "na";

/// Detects columns whose values alternate digit and letter runs (such as
/// `12ab34`) and splits each value into its ordered runs as sub-columns.
///
/// Detection only tests the start of each value, while performing scans the
/// whole value for runs. A value can therefore pass detection yet tokenize
/// to fewer runs than the column's widest row; such rows are blanked
/// wholesale rather than padded. Both behaviors are intentional and kept
/// distinct from [`crate::PunctuationSplitter`]'s right-padding.
#[derive(Debug)]
pub struct NumAlphaSplitter<'a> {
    table: &'a Table,
    ignore: HashSet<usize>,
    num_threshold: f64,
    num_alpha_threshold: f64,
}

impl<'a> NumAlphaSplitter<'a> {
    /// Fraction of numeric cells at which a column counts as numeric and is
    /// excluded from splitting.
    pub const DEFAULT_NUM_THRESHOLD: f64 = 0.1;
    /// Fraction of rows that must open with a digit/letter alternation.
    pub const DEFAULT_NUM_ALPHA_THRESHOLD: f64 = 0.8;

    /// Bind a splitter to a table, an ignore-set, and its two thresholds
    /// (both fractions in [0, 1]).
    pub fn new(
        table: &'a Table,
        ignore: impl IntoIterator<Item = usize>,
        num_threshold: f64,
        num_alpha_threshold: f64,
    ) -> Result<Self> {
        check_non_empty(table)?;
        check_threshold("num_threshold", num_threshold)?;
        check_threshold("num_alpha_threshold", num_alpha_threshold)?;
        Ok(Self {
            table,
            ignore: ignore.into_iter().collect(),
            num_threshold,
            num_alpha_threshold,
        })
    }

    /// Bind with the default thresholds.
    pub fn with_defaults(table: &'a Table, ignore: impl IntoIterator<Item = usize>) -> Result<Self> {
        Self::new(
            table,
            ignore,
            Self::DEFAULT_NUM_THRESHOLD,
            Self::DEFAULT_NUM_ALPHA_THRESHOLD,
        )
    }

    fn is_numeric_column(&self, cells: &[Cell]) -> bool {
        numeric_ratio(cells) >= self.num_threshold
    }

    /// Fraction of rows opening with digits-then-letters or
    /// letters-then-digits must strictly exceed the threshold.
    fn is_num_alpha(&self, cells: &[Cell]) -> bool {
        let matches = cells
            .iter()
            .filter(|cell| NUM_ALPHA_PREFIX_PATTERN.is_match(&cell.as_text()))
            .count();
        matches as f64 / cells.len() as f64 > self.num_alpha_threshold
    }

    /// Extract every maximal digit/period or letter run per row, left to
    /// right. A null row contributes a single null token.
    ///
    /// Rows with fewer runs than the column's widest row are replaced
    /// wholesale by nulls; their partial runs are discarded, not padded.
    fn split_column(column: &Column) -> Vec<Column> {
        let mut token_rows: Vec<Vec<Cell>> = Vec::with_capacity(column.len());
        let mut width = 0;
        for cell in &column.cells {
            let tokens: Vec<Cell> = if cell.is_null() {
                vec![Cell::Null]
            } else {
                NUM_ALPHA_TOKEN_PATTERN
                    .find_iter(&cell.as_text())
                    .map(|m| Cell::text(m.as_str()))
                    .collect()
            };
            width = width.max(tokens.len());
            token_rows.push(tokens);
        }

        for row in &mut token_rows {
            if row.len() < width {
                *row = vec![Cell::Null; width];
            }
        }

        transpose_tokens(&token_rows, width, &column.name, SUFFIX)
    }
}

impl Splitter for NumAlphaSplitter<'_> {
    fn detection(&self) -> Vec<usize> {
        candidate_columns(self.table, &self.ignore)
            .into_par_iter()
            .filter(|&idx| {
                let cells = &self.table.columns()[idx].cells;
                !self.is_numeric_column(cells) && self.is_num_alpha(cells)
            })
            .collect()
    }

    fn performing(&self, columns: &[usize]) -> Result<Table> {
        let mut out = self.table.clone();
        for &idx in columns {
            let column = lookup_column(self.table, idx)?;
            for derived in Self::split_column(column) {
                out.push_column(derived)?;
            }
        }
        Ok(out)
    }
}
