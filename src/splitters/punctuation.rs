//! Splitting columns on a recurring punctuation delimiter.
//!
//! A column qualifies when it is not dominated by numbers and some
//! non-alphanumeric character shows up in nearly every row. That character
//! set becomes the split pattern, so structured text fields ("city, state",
//! "key=value") expand into aligned sub-columns while numeric and currency
//! columns, whose commas and periods are not structural, are left alone.

use super::{
    candidate_columns, check_non_empty, check_threshold, lookup_column, numeric_ratio,
    transpose_tokens, Splitter,
};
use crate::cell::Cell;
use crate::error::Result;
use crate::patterns::alternation_of;
use crate::table::{Column, Table};
use foldhash::{HashMap, HashMapExt, HashSet, HashSetExt};
use rayon::prelude::*;
use regex::Regex;

/// Name suffix for derived columns.
const SUFFIX: &str = "punc";

/// Detects columns with a consistently recurring punctuation delimiter and
/// splits each into aligned sub-columns.
#[derive(Debug)]
pub struct PunctuationSplitter<'a> {
    table: &'a Table,
    ignore: HashSet<usize>,
    num_threshold: f64,
    common_threshold: f64,
}

impl<'a> PunctuationSplitter<'a> {
    /// Fraction of numeric cells at which a column counts as numeric and is
    /// excluded from splitting.
    pub const DEFAULT_NUM_THRESHOLD: f64 = 0.1;
    /// Fraction of rows that must contain a punctuation character for it to
    /// count as a structural delimiter.
    pub const DEFAULT_COMMON_THRESHOLD: f64 = 0.9;

    /// Bind a splitter to a table, an ignore-set, and its two thresholds
    /// (both fractions in [0, 1]).
    ///
    /// A high `common_threshold` demands the delimiter in nearly every row;
    /// a high `num_threshold` tolerates more numeric cells before a column
    /// is written off as numeric.
    pub fn new(
        table: &'a Table,
        ignore: impl IntoIterator<Item = usize>,
        num_threshold: f64,
        common_threshold: f64,
    ) -> Result<Self> {
        check_non_empty(table)?;
        check_threshold("num_threshold", num_threshold)?;
        check_threshold("common_threshold", common_threshold)?;
        Ok(Self {
            table,
            ignore: ignore.into_iter().collect(),
            num_threshold,
            common_threshold,
        })
    }

    /// Bind with the default thresholds.
    pub fn with_defaults(table: &'a Table, ignore: impl IntoIterator<Item = usize>) -> Result<Self> {
        Self::new(
            table,
            ignore,
            Self::DEFAULT_NUM_THRESHOLD,
            Self::DEFAULT_COMMON_THRESHOLD,
        )
    }

    fn is_numeric_column(&self, cells: &[Cell]) -> bool {
        numeric_ratio(cells) >= self.num_threshold
    }

    /// Characters shared across enough rows to act as structural delimiters.
    ///
    /// Counts, per distinct non-alphanumeric non-`.` character, the number
    /// of distinct rows containing it at least once; keeps the characters
    /// whose row fraction reaches `common_threshold`. Sorted so the split
    /// pattern built from the result is deterministic.
    fn find_common(&self, cells: &[Cell]) -> Vec<char> {
        let mut row_counts: HashMap<char, usize> = HashMap::new();
        let mut seen = HashSet::new();
        for cell in cells {
            seen.clear();
            for ch in cell.as_text().chars() {
                if ch.is_alphanumeric() || ch == '.' {
                    continue;
                }
                if seen.insert(ch) {
                    *row_counts.entry(ch).or_insert(0) += 1;
                }
            }
        }

        let num_rows = cells.len() as f64;
        let mut common: Vec<char> = row_counts
            .into_iter()
            .filter(|&(_, count)| count as f64 / num_rows >= self.common_threshold)
            .map(|(ch, _)| ch)
            .collect();
        common.sort_unstable();
        common
    }

    /// Split every row on the delimiter set, right-padding ragged rows with
    /// nulls so each row reaches the column's maximum token count. Partial
    /// tokens are kept.
    fn split_column(column: &Column, common: &[char]) -> Result<Vec<Column>> {
        let pattern = Regex::new(&alternation_of(common))?;

        let mut token_rows: Vec<Vec<Cell>> = Vec::with_capacity(column.len());
        let mut width = 0;
        for cell in &column.cells {
            let text = cell.as_text();
            let tokens: Vec<Cell> = pattern
                .split(&text)
                .filter(|token| !token.is_empty())
                .map(Cell::text)
                .collect();
            width = width.max(tokens.len());
            token_rows.push(tokens);
        }

        for row in &mut token_rows {
            row.resize(width, Cell::Null);
        }

        Ok(transpose_tokens(&token_rows, width, &column.name, SUFFIX))
    }
}

impl Splitter for PunctuationSplitter<'_> {
    fn detection(&self) -> Vec<usize> {
        candidate_columns(self.table, &self.ignore)
            .into_par_iter()
            .filter(|&idx| {
                let cells = &self.table.columns()[idx].cells;
                !self.is_numeric_column(cells) && !self.find_common(cells).is_empty()
            })
            .collect()
    }

    fn performing(&self, columns: &[usize]) -> Result<Table> {
        let mut out = self.table.clone();
        for &idx in columns {
            let column = lookup_column(self.table, idx)?;
            let common = self.find_common(&column.cells);
            if common.is_empty() {
                // Detection never hands over such a column; skip rather
                // than split on an empty alternation.
                continue;
            }
            for derived in Self::split_column(column, &common)? {
                out.push_column(derived)?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_table(values: &[&str]) -> Table {
        Table::from_columns(vec![Column::new(
            "field",
            values.iter().map(|v| Cell::text(*v)).collect(),
        )])
        .unwrap()
    }

    fn default_splitter(table: &Table) -> PunctuationSplitter<'_> {
        PunctuationSplitter::with_defaults(table, []).unwrap()
    }

    #[test]
    fn test_find_common_single_delimiter() {
        let table = text_table(&["a:b", "c:d", "e:f"]);
        let splitter = default_splitter(&table);

        let common = splitter.find_common(&table.column(0).unwrap().cells);
        assert_eq!(common, vec![':']);
    }

    #[test]
    fn test_find_common_excludes_alphanumeric_and_period() {
        let table = text_table(&["a.b:c1", "d.e:f2", "g.h:i3"]);
        let splitter = default_splitter(&table);

        let common = splitter.find_common(&table.column(0).unwrap().cells);
        assert_eq!(common, vec![':']);
    }

    #[test]
    fn test_find_common_counts_rows_not_occurrences() {
        // ';' appears four times but only in half of the rows
        let table = text_table(&["a;;b;;c", "plain", "x;;y;;z", "plain"]);
        let splitter = default_splitter(&table);

        let common = splitter.find_common(&table.column(0).unwrap().cells);
        assert!(common.is_empty());
    }

    #[test]
    fn test_detection_skips_numeric_columns() {
        // Parseable floats everywhere; the '-' signs are not structural
        let table = text_table(&["-1.5", "-2.5", "-3.5"]);
        let splitter = default_splitter(&table);
        assert_eq!(splitter.detection(), Vec::<usize>::new());
    }

    #[test]
    fn test_detection_requires_common_characters() {
        let table = text_table(&["alpha", "beta", "gamma"]);
        let splitter = default_splitter(&table);
        assert_eq!(splitter.detection(), Vec::<usize>::new());
    }

    #[test]
    fn test_performing_splits_evenly() {
        let table = text_table(&["a:b", "c:d", "e:f"]);
        let splitter = default_splitter(&table);

        let detected = splitter.detection();
        assert_eq!(detected, vec![0]);

        let out = splitter.performing(&detected).unwrap();
        assert_eq!(out.num_columns(), 3);
        assert_eq!(
            out.column_by_name("field_punc_0").unwrap().cells,
            vec![Cell::text("a"), Cell::text("c"), Cell::text("e")]
        );
        assert_eq!(
            out.column_by_name("field_punc_1").unwrap().cells,
            vec![Cell::text("b"), Cell::text("d"), Cell::text("f")]
        );
    }

    #[test]
    fn test_performing_pads_ragged_rows() {
        let table = text_table(&["a:b:c", "d:e"]);
        let splitter = default_splitter(&table);

        let out = splitter.performing(&[0]).unwrap();
        assert_eq!(out.num_columns(), 4);
        assert_eq!(
            out.column_by_name("field_punc_2").unwrap().cells,
            vec![Cell::text("c"), Cell::Null]
        );
        // The shorter row keeps the tokens it has
        assert_eq!(
            out.column_by_name("field_punc_0").unwrap().cells,
            vec![Cell::text("a"), Cell::text("d")]
        );
        assert_eq!(
            out.column_by_name("field_punc_1").unwrap().cells,
            vec![Cell::text("b"), Cell::text("e")]
        );
    }

    #[test]
    fn test_performing_escapes_metacharacter_delimiters() {
        let table = text_table(&["a|b", "c|d"]);
        let splitter = default_splitter(&table);

        let detected = splitter.detection();
        assert_eq!(detected, vec![0]);

        let out = splitter.performing(&detected).unwrap();
        assert_eq!(
            out.column_by_name("field_punc_0").unwrap().cells,
            vec![Cell::text("a"), Cell::text("c")]
        );
    }

    #[test]
    fn test_performing_discards_empty_tokens() {
        let table = text_table(&["a::b", "c::d"]);
        let splitter = default_splitter(&table);

        let out = splitter.performing(&[0]).unwrap();
        // "a::b" yields two tokens, not three
        assert_eq!(out.num_columns(), 3);
        assert_eq!(
            out.column_by_name("field_punc_1").unwrap().cells,
            vec![Cell::text("b"), Cell::text("d")]
        );
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let table = text_table(&["a:b"]);
        assert!(PunctuationSplitter::new(&table, [], 0.1, 1.5).is_err());
        assert!(PunctuationSplitter::new(&table, [], -0.2, 0.9).is_err());
    }

    #[test]
    fn test_rerunning_detection_on_expanded_table() {
        let table = text_table(&["a:b", "c:d"]);
        let splitter = default_splitter(&table);
        let expanded = splitter.performing(&splitter.detection()).unwrap();

        // The derived columns carry no delimiter, so only the source column
        // is flagged again
        let splitter = default_splitter(&expanded);
        assert_eq!(splitter.detection(), vec![0]);
    }
}
