use std::borrow::Cow;
use std::fmt;

/// A single table cell: text, a number, or missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Missing value.
    #[default]
    Null,
}

impl Cell {
    /// Convenience constructor for text cells.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Returns true if the cell is missing.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// String form used for pattern matching.
    ///
    /// Null renders as the empty string so a missing value can never
    /// contribute characters to a match or a delimiter count.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Cell::Text(s) => Cow::Borrowed(s),
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Null => Cow::Borrowed(""),
        }
    }

    /// Returns true if the cell parses as a floating point number.
    ///
    /// Null counts as numeric: a missing value is a NaN float in the
    /// dataframe model this crate ingests from, and NaN parses as a float.
    pub fn is_numeric(&self) -> bool {
        match self {
            Cell::Number(_) | Cell::Null => true,
            Cell::Text(s) => s.trim().parse::<f64>().is_ok(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Null => Ok(()),
        }
    }
}
