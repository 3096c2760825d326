//! colsplit: structured sub-column discovery for tabular data
//!
//! Inspects the columns of a table and expands the ones whose cell values
//! follow a recognizable sub-structure into derived columns, so composite
//! text fields become machine-usable structured fields ahead of downstream
//! analysis.
//!
//! Three detectors share a two-phase detect-then-perform protocol:
//!
//! - [`PhoneParser`] flags columns that are mostly phone-number-shaped and
//!   appends a normalized hyphen-joined `<name>_phone` column.
//! - [`PunctuationSplitter`] flags columns with a recurring punctuation
//!   delimiter and splits them into aligned `<name>_punc_<i>` columns.
//! - [`NumAlphaSplitter`] flags columns of alternating digit/letter runs
//!   (`12ab34`) and splits them into `<name>_na_<i>` columns.
//!
//! Each detector is bound to one table at construction; `detection()`
//! returns the matching column indices and `performing(indices)` returns
//! the table with the derived columns appended. Original columns are never
//! mutated, removed, or reordered.
//!
//! # Quick Start
//!
//! ```
//! use colsplit::{Cell, Column, PunctuationSplitter, Splitter, Table};
//!
//! let table = Table::from_columns(vec![Column::new(
//!     "location",
//!     vec![
//!         Cell::text("Pasadena:CA"),
//!         Cell::text("Queens:NY"),
//!         Cell::text("Reno:NV"),
//!     ],
//! )])
//! .unwrap();
//!
//! let splitter = PunctuationSplitter::with_defaults(&table, []).unwrap();
//! let detected = splitter.detection();
//! let expanded = splitter.performing(&detected).unwrap();
//!
//! assert_eq!(
//!     expanded.column_names(),
//!     vec!["location", "location_punc_0", "location_punc_1"]
//! );
//! ```
//!
//! Matching is purely syntactic: no semantic inference is attempted, phone
//! numbers are not validated against a numbering plan, and only
//! North-American-style phone patterns are recognized.

mod cell;
mod error;
pub mod patterns;
pub mod splitters;
mod table;

// Re-export the public API
pub use cell::Cell;
pub use error::{Result, SplitError};
pub use splitters::num_alpha::NumAlphaSplitter;
pub use splitters::phone::PhoneParser;
pub use splitters::punctuation::PunctuationSplitter;
pub use splitters::Splitter;
pub use table::{Column, Table};
