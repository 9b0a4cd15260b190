//! Spreadsheet ingestion and output for the RigScript toolkit.
//!
//! Everything upstream and downstream of the translator speaks `.xlsx`; this
//! crate wraps reading (`calamine`) and writing (`rust_xlsxwriter`) behind a
//! plain mutable grid so the translation core never touches file formats.

pub mod error;
pub mod sheet;
pub mod style;

pub use error::{Result, SheetError};
pub use sheet::Sheet;
pub use style::{CellStyle, SaveOptions};
