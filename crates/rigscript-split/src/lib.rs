//! Partitions a translated procedure sheet into per-module workbooks.
//!
//! Rows are grouped by consecutive runs of the identifier column; each run
//! becomes one `<module>@<id>@.xlsx` file holding the canonical commands of
//! its rows under an `Actions` header.

pub mod error;
pub mod partition;

pub use error::{Result, SplitError};
pub use partition::{ModuleFile, SplitReport, split_sheet};
