use std::path::PathBuf;

use rigscript_model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, Error)]
pub enum SplitError {
    /// An identifier cell that cannot name a module file. Carries the
    /// one-based row number so the offending export row is findable.
    #[error("row {row}: {source}")]
    Identifier {
        row: usize,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    Sheet(#[from] rigscript_ingest::SheetError),

    #[error("could not create output folder `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
