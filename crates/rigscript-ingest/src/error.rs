use thiserror::Error;

/// Errors raised while reading or writing sheet files.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),
    #[error("workbook has no worksheets")]
    NoWorksheet,
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, SheetError>;
