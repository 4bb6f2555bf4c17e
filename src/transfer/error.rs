// ==========================================
// Support Stock - CSV transfer errors
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    // ===== files =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("file write failed: {0}")]
    FileWriteError(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    // ===== content =====
    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("invalid value (row {row}, column {column}): {message}")]
    InvalidValue {
        row: usize,
        column: String,
        message: String,
    },
}

impl From<csv::Error> for TransferError {
    fn from(err: csv::Error) -> Self {
        TransferError::CsvError(err.to_string())
    }
}

impl From<std::io::Error> for TransferError {
    fn from(err: std::io::Error) -> Self {
        TransferError::FileWriteError(err.to_string())
    }
}

pub type TransferResult<T> = Result<T, TransferError>;
