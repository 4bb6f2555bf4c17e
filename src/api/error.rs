// ==========================================
// Support Stock - API errors
// ==========================================
// Repository / transfer errors mapped to user-facing categories:
// validation (blocking notice, nothing written) and persistence
// (operation failed, application stays usable).
// ==========================================

use crate::repository::error::RepositoryError;
use crate::transfer::error::TransferError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Input / business rules
    // ==========================================
    #[error("validation failed: {0}")]
    ValidationError(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("business rule violated: {0}")]
    BusinessRuleViolation(String),

    #[error("not found: {0}")]
    NotFound(String),

    // ==========================================
    // Persistence
    // ==========================================
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    // ==========================================
    // Files
    // ==========================================
    #[error("export failed: {0}")]
    ExportError(String),

    #[error("import failed: {0}")]
    ImportError(String),

    // ==========================================
    // Generic
    // ==========================================
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// True for failures of the storage engine rather than of user input
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            ApiError::DatabaseError(_)
                | ApiError::DatabaseConnectionError(_)
                | ApiError::DatabaseTransactionError(_)
        )
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("database lock: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("unique constraint: {}", msg))
            }
            RepositoryError::BusinessRuleViolation(msg) => ApiError::BusinessRuleViolation(msg),
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::DatabaseError(format!("stored {} unreadable: {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::FileWriteError(msg) => ApiError::ExportError(msg),
            TransferError::FileNotFound(path) => ApiError::NotFound(path),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
