use crate::api::error::ApiError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Shared helpers: error mapping, parsing, serialization
// ==========================================

/// Error payload returned to the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// ApiError → JSON string (Tauri requires a serializable error)
pub(super) fn map_api_error(err: ApiError) -> String {
    if err.is_persistence() {
        tracing::error!("persistence failure: {}", err);
    }

    let error_response = ErrorResponse {
        code: match &err {
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::DatabaseTransactionError(_) => "DATABASE_TRANSACTION_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}

/// Parse a YYYY-MM-DD date
pub(super) fn parse_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| map_api_error(ApiError::InvalidInput(format!("date must be YYYY-MM-DD: {}", e))))
}

pub(super) fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value)
        .map_err(|e| map_api_error(ApiError::InternalError(format!("serialization failed: {}", e))))
}
