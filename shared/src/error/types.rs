//! Error types and API response structures

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Application error with structured error code and details
///
/// The primary error type crossing the API boundary:
/// - a standardized kind via [`ErrorCode`]
/// - a human-readable message
/// - optional structured details (offending code, field names, ...)
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> http::StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Product resolution failed for both the GTIN and barcode lookups
    pub fn product_not_found(code: impl Into<String>) -> Self {
        let c = code.into();
        Self::with_message(
            ErrorCode::ProductNotFound,
            format!("No product found for GTIN or barcode '{}'", c),
        )
        .with_detail("code", c)
    }

    /// Ship-to partner code did not resolve within the caller's organization
    pub fn partner_not_found(code: impl Into<String>) -> Self {
        let c = code.into();
        Self::with_message(
            ErrorCode::PartnerNotFound,
            format!("Business partner '{}' not found", c),
        )
        .with_detail("code", c)
    }

    /// Named document type not found for the sales-order category
    pub fn doc_type_not_found(name: impl Into<String>) -> Self {
        let n = name.into();
        Self::with_message(
            ErrorCode::DocTypeNotFound,
            format!("Document type '{}' not found", n),
        )
        .with_detail("name", n)
    }

    /// Owning entity reference on an attachment request could not be parsed
    pub fn malformed_owner(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::MalformedAttachmentOwner, msg)
    }

    /// Attachment payload I/O failed
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::FileStorageFailed, msg)
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;

/// Unified API response structure
///
/// ```json
/// {
///     "code": 7001,
///     "category": "partner",
///     "message": "Business partner 'C001' not found",
///     "details": { "code": "C001" }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 = success)
    pub code: ErrorCode,
    /// Error category derived from the code range
    pub category: ErrorCategory,
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Structured details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Success,
            category: ErrorCode::Success.category(),
            message: "Success".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response from an [`AppError`]
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code,
            category: err.code.category(),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, error = %self.message, "request failed");
        }
        (status, Json(ApiResponse::<()>::error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_code_and_details() {
        let err = AppError::product_not_found("4006381333931");
        let resp = ApiResponse::<()>::error(&err);
        assert_eq!(resp.code, ErrorCode::ProductNotFound);
        assert_eq!(resp.category, ErrorCategory::Product);
        assert!(resp.message.contains("4006381333931"));
        let details = resp.details.unwrap();
        assert_eq!(details["code"], "4006381333931");
    }

    #[test]
    fn default_message_comes_from_code() {
        let err = AppError::new(ErrorCode::OrderEmpty);
        assert_eq!(err.message, "Order must contain at least one line");
    }
}
