//! Utilities: logging and handler helpers.

pub mod logger;

use axum::Json;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Wrap handler data in the standard success envelope.
pub fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}
