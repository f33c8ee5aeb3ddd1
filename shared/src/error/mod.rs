//! Unified error handling
//!
//! Every failure crossing the API boundary is an [`AppError`] carrying a
//! numeric [`ErrorCode`]; responses wrap it in the [`ApiResponse`] envelope.

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
