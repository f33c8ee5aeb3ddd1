//! Shared types for the sales-order service
//!
//! Wire-level request/response shapes, the unified error-code system and
//! small utility types used by both the server and its clients.

pub mod error;
pub mod request;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use request::{CreateOrderRequest, OrderLineRequest};
pub use response::{AttachmentResponse, OrderLineDetail, SalesOrderResponse};
pub use types::{AttachmentKind, EntityRef, EntityType};
