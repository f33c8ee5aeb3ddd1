//! Order pipeline
//!
//! Turning a create-order request into a committed sales order happens in
//! stages: resolve master data ([`ProductResolver`]), build lines
//! ([`line`]), commit atomically ([`OrderService`]) and read the result
//! back ([`OrderProjection`]).

pub mod gtin;
mod line;
mod projection;
mod resolver;
mod service;

pub use gtin::Gtin;
pub use line::{ResolvedLine, build_line};
pub use projection::OrderProjection;
pub use resolver::ProductResolver;
pub use service::OrderService;

use crate::db::repository::RepoError;
use rust_decimal::Decimal;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Failures of the order pipeline.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("No product found for GTIN or barcode '{0}'")]
    ProductNotFound(String),

    #[error("Business partner '{0}' not found")]
    PartnerNotFound(String),

    #[error("Document type '{0}' not found")]
    DocTypeNotFound(String),

    #[error("No default sales-order document type configured")]
    NoDefaultDocType,

    #[error("Invalid quantity {qty} for '{code}'")]
    InvalidQuantity { code: String, qty: Decimal },

    #[error("Order must contain at least one line")]
    EmptyOrder,

    #[error("Sales order {0} not found")]
    OrderNotFound(i64),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::ProductNotFound(code) => AppError::product_not_found(code),
            OrderError::PartnerNotFound(code) => AppError::partner_not_found(code),
            OrderError::DocTypeNotFound(name) => AppError::doc_type_not_found(name),
            OrderError::NoDefaultDocType => AppError::with_message(
                ErrorCode::DocTypeNotFound,
                "No default sales-order document type configured",
            ),
            OrderError::InvalidQuantity { code, qty } => {
                AppError::with_message(
                    ErrorCode::InvalidQuantity,
                    format!("Invalid quantity {} for '{}'", qty, code),
                )
                .with_detail("code", code)
            }
            OrderError::EmptyOrder => AppError::new(ErrorCode::OrderEmpty),
            OrderError::OrderNotFound(id) => AppError::with_message(
                ErrorCode::OrderNotFound,
                format!("Sales order {} not found", id),
            ),
            OrderError::Repo(RepoError::NotFound(what)) => AppError::not_found(what),
            OrderError::Repo(RepoError::Validation(msg)) => AppError::validation(msg),
            OrderError::Repo(RepoError::Database(msg)) => AppError::database(msg),
        }
    }
}
