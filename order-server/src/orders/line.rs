//! Order line construction.

use super::OrderError;
use crate::db::models::Product;
use rust_decimal::Decimal;
use shared::request::OrderLineRequest;

/// A requested line bound to its resolved product.
///
/// The unit of measure is taken from the product's stock UoM, so a line
/// can never book in a unit the product is not stocked in.
#[derive(Debug, Clone)]
pub struct ResolvedLine {
    pub product: Product,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub description: Option<String>,
}

/// Validate a line request against its resolved product.
///
/// Quantity must be non-negative. A missing price means zero, not an
/// error; pricing may be applied downstream.
pub fn build_line(product: Product, request: &OrderLineRequest) -> Result<ResolvedLine, OrderError> {
    if request.qty < Decimal::ZERO {
        return Err(OrderError::InvalidQuantity {
            code: request.gtin_code.clone(),
            qty: request.qty,
        });
    }

    Ok(ResolvedLine {
        product,
        quantity: request.qty,
        unit_price: request.price.unwrap_or(Decimal::ZERO),
        description: request.description.clone(),
    })
}
