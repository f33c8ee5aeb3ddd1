//! Inbound request payloads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for creating a sales order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Document type to book the order under. Falls back to the
    /// organization's default sales-order type when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_type_name: Option<String>,
    /// Code of the ship-to business partner.
    #[serde(rename = "shipBPartnerCode")]
    pub ship_bpartner_code: String,
    /// Promised delivery date, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_promised: Option<NaiveDate>,
    /// Order lines, preserved in request order.
    pub lines: Vec<OrderLineRequest>,
}

/// A single requested order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    /// GTIN or fallback barcode identifying the product.
    pub gtin_code: String,
    /// Ordered quantity in the product's stock unit of measure.
    pub qty: Decimal,
    /// Manual unit price. Zero when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
