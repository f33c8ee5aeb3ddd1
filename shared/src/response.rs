//! Outbound response payloads.

use crate::types::AttachmentKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full sales-order view returned after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderResponse {
    /// Order identifier, stringified for JSON-safe 64-bit handling.
    pub sales_order_id: String,
    /// Human-readable document number, e.g. `SO-1042`.
    pub document_no: String,
    /// Sum of all line amounts.
    pub total_amount: Decimal,
    /// Sum of all line quantities.
    pub total_quantity: Decimal,
    pub order_lines: Vec<OrderLineDetail>,
    /// When this view of the order should be considered stale.
    pub expiry_date: DateTime<Utc>,
    /// Expiry rendered as `YYYY-MM-DD HH:MM:SS TZ` for display.
    pub formatted_expiry_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type_name: Option<String>,
}

/// Projected view of a single order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDetail {
    /// Product value code. Empty when enrichment could not resolve the product.
    pub product_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// `quantity * unit_price`.
    pub line_amount: Decimal,
}

/// One attachment entry owned by a sales order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentResponse {
    pub sales_order_id: String,
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub filename: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
