//! Persisted record shapes.
//!
//! `id` is `None` on insert payloads and filled in by SurrealDB on reads.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{AttachmentKind, EntityType};
use surrealdb::RecordId;

/// Product master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Value code, unique per client.
    pub code: String,
    pub name: String,
    /// GTIN owned by this product, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    /// Free-form fallback barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Stock unit of measure. Order lines always book in this unit.
    pub uom: String,
    pub client_id: i64,
    pub is_active: bool,
}

/// Business partner master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub code: String,
    pub name: String,
    pub org_id: i64,
}

/// Document type record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Document category, always "sales_order" for this service.
    pub base_type: String,
    pub client_id: i64,
    pub is_default: bool,
}

/// Completed sales order header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub document_no: String,
    pub doc_type: RecordId,
    pub ship_partner: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_promised: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Sales order line.
///
/// The parent link is named `sales_order` (not `order`) to stay clear of
/// the SurrealQL keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrderLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub sales_order: RecordId,
    pub line_no: i32,
    pub product: RecordId,
    pub quantity: Decimal,
    pub uom: String,
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Attachment metadata. Payload bytes live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub entity_type: EntityType,
    pub entity_id: i64,
    pub filename: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub kind: AttachmentKind,
    pub created_at: DateTime<Utc>,
}
