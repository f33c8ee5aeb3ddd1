//! Read-only order projection.
//!
//! Assembles the wire response for an order after commit. Product and
//! document-type enrichment is best effort: a line whose product can no
//! longer be read still projects, with an empty code and no GTIN.

use super::OrderError;
use crate::db::repository::{DocTypeRepository, OrderRepository, ProductRepository};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use shared::response::{OrderLineDetail, SalesOrderResponse};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// How long a projected order view stays fresh.
const EXPIRY_HOURS: i64 = 24;

#[derive(Clone)]
pub struct OrderProjection {
    orders: OrderRepository,
    products: ProductRepository,
    doc_types: DocTypeRepository,
}

impl OrderProjection {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            doc_types: DocTypeRepository::new(db),
        }
    }

    /// Project an order and its lines into the response shape.
    pub async fn project(&self, order_id: i64) -> Result<SalesOrderResponse, OrderError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        let lines = self.orders.lines_for(order_id).await?;

        let doc_type_name = match self.doc_types.find_by_id(&order.doc_type).await {
            Ok(Some(doc_type)) => Some(doc_type.name),
            Ok(None) | Err(_) => None,
        };

        let mut order_lines = Vec::with_capacity(lines.len());
        let mut total_amount = Decimal::ZERO;
        let mut total_quantity = Decimal::ZERO;

        for line in lines {
            let (product_code, gtin_code) = match self.products.find_by_id(&line.product).await {
                Ok(Some(product)) => {
                    (product.code, product.gtin.filter(|g| !g.is_empty()))
                }
                Ok(None) => {
                    tracing::debug!(product = %line.product, "line product missing, projecting without enrichment");
                    (String::new(), None)
                }
                Err(e) => {
                    tracing::debug!(product = %line.product, error = %e, "product read failed, projecting without enrichment");
                    (String::new(), None)
                }
            };

            let line_amount = line.quantity * line.unit_price;
            total_amount += line_amount;
            total_quantity += line.quantity;

            order_lines.push(OrderLineDetail {
                product_code,
                gtin_code,
                description: line.description,
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_amount,
            });
        }

        let expiry_date = Utc::now() + Duration::hours(EXPIRY_HOURS);
        let formatted_expiry_date = expiry_date.format("%Y-%m-%d %H:%M:%S %Z").to_string();

        Ok(SalesOrderResponse {
            sales_order_id: order_id.to_string(),
            document_no: order.document_no,
            total_amount,
            total_quantity,
            order_lines,
            expiry_date,
            formatted_expiry_date,
            doc_type_name,
        })
    }
}
