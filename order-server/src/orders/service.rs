//! Order creation service.

use super::{OrderError, ProductResolver, build_line};
use crate::db::models::SalesOrderLine;
use crate::db::repository::{
    DocTypeRepository, NewOrder, OrderRepository, PartnerRepository, RepoError,
};
use crate::db::repository::order::ORDER_TABLE;
use chrono::Utc;
use shared::request::CreateOrderRequest;
use shared::util::snowflake_id;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

/// Creates completed sales orders.
///
/// All master-data lookups are fail-fast: the first unresolvable document
/// type, partner or product aborts the request before anything is written.
/// The write itself is a single transaction in [`OrderRepository`].
#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    doc_types: DocTypeRepository,
    partners: PartnerRepository,
    resolver: ProductResolver,
    client_id: i64,
    org_id: i64,
}

impl OrderService {
    pub fn new(db: Surreal<Db>, client_id: i64, org_id: i64) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            doc_types: DocTypeRepository::new(db.clone()),
            partners: PartnerRepository::new(db.clone()),
            resolver: ProductResolver::new(db, client_id),
            client_id,
            org_id,
        }
    }

    /// Create and complete a sales order, returning its id.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<i64, OrderError> {
        if request.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let doc_type = match &request.doc_type_name {
            Some(name) => self
                .doc_types
                .find_by_name(name, self.client_id)
                .await?
                .ok_or_else(|| OrderError::DocTypeNotFound(name.clone()))?,
            None => self
                .doc_types
                .find_default(self.client_id)
                .await?
                .ok_or(OrderError::NoDefaultDocType)?,
        };

        let partner = self
            .partners
            .find_by_code(&request.ship_bpartner_code, self.org_id)
            .await?
            .ok_or_else(|| OrderError::PartnerNotFound(request.ship_bpartner_code.clone()))?;

        let order_id = snowflake_id();
        let order_ref = RecordId::from_table_key(ORDER_TABLE, order_id);

        // Lines keep request order; the first failure aborts the whole order.
        let mut lines = Vec::with_capacity(request.lines.len());
        for (i, line_request) in request.lines.iter().enumerate() {
            let product = self.resolver.resolve(&line_request.gtin_code).await?;
            let resolved = build_line(product, line_request)?;
            let product_ref = resolved
                .product
                .id
                .ok_or_else(|| RepoError::Database("product record without id".into()))?;
            lines.push(SalesOrderLine {
                id: None,
                sales_order: order_ref.clone(),
                line_no: (i as i32 + 1) * 10,
                product: product_ref,
                quantity: resolved.quantity,
                uom: resolved.product.uom,
                unit_price: resolved.unit_price,
                description: resolved.description,
            });
        }

        let doc_type_ref = doc_type
            .id
            .ok_or_else(|| RepoError::Database("doc_type record without id".into()))?;
        let partner_ref = partner
            .id
            .ok_or_else(|| RepoError::Database("bpartner record without id".into()))?;

        let line_count = lines.len();
        self.orders
            .create_completed(
                NewOrder {
                    order_id,
                    doc_type: doc_type_ref,
                    ship_partner: partner_ref,
                    date_promised: request.date_promised,
                    created_at: Utc::now(),
                },
                lines,
            )
            .await?;

        tracing::info!(
            order_id = order_id,
            partner = %request.ship_bpartner_code,
            lines = line_count,
            "sales order completed"
        );

        Ok(order_id)
    }
}
