//! Sales Order Repository
//!
//! Order creation runs as a single SurrealDB transaction: the document
//! sequence bump, the order header and every line commit together or not
//! at all.

use super::{BaseRepository, RepoResult};
use crate::db::models::{SalesOrder, SalesOrderLine};
use chrono::{DateTime, NaiveDate, Utc};
use shared::util::snowflake_id;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

pub const ORDER_TABLE: &str = "sales_order";
pub const ORDER_LINE_TABLE: &str = "sales_order_line";

/// Header fields for an order about to be committed.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_id: i64,
    pub doc_type: RecordId,
    pub ship_partner: RecordId,
    pub date_promised: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Commit a completed order with all of its lines atomically.
    ///
    /// The document number is drawn from the `doc_sequence:sales_order`
    /// counter inside the same transaction, so concurrent orders never
    /// share a number and an aborted order never consumes one.
    pub async fn create_completed(
        &self,
        order: NewOrder,
        lines: Vec<SalesOrderLine>,
    ) -> RepoResult<()> {
        let mut sql = String::from(
            "BEGIN TRANSACTION;\n\
             LET $seq = (UPSERT ONLY doc_sequence:sales_order \
                 SET next_no = (next_no ?? 0) + 1 RETURN AFTER).next_no;\n\
             CREATE type::thing('sales_order', $order_id) SET \
                 document_no = string::concat('SO-', <string>$seq), \
                 doc_type = $doc_type, \
                 ship_partner = $ship_partner, \
                 date_promised = $date_promised, \
                 status = 'completed', \
                 created_at = $created_at;\n",
        );
        for i in 0..lines.len() {
            sql.push_str(&format!(
                "CREATE type::thing('sales_order_line', $line_id_{i}) CONTENT $line_{i};\n"
            ));
        }
        sql.push_str("COMMIT TRANSACTION;");

        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("order_id", order.order_id))
            .bind(("doc_type", order.doc_type))
            .bind(("ship_partner", order.ship_partner))
            .bind(("date_promised", order.date_promised))
            .bind(("created_at", order.created_at));

        for (i, line) in lines.into_iter().enumerate() {
            query = query
                .bind((format!("line_id_{i}"), snowflake_id()))
                .bind((format!("line_{i}"), line));
        }

        let response = query.await?;
        response.check()?;
        Ok(())
    }

    /// Find an order header by its numeric id.
    pub async fn find_by_id(&self, order_id: i64) -> RepoResult<Option<SalesOrder>> {
        let order: Option<SalesOrder> = self.base.db().select((ORDER_TABLE, order_id)).await?;
        Ok(order)
    }

    /// All lines of an order, in line-number order.
    pub async fn lines_for(&self, order_id: i64) -> RepoResult<Vec<SalesOrderLine>> {
        let order_ref = RecordId::from_table_key(ORDER_TABLE, order_id);
        let lines: Vec<SalesOrderLine> = self
            .base
            .db()
            .query("SELECT * FROM sales_order_line WHERE sales_order = $order_ref ORDER BY line_no")
            .bind(("order_ref", order_ref))
            .await?
            .take(0)?;
        Ok(lines)
    }
}
