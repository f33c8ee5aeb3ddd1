//! Document Type Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::DocType;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const DOC_TYPE_TABLE: &str = "doc_type";

/// Document category for sales orders.
pub const SALES_ORDER_BASE_TYPE: &str = "sales_order";

#[derive(Clone)]
pub struct DocTypeRepository {
    base: BaseRepository,
}

impl DocTypeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a sales-order document type by name within a client.
    pub async fn find_by_name(&self, name: &str, client_id: i64) -> RepoResult<Option<DocType>> {
        let doc_types: Vec<DocType> = self
            .base
            .db()
            .query(
                "SELECT * FROM doc_type \
                 WHERE name = $name AND base_type = $base_type AND client_id = $client_id \
                 LIMIT 1",
            )
            .bind(("name", name.to_string()))
            .bind(("base_type", SALES_ORDER_BASE_TYPE))
            .bind(("client_id", client_id))
            .await?
            .take(0)?;
        Ok(doc_types.into_iter().next())
    }

    /// Find the default sales-order document type within a client.
    pub async fn find_default(&self, client_id: i64) -> RepoResult<Option<DocType>> {
        let doc_types: Vec<DocType> = self
            .base
            .db()
            .query(
                "SELECT * FROM doc_type \
                 WHERE base_type = $base_type AND client_id = $client_id AND is_default = true \
                 LIMIT 1",
            )
            .bind(("base_type", SALES_ORDER_BASE_TYPE))
            .bind(("client_id", client_id))
            .await?
            .take(0)?;
        Ok(doc_types.into_iter().next())
    }

    /// Find document type by record id.
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<DocType>> {
        let doc_type: Option<DocType> = self.base.db().select(id.clone()).await?;
        Ok(doc_type)
    }

    /// Create a document type record. Used for seeding master data.
    pub async fn create(&self, data: DocType) -> RepoResult<DocType> {
        let created: Option<DocType> = self.base.db().create(DOC_TYPE_TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("create returned nothing".into()))
    }
}
