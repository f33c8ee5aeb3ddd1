//! Product Repository

use super::{BaseRepository, RepoResult};
use crate::db::models::Product;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the active product that owns the given GTIN within a client.
    pub async fn find_by_gtin(&self, gtin: &str, client_id: i64) -> RepoResult<Option<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(
                "SELECT * FROM product \
                 WHERE gtin = $gtin AND client_id = $client_id AND is_active = true \
                 LIMIT 1",
            )
            .bind(("gtin", gtin.to_string()))
            .bind(("client_id", client_id))
            .await?
            .take(0)?;
        Ok(products.into_iter().next())
    }

    /// Find the active product carrying the given fallback barcode within a
    /// client.
    pub async fn find_by_barcode(&self, barcode: &str, client_id: i64) -> RepoResult<Option<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query(
                "SELECT * FROM product \
                 WHERE barcode = $barcode AND client_id = $client_id AND is_active = true \
                 LIMIT 1",
            )
            .bind(("barcode", barcode.to_string()))
            .bind(("client_id", client_id))
            .await?
            .take(0)?;
        Ok(products.into_iter().next())
    }

    /// Find product by record id.
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select(id.clone()).await?;
        Ok(product)
    }

    /// Create a product record. Used for seeding master data.
    pub async fn create(&self, data: Product) -> RepoResult<Product> {
        let created: Option<Product> = self.base.db().create(PRODUCT_TABLE).content(data).await?;
        created.ok_or_else(|| super::RepoError::Database("create returned nothing".into()))
    }
}
