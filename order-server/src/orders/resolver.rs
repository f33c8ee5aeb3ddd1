//! Product resolution by GTIN or fallback barcode.

use super::{Gtin, OrderError};
use crate::db::models::Product;
use crate::db::repository::ProductRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Resolves a scanned or typed code to a product, scoped to one client.
///
/// A structurally valid GTIN is looked up against the products' GTIN
/// column first. The free-form barcode column is only consulted when the
/// code is not a GTIN or no product owns that GTIN.
#[derive(Clone)]
pub struct ProductResolver {
    products: ProductRepository,
    client_id: i64,
}

impl ProductResolver {
    pub fn new(db: Surreal<Db>, client_id: i64) -> Self {
        Self {
            products: ProductRepository::new(db),
            client_id,
        }
    }

    pub async fn resolve(&self, code: &str) -> Result<Product, OrderError> {
        match Gtin::parse(code) {
            Ok(gtin) => {
                if let Some(product) = self
                    .products
                    .find_by_gtin(gtin.as_str(), self.client_id)
                    .await?
                {
                    return Ok(product);
                }
                tracing::debug!(code = %code, "no product owns this GTIN, trying barcode");
            }
            Err(e) => {
                tracing::debug!(code = %code, reason = %e, "not a GTIN, trying barcode");
            }
        }

        self.products
            .find_by_barcode(code, self.client_id)
            .await?
            .ok_or_else(|| OrderError::ProductNotFound(code.to_string()))
    }
}
