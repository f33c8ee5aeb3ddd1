//! Business Partner Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Partner;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PARTNER_TABLE: &str = "bpartner";

#[derive(Clone)]
pub struct PartnerRepository {
    base: BaseRepository,
}

impl PartnerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a partner by code within an organization.
    pub async fn find_by_code(&self, code: &str, org_id: i64) -> RepoResult<Option<Partner>> {
        let partners: Vec<Partner> = self
            .base
            .db()
            .query("SELECT * FROM bpartner WHERE code = $code AND org_id = $org_id LIMIT 1")
            .bind(("code", code.to_string()))
            .bind(("org_id", org_id))
            .await?
            .take(0)?;
        Ok(partners.into_iter().next())
    }

    /// Create a partner record. Used for seeding master data.
    pub async fn create(&self, data: Partner) -> RepoResult<Partner> {
        let created: Option<Partner> = self.base.db().create(PARTNER_TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("create returned nothing".into()))
    }
}
