//! Attachment Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Attachment;
use shared::EntityRef;
use shared::util::snowflake_id;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ATTACHMENT_TABLE: &str = "attachment";

#[derive(Clone)]
pub struct AttachmentRepository {
    base: BaseRepository,
}

impl AttachmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Record attachment metadata under a fresh numeric id.
    pub async fn create(&self, data: Attachment) -> RepoResult<Attachment> {
        let created: Option<Attachment> = self
            .base
            .db()
            .create((ATTACHMENT_TABLE, snowflake_id()))
            .content(data)
            .await?;
        created.ok_or_else(|| RepoError::Database("create returned nothing".into()))
    }

    /// All attachments owned by the given entity, oldest first.
    pub async fn list_for(&self, owner: EntityRef) -> RepoResult<Vec<Attachment>> {
        let attachments: Vec<Attachment> = self
            .base
            .db()
            .query(
                "SELECT * FROM attachment \
                 WHERE entity_type = $entity_type AND entity_id = $entity_id \
                 ORDER BY created_at",
            )
            .bind(("entity_type", owner.entity_type))
            .bind(("entity_id", owner.id))
            .await?
            .take(0)?;
        Ok(attachments)
    }
}
