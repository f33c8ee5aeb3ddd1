//! Attachment storage.
//!
//! Metadata lives in the `attachment` table; payload bytes are written to
//! `work_dir/attachments` under a generated disk name. Every operation
//! first checks that the owning entity exists.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use shared::response::AttachmentResponse;
use shared::{AppError, AppResult, AttachmentKind, EntityRef, EntityType, ErrorCode};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use uuid::Uuid;

use crate::db::models::Attachment;
use crate::db::repository::{AttachmentRepository, OrderRepository};

/// Maximum attachment size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

#[derive(Clone)]
pub struct AttachmentService {
    orders: OrderRepository,
    attachments: AttachmentRepository,
    storage_dir: PathBuf,
}

impl AttachmentService {
    pub fn new(db: Surreal<Db>, storage_dir: PathBuf) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            attachments: AttachmentRepository::new(db),
            storage_dir,
        }
    }

    /// Store an uploaded file and record its metadata.
    pub async fn create(
        &self,
        owner: EntityRef,
        filename: &str,
        data: Vec<u8>,
    ) -> AppResult<AttachmentResponse> {
        self.ensure_owner(owner).await?;

        if filename.is_empty() {
            return Err(AppError::new(ErrorCode::NoFilename));
        }
        if data.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyFile));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large: {} bytes, maximum is {} bytes",
                    data.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }

        fs::create_dir_all(&self.storage_dir)
            .map_err(|e| AppError::storage(format!("Failed to create attachments dir: {e}")))?;

        // Keep the original extension on the disk name for tooling, the
        // rest of the name is random.
        let disk_name = match Path::new(filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        let disk_path = self.storage_dir.join(&disk_name);

        fs::write(&disk_path, &data)
            .map_err(|e| AppError::storage(format!("Failed to write attachment: {e}")))?;

        let mime_type = mime_guess::from_path(filename)
            .first_or_octet_stream()
            .to_string();

        let created = match self
            .attachments
            .create(Attachment {
                id: None,
                entity_type: owner.entity_type,
                entity_id: owner.id,
                filename: filename.to_string(),
                mime_type,
                url: Some(format!("/api/attachments/{disk_name}")),
                kind: AttachmentKind::Uploaded,
                created_at: Utc::now(),
            })
            .await
        {
            Ok(created) => created,
            Err(e) => {
                // The payload must not outlive its metadata row.
                if let Err(io_err) = fs::remove_file(&disk_path) {
                    tracing::warn!(
                        path = %disk_path.display(),
                        error = %io_err,
                        "failed to remove orphaned attachment payload"
                    );
                }
                return Err(AppError::database(e.to_string()));
            }
        };

        tracing::info!(
            owner = %owner,
            filename = %filename,
            size = data.len(),
            "attachment stored"
        );

        Ok(to_response(created))
    }

    /// List attachment metadata for an owner, oldest first.
    pub async fn list_for(&self, owner: EntityRef) -> AppResult<Vec<AttachmentResponse>> {
        self.ensure_owner(owner).await?;

        let attachments = self
            .attachments
            .list_for(owner)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(attachments.into_iter().map(to_response).collect())
    }

    async fn ensure_owner(&self, owner: EntityRef) -> AppResult<()> {
        let exists = match owner.entity_type {
            EntityType::SalesOrder => self
                .orders
                .find_by_id(owner.id)
                .await
                .map_err(|e| AppError::database(e.to_string()))?
                .is_some(),
        };

        if exists {
            Ok(())
        } else {
            Err(AppError::with_message(
                ErrorCode::AttachmentOwnerNotFound,
                format!("Owning entity {} not found", owner),
            ))
        }
    }
}

fn to_response(attachment: Attachment) -> AttachmentResponse {
    AttachmentResponse {
        sales_order_id: attachment.entity_id.to_string(),
        id: attachment.id.as_ref().map(record_key_i64).unwrap_or_default(),
        kind: attachment.kind,
        filename: attachment.filename,
        mime_type: attachment.mime_type,
        url: attachment.url,
    }
}

/// Numeric key of a record id. Attachments are always created with
/// numeric keys.
fn record_key_i64(id: &RecordId) -> i64 {
    id.key().to_string().parse().unwrap_or_default()
}
