//! Sales Order API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, State},
};

use shared::request::CreateOrderRequest;
use shared::response::{AttachmentResponse, SalesOrderResponse};
use shared::{ApiResponse, EntityRef};

use crate::attachments::AttachmentService;
use crate::core::ServerState;
use crate::orders::{OrderProjection, OrderService};
use crate::utils::{AppError, AppResult, ErrorCode, ok};

/// Create and complete a sales order, returning the projected view.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<SalesOrderResponse>>> {
    let service = OrderService::new(
        state.db.clone(),
        state.config.client_id,
        state.config.org_id,
    );
    let order_id = service.create_order(&payload).await?;

    let projection = OrderProjection::new(state.db.clone());
    let response = projection.project(order_id).await?;

    Ok(ok(response))
}

/// List attachments of an order.
pub async fn list_attachments(
    State(state): State<ServerState>,
    Path(sales_order_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<AttachmentResponse>>>> {
    let order_id = parse_order_id(&sales_order_id)?;

    let service = AttachmentService::new(state.db.clone(), state.config.attachments_dir());
    let attachments = service.list_for(EntityRef::sales_order(order_id)).await?;

    Ok(ok(attachments))
}

/// Upload an attachment for an order. The payload must carry a `file`
/// multipart field.
pub async fn upload_attachment(
    State(state): State<ServerState>,
    Path(sales_order_id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<AttachmentResponse>>> {
    let order_id = parse_order_id(&sales_order_id)?;

    let mut file_data: Option<Vec<u8>> = None;
    let mut original_filename: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_request(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            original_filename = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::invalid_request(format!("Failed to read file field: {e}"))
                    })?
                    .to_vec(),
            );
            break;
        }
    }

    let data = file_data.ok_or_else(|| AppError::new(ErrorCode::NoFileProvided))?;
    let filename = original_filename.ok_or_else(|| AppError::new(ErrorCode::NoFilename))?;

    let service = AttachmentService::new(state.db.clone(), state.config.attachments_dir());
    let attachment = service
        .create(EntityRef::sales_order(order_id), &filename, data)
        .await?;

    Ok(ok(attachment))
}

/// Forward a payment request to the gateway. The order reference travels
/// in the body and the gateway owns its interpretation.
pub async fn create_payment(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.payments.create_payment(payload).await?;

    Ok(ok(()))
}

/// Attachment path ids must be plain numeric sales-order ids.
fn parse_order_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::malformed_owner(format!("Invalid sales order id '{raw}'")))
}
