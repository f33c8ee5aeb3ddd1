//! Sales Order API Module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/orders/sales | POST | Create and complete a sales order |
//! | /api/orders/sales/{id}/attachments | GET | List order attachments |
//! | /api/orders/sales/{id}/attachments | POST | Upload an attachment (multipart) |
//! | /api/orders/sales/payment | POST | Forward a payment to the gateway |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Sales order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders/sales", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route(
            "/{sales_order_id}/attachments",
            get(handler::list_attachments).post(handler::upload_attachment),
        )
        .route("/payment", post(handler::create_payment))
}
