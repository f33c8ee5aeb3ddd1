//! Payment gateway pass-through.
//!
//! The server does not process payments itself. The request body is
//! forwarded to the configured gateway verbatim and only the outcome is
//! reported back. Every failure on this path, including a missing gateway
//! configuration, reads as a payment failure to the caller.

use shared::{AppError, AppResult, ErrorCode};

#[derive(Clone, Debug)]
pub struct PaymentClient {
    http: reqwest::Client,
    gateway_url: Option<String>,
}

impl PaymentClient {
    pub fn new(gateway_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            gateway_url,
        }
    }

    /// Forward a payment request to the gateway.
    ///
    /// Any 2xx from the gateway counts as success. Everything else,
    /// including an unreachable or unconfigured gateway, surfaces as a
    /// payment failure.
    pub async fn create_payment(&self, payload: serde_json::Value) -> AppResult<()> {
        let url = self.gateway_url.as_deref().ok_or_else(|| {
            AppError::with_message(
                ErrorCode::PaymentFailed,
                "Payment gateway is not configured",
            )
        })?;

        let response = self.http.post(url).json(&payload).send().await.map_err(|e| {
            AppError::with_message(
                ErrorCode::PaymentFailed,
                format!("Payment gateway unreachable: {e}"),
            )
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("payment accepted by gateway");
            Ok(())
        } else {
            Err(AppError::with_message(
                ErrorCode::PaymentFailed,
                format!("Payment gateway returned {status}"),
            )
            .with_detail("status", status.as_u16()))
        }
    }
}
