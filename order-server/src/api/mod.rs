//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`orders`] - sales order creation, attachments and payments

pub mod health;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppResult, ok};
