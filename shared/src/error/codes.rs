//! Unified error codes for the sales-order service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Product errors (65xx: attachments/files)
//! - 7xxx: Business-partner errors
//! - 8xxx: Document errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 4,

    // ==================== 4xxx: Order ====================
    /// Sales order not found
    OrderNotFound = 4001,
    /// Order has no lines
    OrderEmpty = 4002,
    /// Line quantity is negative or not a finite number
    InvalidQuantity = 4003,

    // ==================== 5xxx: Payment ====================
    /// Payment creation failed at the external collaborator
    PaymentFailed = 5001,

    // ==================== 6xxx: Product ====================
    /// No product owns the given GTIN or barcode
    ProductNotFound = 6001,

    // ==================== 65xx: Attachments / Files ====================
    /// File too large
    FileTooLarge = 6501,
    /// No file field provided in request
    NoFileProvided = 6502,
    /// Empty file provided
    EmptyFile = 6503,
    /// No filename provided
    NoFilename = 6504,
    /// Owning entity reference could not be parsed
    MalformedAttachmentOwner = 6505,
    /// Owning entity does not exist
    AttachmentOwnerNotFound = 6506,
    /// Attachment payload could not be written or read
    FileStorageFailed = 6507,

    // ==================== 7xxx: Business partner ====================
    /// Ship-to partner not found in the caller's organization
    PartnerNotFound = 7001,

    // ==================== 8xxx: Document ====================
    /// Named document type not found for the sales-order category
    DocTypeNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Order
            ErrorCode::OrderNotFound => "Sales order not found",
            ErrorCode::OrderEmpty => "Order must contain at least one line",
            ErrorCode::InvalidQuantity => "Quantity must be a finite, non-negative number",

            // Payment
            ErrorCode::PaymentFailed => "Payment creation failed",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // Attachments / files
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::NoFilename => "No filename provided",
            ErrorCode::MalformedAttachmentOwner => "Malformed owning entity reference",
            ErrorCode::AttachmentOwnerNotFound => "Owning entity not found",
            ErrorCode::FileStorageFailed => "File storage failed",

            // Business partner
            ErrorCode::PartnerNotFound => "Business partner not found",

            // Document
            ErrorCode::DocTypeNotFound => "Document type not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::InvalidRequest,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderEmpty,
            4003 => ErrorCode::InvalidQuantity,
            5001 => ErrorCode::PaymentFailed,
            6001 => ErrorCode::ProductNotFound,
            6501 => ErrorCode::FileTooLarge,
            6502 => ErrorCode::NoFileProvided,
            6503 => ErrorCode::EmptyFile,
            6504 => ErrorCode::NoFilename,
            6505 => ErrorCode::MalformedAttachmentOwner,
            6506 => ErrorCode::AttachmentOwnerNotFound,
            6507 => ErrorCode::FileStorageFailed,
            7001 => ErrorCode::PartnerNotFound,
            8001 => ErrorCode::DocTypeNotFound,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
