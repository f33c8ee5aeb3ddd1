//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Business-rule failures (unresolvable product/partner/doc type, bad
    /// quantity, empty order) map to 422 so clients can distinguish them
    /// from malformed requests (400) and missing resources (404).
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound | Self::AttachmentOwnerNotFound => {
                StatusCode::NOT_FOUND
            }

            // 422 Unprocessable Entity (business-rule failures)
            Self::ValidationFailed
            | Self::OrderEmpty
            | Self::InvalidQuantity
            | Self::PaymentFailed
            | Self::ProductNotFound
            | Self::PartnerNotFound
            | Self::DocTypeNotFound => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::FileStorageFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (malformed input, default)
            Self::Unknown
            | Self::InvalidRequest
            | Self::FileTooLarge
            | Self::NoFileProvided
            | Self::EmptyFile
            | Self::NoFilename
            | Self::MalformedAttachmentOwner => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::AttachmentOwnerNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_business_rule_status() {
        assert_eq!(
            ErrorCode::ProductNotFound.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::PartnerNotFound.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::DocTypeNotFound.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::InvalidQuantity.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::OrderEmpty.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::PaymentFailed.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::MalformedAttachmentOwner.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::NoFileProvided.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::FileStorageFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
