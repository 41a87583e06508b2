//! # API Error Type
//!
//! Unified error type for planner commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Planner                            │
//! │                                                                         │
//! │  Command Function  →  Result<T, ApiError>                               │
//! │         │                                                               │
//! │         ├── Unknown item / bad headcount ── CoreError ──────┐           │
//! │         │                                                   │           │
//! │         ├── Empty / unknown promo code ──── PromoError ─────┼─► ApiError│
//! │         │                                                   │           │
//! │         ├── Promo condition not met ─────── PromoError ─────┤           │
//! │         │                                                   │           │
//! │         └── Plan file unreadable ─────────── io / serde ────┘           │
//! │                                                                         │
//! │  ApiError.message is printed verbatim, inline, to the user.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. The CLI prints the message and exits non-zero.

use planner_core::{CoreError, PromoError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error returned from planner commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "PROMO_NOT_ELIGIBLE",
///   "message": "Number of people must be at least 50"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item or plan file not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Promo code empty or unknown
    InvalidPromo,

    /// Promo code known but its condition is not met
    PromoNotEligible,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::UnknownItem { category, id } => {
                ApiError::not_found(&format!("{} item", category), &id)
            }
            CoreError::NotQuantified { .. } => ApiError::validation(message),
            CoreError::MalformedExport(e) => {
                tracing::error!("Export serialization failed: {}", e);
                ApiError::internal("Could not produce export")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts promo errors to API errors, keeping the exact user message.
impl From<PromoError> for ApiError {
    fn from(err: PromoError) -> Self {
        let code = if err.is_invalid_input() {
            ErrorCode::InvalidPromo
        } else {
            ErrorCode::PromoNotEligible
        };
        ApiError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::Category;

    #[test]
    fn test_promo_errors_keep_message() {
        let err = ApiError::from(PromoError::MissingCode);
        assert_eq!(err.code, ErrorCode::InvalidPromo);
        assert_eq!(err.message, "Please enter a promo code");

        let err = ApiError::from(PromoError::NotEligible {
            code: "AVBUNDLE5".to_string(),
            category: Category::Addons,
            reason: "Add-ons subtotal must be at least $500".to_string(),
        });
        assert_eq!(err.code, ErrorCode::PromoNotEligible);
        assert_eq!(err.message, "Add-ons subtotal must be at least $500");
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let err = ApiError::from(CoreError::UnknownItem {
            category: Category::Venue,
            id: "ballroom".to_string(),
        });
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "venue item not found: ballroom");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "bad");
    }
}
