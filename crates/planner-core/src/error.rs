//! # Error Types
//!
//! Domain-specific error types for planner-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  planner-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog / selection / export failures          │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── PromoError       - Promo code rejected or not eligible            │
//! │                                                                         │
//! │  planner-cli errors (app)                                              │
//! │  └── ApiError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                        PromoError ──┴──► ApiError → stderr             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. The pricing engine itself cannot fail; only
//! input handling around it can.

use thiserror::Error;

use crate::types::Category;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Identifier is not part of the catalog for that category.
    #[error("Unknown {category} item: {id}")]
    UnknownItem { category: Category, id: String },

    /// Meals are selected, not counted.
    ///
    /// ## When This Occurs
    /// - Caller tries to set a quantity on a meal instead of toggling it
    #[error("{category} items do not take a quantity")]
    NotQuantified { category: Category },

    /// Structured export could not be parsed back.
    #[error("Malformed export: {0}")]
    MalformedExport(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before a selection is mutated.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Promo Error
// =============================================================================

/// Why a promo code was not applied.
///
/// ## Two Kinds of Failure
/// ```text
/// "  cater15 "
///      │
///      ▼
/// validate_promo_code ──► MissingCode / UnknownCode   (input problem)
///      │
///      ▼
/// evaluate ─────────────► NotEligible { reason }      (plan problem)
///      │
///      ▼
/// AppliedPromotion
/// ```
///
/// The `Display` output of every variant is the exact message shown inline
/// next to the promo input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    /// Input was empty or whitespace only.
    #[error("Please enter a promo code")]
    MissingCode,

    /// Input did not match any known code.
    #[error("Invalid promo code")]
    UnknownCode { input: String },

    /// Code is known but the plan does not satisfy its condition.
    #[error("{reason}")]
    NotEligible {
        code: String,
        category: Category,
        reason: String,
    },
}

impl PromoError {
    /// True for input problems, false for eligibility problems.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PromoError::MissingCode | PromoError::UnknownCode { .. })
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result of validating or evaluating a promo code.
pub type PromoResult<T> = Result<T, PromoError>;

// =============================================================================
// Unit Tests
// =============================================================================
