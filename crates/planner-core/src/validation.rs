//! # Validation Module
//!
//! Input checks the caller runs before mutating a [`PlanSelection`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Negative quantities cannot be represented (u32)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Item exists in the catalog for its category                       │
//! │  ├── Quantity ≤ MAX_ITEM_QUANTITY                                      │
//! │  ├── Headcount within MIN_PEOPLE..=max                                 │
//! │  └── Promo input length                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  └── Total over every selection; unknown ids are simply not priced     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`PlanSelection`]: crate::selection::PlanSelection

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Category;
use crate::{MAX_ITEM_QUANTITY, MAX_PEOPLE, MAX_PROMO_CODE_LEN, MIN_PEOPLE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that `id` names a catalog item of `category`.
///
/// ```rust
/// use planner_core::validation::validate_item;
/// use planner_core::{Catalog, Category};
///
/// assert!(validate_item(Catalog::standard(), Category::Venue, "conference-room").is_ok());
/// assert!(validate_item(Catalog::standard(), Category::Venue, "speakers").is_err());
/// ```
pub fn validate_item(catalog: &Catalog, category: Category, id: &str) -> CoreResult<()> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation(ValidationError::Required {
            field: "id".to_string(),
        }));
    }

    catalog.require(category, id).map(|_| ())
}

/// Validates a venue or add-on quantity. Zero is allowed (it deselects).
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a headcount against the catalog bounds.
pub fn validate_headcount(headcount: u32) -> ValidationResult<()> {
    validate_headcount_with_max(headcount, MAX_PEOPLE)
}

/// Validates a headcount against a caller-chosen upper bound.
///
/// ## User Workflow
/// ```text
/// "Number of people" input: 650
///      │
///      ▼
/// validate_headcount_with_max(650, 500) ← THIS FUNCTION
///      │
///      ├── < 1?   → "headcount must be between 1 and 500"
///      ├── > max? → "headcount must be between 1 and 500"
///      └── OK     → set_headcount(650)
/// ```
pub fn validate_headcount_with_max(headcount: u32, max: u32) -> ValidationResult<()> {
    if headcount < MIN_PEOPLE || headcount > max {
        return Err(ValidationError::OutOfRange {
            field: "headcount".to_string(),
            min: MIN_PEOPLE as i64,
            max: max as i64,
        });
    }

    Ok(())
}

/// Rejects absurdly long promo input before it reaches the registry.
///
/// Emptiness is not checked here; the registry reports that with its own
/// message.
pub fn validate_promo_input(input: &str) -> ValidationResult<()> {
    if input.trim().chars().count() > MAX_PROMO_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "promo code".to_string(),
            max: MAX_PROMO_CODE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
