//! # Promo Commands
//!
//! Applying, clearing and listing promotion codes.
//!
//! ## Apply Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  " cater15 " ──► validate_promo_input ──► apply_code ──► store record   │
//! │                        │                      │                         │
//! │                        ▼                      ▼                         │
//! │                 VALIDATION_ERROR      INVALID_PROMO /                   │
//! │                 (over 32 chars)       PROMO_NOT_ELIGIBLE                │
//! │                                                                         │
//! │  A failed attempt leaves any previously applied promotion untouched.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::plan::PlanResponse;
use crate::error::ApiError;
use crate::state::PlanState;
use planner_core::{promo, validation, Catalog, Category, PromotionRegistry};

/// One entry of the promotion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionSummary {
    pub code: String,
    pub category: Category,
    pub discount_percent: u8,
    pub description: String,
}

/// Applies a promo code to the current plan.
///
/// ## Behavior
/// - Input is trimmed and matched case-insensitively
/// - On success the evaluated record replaces any earlier promotion
/// - On failure the plan is unchanged and the message is shown verbatim
pub fn apply_promo_code(plan: &PlanState, input: &str) -> Result<PlanResponse, ApiError> {
    debug!(input, "apply_promo_code command");

    validation::validate_promo_input(input)?;

    plan.with_plan_mut(|p| -> Result<PlanResponse, ApiError> {
        let applied = promo::apply_code(input, p, Catalog::standard())?;

        info!(
            code = %applied.code,
            category = %applied.category,
            discount = applied.discount_amount.units(),
            "Promotion applied"
        );

        p.set_applied_promo(applied);
        Ok(PlanResponse::from(&*p))
    })
}

/// Removes the applied promotion, if any.
pub fn clear_promo(plan: &PlanState) -> PlanResponse {
    debug!("clear_promo command");

    plan.with_plan_mut(|p| {
        if let Some(dropped) = p.clear_promo() {
            info!(code = %dropped.code, "Promotion cleared");
        }
        PlanResponse::from(&*p)
    })
}

/// Lists every known promotion in registry order.
pub fn list_promotions() -> Vec<PromotionSummary> {
    debug!("list_promotions command");

    PromotionRegistry::standard()
        .rules()
        .iter()
        .map(|rule| PromotionSummary {
            code: rule.code.clone(),
            category: rule.category,
            discount_percent: rule.discount_percent,
            description: rule.summary(),
        })
        .collect()
}
