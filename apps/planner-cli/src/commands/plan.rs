//! # Plan Commands
//!
//! Commands that read or change the plan selection.
//!
//! ## Plan Lifecycle
//! ```text
//! ┌──────────┐  set_item_quantity   ┌──────────┐  apply_promo_code  ┌──────────┐
//! │  Empty   │ ───────────────────► │ Planning │ ─────────────────► │ Promoted │
//! │  Plan    │  set_headcount       │          │ ◄───────────────── │          │
//! └──────────┘  toggle_meal         └──────────┘  clear_promo /     └──────────┘
//!       ▲                                 │        refresh drops it       │
//!       └────────── reset_plan ───────────┴───────────────────────────────┘
//! ```
//!
//! Every mutating command ends with [`refresh_promotion`] so a stored
//! discount is never left describing an older plan.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, PlanState};
use planner_core::{pricing, promo, validation, Catalog, Category, PlanSelection, PricingResult};

/// Plan response: the selection, its priced breakdown and the item badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub selection: PlanSelection,
    pub pricing: PricingResult,
    pub item_count: u64,
}

impl From<&PlanSelection> for PlanResponse {
    fn from(selection: &PlanSelection) -> Self {
        PlanResponse {
            selection: selection.clone(),
            pricing: pricing::compute(selection, Catalog::standard()),
            item_count: pricing::count_selected_items(selection),
        }
    }
}

/// Re-evaluates the stored promotion against the current plan.
///
/// ## Behavior
/// - No promotion stored: nothing to do
/// - Strict mode off: promotion kept verbatim
/// - Still eligible: numbers refreshed (e.g. more projectors, bigger discount)
/// - No longer eligible: promotion dropped
pub fn refresh_promotion(plan: &mut PlanSelection, config: &ConfigState) {
    if !config.strict_promotions || plan.applied_promo.is_none() {
        return;
    }

    match promo::revalidate(plan, Catalog::standard()) {
        Some(refreshed) => {
            if plan.applied_promo.as_ref() != Some(&refreshed) {
                debug!(
                    code = %refreshed.code,
                    discount = refreshed.discount_amount.units(),
                    "promotion refreshed"
                );
            }
            plan.set_applied_promo(refreshed);
        }
        None => {
            if let Some(dropped) = plan.clear_promo() {
                warn!(code = %dropped.code, "promotion no longer applies, removed");
            }
        }
    }
}

/// Gets the current plan with totals.
pub fn get_plan(plan: &PlanState) -> PlanResponse {
    debug!("get_plan command");
    plan.with_plan(|p| PlanResponse::from(p))
}

/// Sets the quantity of a venue room or add-on.
///
/// ## Behavior
/// - Quantity 0: removes the item
/// - Unknown id for the category: NOT_FOUND
/// - Quantity > 999: VALIDATION_ERROR
pub fn set_item_quantity(
    plan: &PlanState,
    config: &ConfigState,
    category: Category,
    id: &str,
    quantity: u32,
) -> Result<PlanResponse, ApiError> {
    debug!(%category, id, quantity, "set_item_quantity command");

    validation::validate_item(Catalog::standard(), category, id)?;
    validation::validate_quantity(quantity)?;

    plan.with_plan_mut(|p| -> Result<PlanResponse, ApiError> {
        p.set_quantity(category, id, quantity)?;
        refresh_promotion(p, config);
        Ok(PlanResponse::from(&*p))
    })
}

/// Adds one unit of a venue room or add-on (the stepper's `+`).
pub fn increment_item(
    plan: &PlanState,
    config: &ConfigState,
    category: Category,
    id: &str,
) -> Result<PlanResponse, ApiError> {
    debug!(%category, id, "increment_item command");

    validation::validate_item(Catalog::standard(), category, id)?;
    let current = plan.with_plan(|p| p.quantity(category, id));
    validation::validate_quantity(current.saturating_add(1))?;

    plan.with_plan_mut(|p| -> Result<PlanResponse, ApiError> {
        p.increment(category, id)?;
        refresh_promotion(p, config);
        Ok(PlanResponse::from(&*p))
    })
}

/// Removes one unit of a venue room or add-on (the stepper's `-`).
pub fn decrement_item(
    plan: &PlanState,
    config: &ConfigState,
    category: Category,
    id: &str,
) -> Result<PlanResponse, ApiError> {
    debug!(%category, id, "decrement_item command");

    validation::validate_item(Catalog::standard(), category, id)?;

    plan.with_plan_mut(|p| -> Result<PlanResponse, ApiError> {
        p.decrement(category, id)?;
        refresh_promotion(p, config);
        Ok(PlanResponse::from(&*p))
    })
}

/// Sets the number of people meals are priced for.
///
/// ## Behavior
/// - 0: no people, meals drop out of pricing
/// - 1..=max_headcount: accepted
/// - Above the configured maximum: VALIDATION_ERROR
pub fn set_headcount(
    plan: &PlanState,
    config: &ConfigState,
    headcount: u32,
) -> Result<PlanResponse, ApiError> {
    debug!(headcount, "set_headcount command");

    if headcount > 0 {
        validation::validate_headcount_with_max(headcount, config.max_headcount)?;
    }

    Ok(plan.with_plan_mut(|p| {
        p.set_headcount(headcount);
        refresh_promotion(p, config);
        PlanResponse::from(&*p)
    }))
}

/// Ticks or unticks a meal.
pub fn toggle_meal(
    plan: &PlanState,
    config: &ConfigState,
    meal_id: &str,
) -> Result<PlanResponse, ApiError> {
    debug!(meal_id, "toggle_meal command");

    validation::validate_item(Catalog::standard(), Category::Meals, meal_id)?;

    Ok(plan.with_plan_mut(|p| {
        p.toggle_meal(meal_id);
        refresh_promotion(p, config);
        PlanResponse::from(&*p)
    }))
}

/// Clears the whole plan, promotion included.
pub fn reset_plan(plan: &PlanState) -> PlanResponse {
    debug!("reset_plan command");

    plan.with_plan_mut(|p| {
        p.reset();
        PlanResponse::from(&*p)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn strict() -> ConfigState {
        ConfigState::default()
    }

    fn lenient() -> ConfigState {
        ConfigState {
            strict_promotions: false,
            ..ConfigState::default()
        }
    }

    #[test]
    fn test_set_item_quantity() {
        let plan = PlanState::new();
        let response =
            set_item_quantity(&plan, &strict(), Category::Venue, "auditorium-hall", 2).unwrap();

        assert_eq!(response.pricing.venue_subtotal.units(), 11000);
        assert_eq!(response.item_count, 2);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let plan = PlanState::new();
        let err = set_item_quantity(&plan, &strict(), Category::Addons, "lasers", 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(plan.snapshot().addon_quantities.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let plan = PlanState::new();
        let err =
            set_item_quantity(&plan, &strict(), Category::Addons, "speakers", 1000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_stepper() {
        let plan = PlanState::new();
        increment_item(&plan, &strict(), Category::Addons, "signage").unwrap();
        increment_item(&plan, &strict(), Category::Addons, "signage").unwrap();
        let response = decrement_item(&plan, &strict(), Category::Addons, "signage").unwrap();

        assert_eq!(response.pricing.addons_subtotal.units(), 80);
        assert_eq!(response.item_count, 1);
    }

    #[test]
    fn test_headcount_bounds_follow_config() {
        let plan = PlanState::new();
        assert!(set_headcount(&plan, &strict(), 501).is_err());

        let roomy = ConfigState {
            max_headcount: 1000,
            ..ConfigState::default()
        };
        assert!(set_headcount(&plan, &roomy, 750).is_ok());
    }

    #[test]
    fn test_zero_headcount_clears_meals() {
        let plan = PlanState::new();
        set_headcount(&plan, &strict(), 80).unwrap();
        toggle_meal(&plan, &strict(), "breakfast").unwrap();

        let response = set_headcount(&plan, &strict(), 0).unwrap();
        assert_eq!(response.selection.meals.headcount, 0);
        assert!(response.pricing.meals_subtotal.is_zero());
        assert_eq!(response.pricing.line_items_for(Category::Meals).count(), 0);
    }

    #[test]
    fn test_toggle_meal_counts_once() {
        let plan = PlanState::new();
        set_headcount(&plan, &strict(), 120).unwrap();
        let response = toggle_meal(&plan, &strict(), "lunch").unwrap();

        assert_eq!(response.item_count, 1);
        assert_eq!(response.pricing.meals_subtotal.units(), 65 * 120);
        assert!(toggle_meal(&plan, &strict(), "brunch").is_err());
    }

    #[test]
    fn test_strict_mode_drops_stale_promotion() {
        let plan = PlanState::new();
        let config = strict();
        set_headcount(&plan, &config, 60).unwrap();
        toggle_meal(&plan, &config, "dinner").unwrap();
        plan.with_plan_mut(|p| {
            let applied = promo::apply_code("CATER15", p, Catalog::standard()).unwrap();
            p.set_applied_promo(applied);
        });

        let response = set_headcount(&plan, &config, 40).unwrap();
        assert!(response.selection.applied_promo.is_none());
        assert_eq!(response.pricing.grand_total, response.pricing.subtotal);
    }

    #[test]
    fn test_strict_mode_refreshes_discount() {
        let plan = PlanState::new();
        let config = strict();
        set_item_quantity(&plan, &config, Category::Venue, "conference-room", 1).unwrap();
        plan.with_plan_mut(|p| {
            let applied = promo::apply_code("EARLYBIRD10", p, Catalog::standard()).unwrap();
            p.set_applied_promo(applied);
        });

        let response =
            set_item_quantity(&plan, &config, Category::Venue, "conference-room", 2).unwrap();
        let applied = response.pricing.applied_promo.unwrap();
        assert_eq!(applied.discount_amount.units(), 700);
        assert_eq!(response.pricing.grand_total.units(), 6300);
    }

    #[test]
    fn test_lenient_mode_keeps_promotion_verbatim() {
        let plan = PlanState::new();
        let config = lenient();
        set_item_quantity(&plan, &config, Category::Venue, "conference-room", 1).unwrap();
        plan.with_plan_mut(|p| {
            let applied = promo::apply_code("EARLYBIRD10", p, Catalog::standard()).unwrap();
            p.set_applied_promo(applied);
        });

        let response =
            set_item_quantity(&plan, &config, Category::Venue, "conference-room", 2).unwrap();
        assert_eq!(response.pricing.discount().units(), 350);
        assert_eq!(response.pricing.grand_total.units(), 6650);
    }

    #[test]
    fn test_reset_plan() {
        let plan = PlanState::new();
        set_item_quantity(&plan, &strict(), Category::Addons, "projectors", 4).unwrap();

        let response = reset_plan(&plan);
        assert!(response.pricing.is_empty());
        assert_eq!(response.item_count, 0);
    }
}
