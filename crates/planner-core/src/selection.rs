//! # Plan Selection
//!
//! The caller-owned input to pricing: quantities, headcount, meal choices
//! and the currently applied promotion.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller (state container)                                              │
//! │     │  owns & mutates                                                  │
//! │     ▼                                                                   │
//! │  PlanSelection ──── &borrow ────► pricing::compute    (never mutates)  │
//! │     ▲                             promo::evaluate     (never mutates)  │
//! │     │                                   │                               │
//! │     └────── set_applied_promo ◄─────────┘ AppliedPromotion             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An identifier mapped to `0` and an absent identifier mean the same thing.
//! The mutators below never leave a `0` behind, but deserialized selections
//! may contain one and every consumer copes.
//!
//! Quantities are unsigned, so a negative quantity cannot be represented;
//! a selection file containing one is rejected at deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{AppliedPromotion, Category};

/// Meal choices: one headcount shared by every selected meal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MealSelection {
    pub headcount: u32,
    #[serde(default)]
    pub selected: BTreeMap<String, bool>,
}

impl MealSelection {
    /// Whether a meal is ticked.
    pub fn is_selected(&self, meal_id: &str) -> bool {
        self.selected.get(meal_id).copied().unwrap_or(false)
    }
}

/// The user's current plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlanSelection {
    #[serde(default)]
    pub venue_quantities: BTreeMap<String, u32>,
    #[serde(default)]
    pub addon_quantities: BTreeMap<String, u32>,
    #[serde(default)]
    pub meals: MealSelection,
    #[serde(default)]
    pub applied_promo: Option<AppliedPromotion>,
}

impl PlanSelection {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    fn quantities(&self, category: Category) -> CoreResult<&BTreeMap<String, u32>> {
        match category {
            Category::Venue => Ok(&self.venue_quantities),
            Category::Addons => Ok(&self.addon_quantities),
            Category::Meals => Err(CoreError::NotQuantified { category }),
        }
    }

    fn quantities_mut(&mut self, category: Category) -> CoreResult<&mut BTreeMap<String, u32>> {
        match category {
            Category::Venue => Ok(&mut self.venue_quantities),
            Category::Addons => Ok(&mut self.addon_quantities),
            Category::Meals => Err(CoreError::NotQuantified { category }),
        }
    }

    /// Quantity of a venue or add-on item; absent means 0.
    pub fn quantity(&self, category: Category, id: &str) -> u32 {
        self.quantities(category)
            .ok()
            .and_then(|q| q.get(id).copied())
            .unwrap_or(0)
    }

    /// Sets a quantity. Zero removes the entry.
    pub fn set_quantity(&mut self, category: Category, id: &str, quantity: u32) -> CoreResult<()> {
        let quantities = self.quantities_mut(category)?;
        if quantity == 0 {
            quantities.remove(id);
        } else {
            quantities.insert(id.to_string(), quantity);
        }
        Ok(())
    }

    /// Adds one unit and returns the new quantity.
    pub fn increment(&mut self, category: Category, id: &str) -> CoreResult<u32> {
        let quantities = self.quantities_mut(category)?;
        let entry = quantities.entry(id.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        Ok(*entry)
    }

    /// Removes one unit and returns the new quantity. Never goes below zero.
    pub fn decrement(&mut self, category: Category, id: &str) -> CoreResult<u32> {
        let quantities = self.quantities_mut(category)?;
        let next = quantities.get(id).copied().unwrap_or(0).saturating_sub(1);
        if next == 0 {
            quantities.remove(id);
        } else {
            quantities.insert(id.to_string(), next);
        }
        Ok(next)
    }

    /// Sets the meal headcount.
    pub fn set_headcount(&mut self, headcount: u32) {
        self.meals.headcount = headcount;
    }

    /// Flips a meal and returns its new state.
    pub fn toggle_meal(&mut self, meal_id: &str) -> bool {
        let next = !self.meals.is_selected(meal_id);
        self.meals.selected.insert(meal_id.to_string(), next);
        next
    }

    pub fn set_meal_selected(&mut self, meal_id: &str, selected: bool) {
        self.meals.selected.insert(meal_id.to_string(), selected);
    }

    /// Stores an evaluated promotion. The engine will trust it verbatim.
    pub fn set_applied_promo(&mut self, promo: AppliedPromotion) {
        self.applied_promo = Some(promo);
    }

    /// Drops the applied promotion, returning it if there was one.
    pub fn clear_promo(&mut self) -> Option<AppliedPromotion> {
        self.applied_promo.take()
    }

    /// Copy of this plan with no promotion attached.
    pub fn without_promo(&self) -> PlanSelection {
        PlanSelection {
            applied_promo: None,
            ..self.clone()
        }
    }

    /// Back to an empty plan.
    pub fn reset(&mut self) {
        *self = PlanSelection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_set_quantity_zero_removes_entry() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "conference-room", 2).unwrap();
        assert_eq!(plan.quantity(Category::Venue, "conference-room"), 2);

        plan.set_quantity(Category::Venue, "conference-room", 0).unwrap();
        assert!(plan.venue_quantities.is_empty());
        assert_eq!(plan.quantity(Category::Venue, "conference-room"), 0);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut plan = PlanSelection::new();
        assert_eq!(plan.increment(Category::Addons, "speakers").unwrap(), 1);
        assert_eq!(plan.increment(Category::Addons, "speakers").unwrap(), 2);
        assert_eq!(plan.decrement(Category::Addons, "speakers").unwrap(), 1);
        assert_eq!(plan.decrement(Category::Addons, "speakers").unwrap(), 0);
        assert!(!plan.addon_quantities.contains_key("speakers"));

        // Decrementing an absent item is a no-op
        assert_eq!(plan.decrement(Category::Addons, "speakers").unwrap(), 0);
    }

    #[test]
    fn test_meals_do_not_take_quantities() {
        let mut plan = PlanSelection::new();
        let err = plan.set_quantity(Category::Meals, "lunch", 3).unwrap_err();
        assert!(matches!(err, CoreError::NotQuantified { .. }));
        assert_eq!(plan.quantity(Category::Meals, "lunch"), 0);
    }

    #[test]
    fn test_toggle_meal() {
        let mut plan = PlanSelection::new();
        assert!(plan.toggle_meal("dinner"));
        assert!(plan.meals.is_selected("dinner"));
        assert!(!plan.toggle_meal("dinner"));
        assert!(!plan.meals.is_selected("dinner"));
    }

    #[test]
    fn test_promo_lifecycle() {
        let mut plan = PlanSelection::new();
        plan.set_applied_promo(AppliedPromotion {
            code: "EARLYBIRD10".to_string(),
            category: Category::Venue,
            discount_amount: Money::from_units(550),
            original_subtotal: Money::from_units(5500),
            discounted_subtotal: Money::from_units(4950),
        });

        assert!(plan.without_promo().applied_promo.is_none());
        assert!(plan.applied_promo.is_some());

        let cleared = plan.clear_promo().unwrap();
        assert_eq!(cleared.code, "EARLYBIRD10");
        assert!(plan.applied_promo.is_none());
    }

    #[test]
    fn test_reset() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "auditorium-hall", 1).unwrap();
        plan.set_headcount(40);
        plan.toggle_meal("lunch");

        plan.reset();
        assert_eq!(plan, PlanSelection::default());
    }

    #[test]
    fn test_deserialize_partial_plan() {
        let plan: PlanSelection =
            serde_json::from_str(r#"{ "venueQuantities": { "auditorium-hall": 1 } }"#).unwrap();
        assert_eq!(plan.quantity(Category::Venue, "auditorium-hall"), 1);
        assert_eq!(plan.meals.headcount, 0);
        assert!(plan.applied_promo.is_none());
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let result: Result<PlanSelection, _> =
            serde_json::from_str(r#"{ "addonQuantities": { "speakers": -2 } }"#);
        assert!(result.is_err());
    }
}
