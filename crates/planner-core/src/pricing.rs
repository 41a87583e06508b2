//! # Pricing Engine
//!
//! Projects a [`PlanSelection`] onto a [`Catalog`] and produces the itemized,
//! totaled [`PricingResult`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  catalog.venue  ──► qty > 0 ? ──► LineItem ─┐                           │
//! │  catalog.addons ──► qty > 0 ? ──► LineItem ─┼─► venue / addons / meals │
//! │  catalog.meals  ──► selected && headcount>0 ┘        subtotals          │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                                 grand subtotal          │
//! │                                                        │                │
//! │                 selection.applied_promo? ── − discount ─┤               │
//! │                                                        ▼                │
//! │                                                  grand total            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Pure: same selection, same result. No hidden state, no I/O.
//! - Total: every selection prices; there is no error path.
//! - A stored promotion is subtracted as-is. It is NOT re-evaluated here;
//!   see [`crate::promo::revalidate`] for that.

use crate::catalog::{Catalog, CatalogItem};
use crate::money::Money;
use crate::selection::PlanSelection;
use crate::types::{Category, LineItem, LineItemMetadata, PricingResult};

/// Prices a plan.
///
/// ## Example
/// ```rust
/// use planner_core::{pricing, Catalog, Category, PlanSelection};
///
/// let mut plan = PlanSelection::new();
/// plan.set_quantity(Category::Venue, "auditorium-hall", 2).unwrap();
/// plan.set_quantity(Category::Venue, "conference-room", 1).unwrap();
///
/// let result = pricing::compute(&plan, Catalog::standard());
/// assert_eq!(result.venue_subtotal.units(), 14500);
/// assert_eq!(result.grand_total.units(), 14500);
/// ```
pub fn compute(selection: &PlanSelection, catalog: &Catalog) -> PricingResult {
    let mut line_items = Vec::new();

    let venue_subtotal = price_quantified(selection, catalog, Category::Venue, &mut line_items);
    let addons_subtotal = price_quantified(selection, catalog, Category::Addons, &mut line_items);
    let meals_subtotal = price_meals(selection, catalog, &mut line_items);

    let subtotal = venue_subtotal + addons_subtotal + meals_subtotal;

    let applied_promo = selection.applied_promo.clone();
    let grand_total = match &applied_promo {
        Some(promo) => subtotal - promo.discount_amount,
        None => subtotal,
    };

    PricingResult {
        line_items,
        venue_subtotal,
        addons_subtotal,
        meals_subtotal,
        subtotal,
        applied_promo,
        grand_total,
    }
}

/// Venue and add-on items: one line per catalog entry with a quantity.
fn price_quantified(
    selection: &PlanSelection,
    catalog: &Catalog,
    category: Category,
    out: &mut Vec<LineItem>,
) -> Money {
    let mut subtotal = Money::zero();

    for item in catalog.items(category) {
        let quantity = selection.quantity(category, &item.id);
        if quantity == 0 {
            continue;
        }

        let line = line_item(item, category, quantity, None);
        subtotal += line.total;
        out.push(line);
    }

    subtotal
}

/// Meals: every selected meal is priced for the whole headcount.
fn price_meals(selection: &PlanSelection, catalog: &Catalog, out: &mut Vec<LineItem>) -> Money {
    let headcount = selection.meals.headcount;
    if headcount == 0 {
        return Money::zero();
    }

    let mut subtotal = Money::zero();

    for item in catalog.items(Category::Meals) {
        if !selection.meals.is_selected(&item.id) {
            continue;
        }

        let metadata = LineItemMetadata {
            for_people: headcount,
        };
        let line = line_item(item, Category::Meals, headcount, Some(metadata));
        subtotal += line.total;
        out.push(line);
    }

    subtotal
}

fn line_item(
    item: &CatalogItem,
    category: Category,
    quantity: u32,
    metadata: Option<LineItemMetadata>,
) -> LineItem {
    LineItem {
        id: item.id.clone(),
        name: item.name.clone(),
        unit_price: item.unit_price,
        quantity,
        total: item.unit_price.multiply_quantity(quantity),
        category,
        metadata,
    }
}

/// Number of things picked, for the "N items" badge.
///
/// Venue and add-on quantities sum literally. Each selected meal counts as
/// exactly one, whatever the headcount.
///
/// ```rust
/// use planner_core::{pricing, Category, PlanSelection};
///
/// let mut plan = PlanSelection::new();
/// plan.set_quantity(Category::Addons, "speakers", 4).unwrap();
/// plan.set_headcount(120);
/// plan.set_meal_selected("lunch", true);
///
/// assert_eq!(pricing::count_selected_items(&plan), 5);
/// ```
pub fn count_selected_items(selection: &PlanSelection) -> u64 {
    let venue: u64 = selection.venue_quantities.values().map(|&q| q as u64).sum();
    let addons: u64 = selection.addon_quantities.values().map(|&q| q as u64).sum();
    let meals = selection.meals.selected.values().filter(|&&s| s).count() as u64;

    venue + addons + meals
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppliedPromotion;

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    #[test]
    fn test_empty_plan_prices_to_zero() {
        let result = compute(&PlanSelection::new(), catalog());

        assert!(result.venue_subtotal.is_zero());
        assert!(result.addons_subtotal.is_zero());
        assert!(result.meals_subtotal.is_zero());
        assert!(result.subtotal.is_zero());
        assert!(result.grand_total.is_zero());
        assert!(result.line_items.is_empty());
        assert!(result.applied_promo.is_none());
    }

    #[test]
    fn test_venue_totals() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "auditorium-hall", 2).unwrap();
        plan.set_quantity(Category::Venue, "conference-room", 1).unwrap();

        let result = compute(&plan, catalog());

        assert_eq!(result.venue_subtotal.units(), 14500);
        assert_eq!(result.subtotal.units(), 14500);
        assert_eq!(result.grand_total.units(), 14500);
        assert_eq!(result.line_items.len(), 2);
        assert_eq!(result.line_items[0].total.units(), 11000);
        assert_eq!(result.line_items[1].total.units(), 3500);
    }

    #[test]
    fn test_addon_totals() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Addons, "speakers", 5).unwrap();
        plan.set_quantity(Category::Addons, "projectors", 2).unwrap();

        let result = compute(&plan, catalog());

        assert_eq!(result.addons_subtotal.units(), 575);
        assert_eq!(result.grand_total.units(), 575);
        assert_eq!(result.line_items.len(), 2);
    }

    #[test]
    fn test_meal_totals_scale_with_headcount() {
        let mut plan = PlanSelection::new();
        plan.set_headcount(100);
        plan.set_meal_selected("breakfast", true);
        plan.set_meal_selected("lunch", true);

        let result = compute(&plan, catalog());

        assert_eq!(result.meals_subtotal.units(), 11500);
        assert_eq!(result.line_items.len(), 2);
        assert_eq!(result.line_items[0].quantity, 100);
        assert_eq!(result.line_items[0].for_people(), Some(100));
    }

    #[test]
    fn test_meals_need_headcount() {
        let mut plan = PlanSelection::new();
        plan.set_meal_selected("dinner", true);

        let result = compute(&plan, catalog());
        assert!(result.meals_subtotal.is_zero());
        assert!(result.line_items.is_empty());
    }

    #[test]
    fn test_combined_plan() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "auditorium-hall", 1).unwrap();
        plan.set_quantity(Category::Addons, "projectors", 3).unwrap();
        plan.set_headcount(50);
        plan.set_meal_selected("breakfast", true);
        plan.set_meal_selected("dinner", true);

        let result = compute(&plan, catalog());

        assert_eq!(result.venue_subtotal.units(), 5500);
        assert_eq!(result.addons_subtotal.units(), 600);
        assert_eq!(result.meals_subtotal.units(), 6000);
        assert_eq!(result.subtotal.units(), 12100);
        assert_eq!(result.grand_total.units(), 12100);
        assert_eq!(result.line_items.len(), 4);
    }

    #[test]
    fn test_line_items_follow_catalog_order() {
        let mut plan = PlanSelection::new();
        plan.set_headcount(10);
        plan.set_meal_selected("dinner", true);
        plan.set_meal_selected("breakfast", true);
        plan.set_quantity(Category::Addons, "signage", 1).unwrap();
        plan.set_quantity(Category::Venue, "small-meeting-room", 1).unwrap();
        plan.set_quantity(Category::Venue, "auditorium-hall", 1).unwrap();

        let result = compute(&plan, catalog());
        let ids: Vec<&str> = result
            .line_items
            .iter()
            .map(|l| l.id.as_str())
            .collect();

        assert_eq!(
            ids,
            ["auditorium-hall", "small-meeting-room", "signage", "breakfast", "dinner"]
        );
    }

    #[test]
    fn test_explicit_zero_is_not_selected() {
        let mut plan = PlanSelection::new();
        plan.venue_quantities.insert("conference-room".to_string(), 0);

        let result = compute(&plan, catalog());
        assert!(result.line_items.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut plan = PlanSelection::new();
        plan.venue_quantities.insert("ballroom".to_string(), 3);

        let result = compute(&plan, catalog());
        assert!(result.subtotal.is_zero());
    }

    #[test]
    fn test_applied_promo_is_trusted_verbatim() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "auditorium-hall", 1).unwrap();
        // Deliberately stale numbers: the engine must not recompute them
        plan.set_applied_promo(AppliedPromotion {
            code: "EARLYBIRD10".to_string(),
            category: Category::Venue,
            discount_amount: Money::from_units(1100),
            original_subtotal: Money::from_units(11000),
            discounted_subtotal: Money::from_units(9900),
        });

        let result = compute(&plan, catalog());
        assert_eq!(result.subtotal.units(), 5500);
        assert_eq!(result.grand_total.units(), 4400);
        assert_eq!(result.discount().units(), 1100);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "presentation-room", 3).unwrap();
        plan.set_headcount(7);
        plan.set_meal_selected("high-tea", true);

        assert_eq!(compute(&plan, catalog()), compute(&plan, catalog()));
    }

    #[test]
    fn test_count_selected_items() {
        assert_eq!(count_selected_items(&PlanSelection::new()), 0);

        let mut plan = PlanSelection::new();
        plan.set_quantity(Category::Venue, "auditorium-hall", 2).unwrap();
        plan.set_quantity(Category::Venue, "conference-room", 3).unwrap();
        plan.set_quantity(Category::Addons, "speakers", 4).unwrap();
        plan.set_quantity(Category::Addons, "projectors", 1).unwrap();
        plan.set_headcount(300);
        plan.set_meal_selected("breakfast", true);
        plan.set_meal_selected("lunch", false);
        plan.set_meal_selected("dinner", true);

        assert_eq!(count_selected_items(&plan), 2 + 3 + 4 + 1 + 2);
    }
}
