//! # Domain Types
//!
//! Derived types produced by the pricing engine and the promotion evaluator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────────┐  │
//! │  │    Category     │   │    LineItem     │   │  AppliedPromotion    │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────────  │  │
//! │  │  Venue          │   │  id, name       │   │  code, category      │  │
//! │  │  Addons         │   │  unit_price     │   │  discount_amount     │  │
//! │  │  Meals          │   │  quantity,total │   │  original_subtotal   │  │
//! │  └─────────────────┘   │  metadata?      │   │  discounted_subtotal │  │
//! │                        └─────────────────┘   └──────────────────────┘  │
//! │                                                                         │
//! │                 ┌──────────────────────────────────────┐               │
//! │                 │            PricingResult             │               │
//! │                 │  line_items (venue → addons → meals) │               │
//! │                 │  per-category subtotals, subtotal    │               │
//! │                 │  applied_promo?, grand_total         │               │
//! │                 └──────────────────────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these serialize with camelCase field names. That JSON shape is
//! what the structured export and the planner UI consume.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// One of the three pricing categories, the unit of promotional scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Venue,
    Addons,
    Meals,
}

impl Category {
    /// All categories in line-item order.
    pub const ALL: [Category; 3] = [Category::Venue, Category::Addons, Category::Meals];

    /// Wire name, identical to the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Venue => "venue",
            Category::Addons => "addons",
            Category::Meals => "meals",
        }
    }

    /// Human-readable label used in export subtotal rows.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Venue => "Venue",
            Category::Addons => "Add-ons",
            Category::Meals => "Meals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// Extra data carried by meal line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemMetadata {
    /// Headcount the meal was priced for.
    pub for_people: u32,
}

/// One priced, quantity-resolved entry in the breakdown.
///
/// ## Invariants
/// - `total == unit_price × quantity`
/// - `quantity > 0`
/// - meals have `quantity == metadata.for_people`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub total: Money,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub metadata: Option<LineItemMetadata>,
}

impl LineItem {
    /// Headcount this item was priced for, if it is a meal.
    #[inline]
    pub fn for_people(&self) -> Option<u32> {
        self.metadata.map(|m| m.for_people)
    }
}

// =============================================================================
// Applied Promotion
// =============================================================================

/// Frozen record of a successfully evaluated discount.
///
/// ## Snapshot Pattern
/// Like a receipt line, the numbers are captured at the moment the code is
/// accepted. The pricing engine subtracts `discount_amount` as-is and never
/// re-derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPromotion {
    /// Canonical upper-case code.
    pub code: String,
    pub category: Category,
    pub discount_amount: Money,
    /// Category subtotal the discount was computed against.
    pub original_subtotal: Money,
    /// `original_subtotal - discount_amount`.
    pub discounted_subtotal: Money,
}

// =============================================================================
// Pricing Result
// =============================================================================

/// Fully itemized and totaled breakdown of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Venue items first, then add-ons, then meals; catalog order within each.
    pub line_items: Vec<LineItem>,
    pub venue_subtotal: Money,
    pub addons_subtotal: Money,
    pub meals_subtotal: Money,
    /// Sum of the three category subtotals.
    pub subtotal: Money,
    pub applied_promo: Option<AppliedPromotion>,
    /// `subtotal - applied_promo.discount_amount`, or `subtotal`.
    pub grand_total: Money,
}

impl PricingResult {
    /// Subtotal of a single category.
    pub fn subtotal_for(&self, category: Category) -> Money {
        match category {
            Category::Venue => self.venue_subtotal,
            Category::Addons => self.addons_subtotal,
            Category::Meals => self.meals_subtotal,
        }
    }

    /// Line items belonging to a single category.
    pub fn line_items_for(&self, category: Category) -> impl Iterator<Item = &LineItem> {
        self.line_items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Discount currently subtracted from the subtotal.
    pub fn discount(&self) -> Money {
        self.applied_promo
            .as_ref()
            .map(|p| p.discount_amount)
            .unwrap_or_default()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(serde_json::to_string(&Category::Addons).unwrap(), "\"addons\"");
        let parsed: Category = serde_json::from_str("\"meals\"").unwrap();
        assert_eq!(parsed, Category::Meals);
        assert_eq!(Category::Venue.to_string(), "venue");
        assert_eq!(Category::Addons.label(), "Add-ons");
    }

    #[test]
    fn test_line_item_metadata_is_omitted_for_non_meals() {
        let item = LineItem {
            id: "projectors".to_string(),
            name: "Projectors".to_string(),
            unit_price: Money::from_units(200),
            quantity: 3,
            total: Money::from_units(600),
            category: Category::Addons,
            metadata: None,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("metadata").is_none());
        assert_eq!(json["unitPrice"], 200);
        assert_eq!(item.for_people(), None);
    }

    #[test]
    fn test_line_item_without_metadata_parses() {
        let json = r#"{
            "id": "signage",
            "name": "Signage",
            "unitPrice": 80,
            "quantity": 2,
            "total": 160,
            "category": "addons"
        }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.metadata, None);
        assert_eq!(item.total.units(), 160);
    }

    #[test]
    fn test_line_item_metadata_for_meals() {
        let item = LineItem {
            id: "lunch".to_string(),
            name: "Lunch".to_string(),
            unit_price: Money::from_units(65),
            quantity: 100,
            total: Money::from_units(6500),
            category: Category::Meals,
            metadata: Some(LineItemMetadata { for_people: 100 }),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["metadata"]["forPeople"], 100);
        assert_eq!(item.for_people(), Some(100));
    }

    #[test]
    fn test_applied_promotion_field_names() {
        let promo = AppliedPromotion {
            code: "AVBUNDLE5".to_string(),
            category: Category::Addons,
            discount_amount: Money::from_units(38),
            original_subtotal: Money::from_units(760),
            discounted_subtotal: Money::from_units(722),
        };

        let json = serde_json::to_value(&promo).unwrap();
        assert_eq!(json["discountAmount"], 38);
        assert_eq!(json["originalSubtotal"], 760);
        assert_eq!(json["discountedSubtotal"], 722);
        assert_eq!(json["category"], "addons");
    }
}
