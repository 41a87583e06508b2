//! # Catalog
//!
//! Static reference data: venue rooms, add-on equipment and catered meals.
//!
//! ```text
//! ┌──────────────────────┬──────────┬───────┐
//! │ Venue                │ Capacity │ Price │
//! ├──────────────────────┼──────────┼───────┤
//! │ Auditorium Hall      │      200 │  5500 │
//! │ Conference Room      │       15 │  3500 │
//! │ Presentation Room    │       50 │   700 │
//! │ Large Meeting Room   │       10 │   900 │
//! │ Small Meeting Room   │        5 │  1100 │
//! ├──────────────────────┴──────────┼───────┤
//! │ Add-ons (per unit)              │       │
//! │ Speakers 35 · Microphones 45 · Whiteboards 80 · Projectors 200 ·      │
//! │ Signage 80                                                            │
//! ├─────────────────────────────────┴───────┤
//! │ Meals (per person)                      │
//! │ Breakfast 50 · Lunch 65 · High Tea 25 · Dinner 70                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Declaration order matters: line items are emitted in this order.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Category;

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique key within its category (e.g. `auditorium-hall`).
    pub id: String,
    pub name: String,
    /// Price per unit, or per person for meals.
    pub unit_price: Money,
    /// Seating hint for venue rooms. Informational only; never enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub image_url: Option<String>,
}

impl CatalogItem {
    fn venue(id: &str, name: &str, capacity: u32, unit_price: i64, image: &str) -> Self {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: Money::from_units(unit_price),
            capacity: Some(capacity),
            image_url: Some(format!("/images/{image}.jpg")),
        }
    }

    fn addon(id: &str, name: &str, unit_price: i64) -> Self {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: Money::from_units(unit_price),
            capacity: None,
            image_url: Some(format!("/images/{id}.jpg")),
        }
    }

    fn meal(id: &str, name: &str, unit_price: i64) -> Self {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: Money::from_units(unit_price),
            capacity: None,
            image_url: None,
        }
    }
}

/// The full item list, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    pub venue: Vec<CatalogItem>,
    pub addons: Vec<CatalogItem>,
    pub meals: Vec<CatalogItem>,
}

static STANDARD: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The process-wide catalog. Built once, never mutated.
    pub fn standard() -> &'static Catalog {
        STANDARD.get_or_init(|| Catalog {
            venue: vec![
                CatalogItem::venue("auditorium-hall", "Auditorium Hall", 200, 5500, "auditorium"),
                CatalogItem::venue("conference-room", "Conference Room", 15, 3500, "conference"),
                CatalogItem::venue("presentation-room", "Presentation Room", 50, 700, "presentation"),
                CatalogItem::venue("large-meeting-room", "Large Meeting Room", 10, 900, "large-meeting"),
                CatalogItem::venue("small-meeting-room", "Small Meeting Room", 5, 1100, "small-meeting"),
            ],
            addons: vec![
                CatalogItem::addon("speakers", "Speakers", 35),
                CatalogItem::addon("microphones", "Microphones", 45),
                CatalogItem::addon("whiteboards", "Whiteboards", 80),
                CatalogItem::addon("projectors", "Projectors", 200),
                CatalogItem::addon("signage", "Signage", 80),
            ],
            meals: vec![
                CatalogItem::meal("breakfast", "Breakfast", 50),
                CatalogItem::meal("lunch", "Lunch", 65),
                CatalogItem::meal("high-tea", "High Tea", 25),
                CatalogItem::meal("dinner", "Dinner", 70),
            ],
        })
    }

    /// Items of one category in declaration order.
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        match category {
            Category::Venue => &self.venue,
            Category::Addons => &self.addons,
            Category::Meals => &self.meals,
        }
    }

    /// Looks up an item by category and identifier.
    pub fn find(&self, category: Category, id: &str) -> Option<&CatalogItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Like [`Catalog::find`], but an unknown id is an error.
    pub fn require(&self, category: Category, id: &str) -> CoreResult<&CatalogItem> {
        self.find(category, id).ok_or_else(|| CoreError::UnknownItem {
            category,
            id: id.to_string(),
        })
    }

    /// Meal identifiers in declaration order.
    pub fn meal_ids(&self) -> impl Iterator<Item = &str> {
        self.meals.iter().map(|m| m.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_prices() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.venue.len(), 5);
        assert_eq!(catalog.addons.len(), 5);
        assert_eq!(catalog.meals.len(), 4);

        let hall = catalog.find(Category::Venue, "auditorium-hall").unwrap();
        assert_eq!(hall.unit_price.units(), 5500);
        assert_eq!(hall.capacity, Some(200));

        let tea = catalog.find(Category::Meals, "high-tea").unwrap();
        assert_eq!(tea.name, "High Tea");
        assert_eq!(tea.unit_price.units(), 25);
    }

    #[test]
    fn test_ids_unique_within_category() {
        let catalog = Catalog::standard();
        for category in Category::ALL {
            let items = catalog.items(category);
            for (i, a) in items.iter().enumerate() {
                assert!(items[i + 1..].iter().all(|b| b.id != a.id), "duplicate {}", a.id);
            }
        }
    }

    #[test]
    fn test_find_is_scoped_to_category() {
        let catalog = Catalog::standard();
        assert!(catalog.find(Category::Addons, "auditorium-hall").is_none());
        assert!(catalog.require(Category::Venue, "ballroom").is_err());
        assert!(catalog.require(Category::Addons, "signage").is_ok());
    }

    #[test]
    fn test_meal_ids_in_order() {
        let ids: Vec<&str> = Catalog::standard().meal_ids().collect();
        assert_eq!(ids, ["breakfast", "lunch", "high-tea", "dinner"]);
    }

    #[test]
    fn test_optional_fields_round_trip() {
        let catalog = Catalog::standard();
        let speakers = catalog.find(Category::Addons, "speakers").unwrap();
        let json = serde_json::to_value(speakers).unwrap();
        assert!(json.get("capacity").is_none());

        let parsed: CatalogItem = serde_json::from_value(json).unwrap();
        assert_eq!(&parsed, speakers);
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(Catalog::standard(), Catalog::standard()));
    }
}
