//! # planner-core: Pricing & Promotion Engine
//!
//! Pure business logic for the event expense planner: it turns a plan
//! selection (venue rooms, add-on equipment, catered meals, promo code) into
//! a fully itemized, totaled breakdown, and decides which promotions apply.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Event Planner Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Presentation (planner-cli, or any UI)               │   │
//! │  │   owns PlanSelection · renders catalog · downloads exports     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &PlanSelection                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ planner-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │ catalog  │─►│ pricing  │─►│  promo   │  │  export  │       │   │
//! │  │   │  items   │  │ compute  │  │ evaluate │  │ csv/json │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Whole-unit money type with the single rounding rule
//! - [`types`] - Category, LineItem, AppliedPromotion, PricingResult
//! - [`selection`] - The caller-owned PlanSelection and its mutators
//! - [`catalog`] - Static venue / add-on / meal data
//! - [`pricing`] - `compute` and `count_selected_items`
//! - [`promo`] - Promotion registry, validation and evaluation
//! - [`export`] - Delimited and structured export formats
//! - [`validation`] - Input checks for callers
//! - [`error`] - Domain error types
//!
//! ## Concurrency
//! Nothing here holds mutable state. Any number of threads may call
//! `compute` / `evaluate` on independent selections at once.
//!
//! ## Example Usage
//!
//! ```rust
//! use planner_core::{pricing, promo, Catalog, Category, PlanSelection};
//!
//! let catalog = Catalog::standard();
//! let mut plan = PlanSelection::new();
//! plan.set_quantity(Category::Venue, "auditorium-hall", 2).unwrap();
//!
//! let applied = promo::apply_code("earlybird10", &plan, catalog).unwrap();
//! plan.set_applied_promo(applied);
//!
//! let result = pricing::compute(&plan, catalog);
//! assert_eq!(result.subtotal.units(), 11000);
//! assert_eq!(result.grand_total.units(), 9900);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod export;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogItem};
pub use error::{CoreError, CoreResult, PromoError, PromoResult, ValidationError};
pub use money::Money;
pub use promo::{PromoCondition, PromotionRegistry, PromotionRule};
pub use selection::{MealSelection, PlanSelection};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest headcount the planner accepts for meals.
pub const MIN_PEOPLE: u32 = 1;

/// Largest headcount the planner accepts for meals.
pub const MAX_PEOPLE: u32 = 500;

/// Maximum quantity of a single venue or add-on item.
///
/// ## Business Reason
/// Catches typos (1000 instead of 10) before they reach a quote.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Longest promo input worth looking up.
pub const MAX_PROMO_CODE_LEN: usize = 32;
