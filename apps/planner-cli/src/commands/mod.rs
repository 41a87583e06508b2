//! # Planner Commands
//!
//! Everything the CLI (or any other front end) can ask of the planner.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Catalog listing
//! ├── plan.rs     ◄─── Plan mutations and totals
//! ├── promo.rs    ◄─── Promo apply / clear / list
//! └── export.rs   ◄─── CSV and JSON artifacts
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Needs nothing
//! fn get_catalog() -> Vec<CatalogSection>
//!
//! // Only needs the plan
//! fn apply_promo_code(plan: &PlanState, input: &str)
//!
//! // Needs plan and config
//! fn set_headcount(plan: &PlanState, config: &ConfigState, headcount: u32)
//! ```

pub mod catalog;
pub mod export;
pub mod plan;
pub mod promo;
