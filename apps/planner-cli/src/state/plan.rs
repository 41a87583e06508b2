//! # Plan State
//!
//! Owns the one canonical [`PlanSelection`] the commands read and mutate.
//!
//! ## Thread Safety
//! The selection is wrapped in `Arc<Mutex<T>>` because the engine assumes
//! its caller serializes mutations. Reads take the lock too, but only long
//! enough to price the plan.
//!
//! ## Plan Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Plan State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Selection Change      │
//! │  ───────────              ───────                 ────────────────      │
//! │                                                                         │
//! │  Stepper +/- ────────────► increment/decrement ──► quantities[id] ± 1   │
//! │                                                                         │
//! │  Type quantity ──────────► set_item_quantity ────► quantities[id] = n   │
//! │                                                                         │
//! │  Number of people ───────► set_headcount ────────► meals.headcount = n  │
//! │                                                                         │
//! │  Meal checkbox ──────────► toggle_meal ──────────► meals.selected[id]   │
//! │                                                                         │
//! │  Apply promo ────────────► apply_promo_code ─────► applied_promo = ..   │
//! │                                                                         │
//! │  Every mutation is followed by a promotion refresh (strict mode).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use planner_core::PlanSelection;

/// Caller-owned state container for the current plan.
#[derive(Debug, Clone)]
pub struct PlanState {
    plan: Arc<Mutex<PlanSelection>>,
}

impl PlanState {
    /// Creates a state holding an empty plan.
    pub fn new() -> Self {
        PlanState::from_selection(PlanSelection::new())
    }

    /// Creates a state holding a previously saved plan.
    pub fn from_selection(selection: PlanSelection) -> Self {
        PlanState {
            plan: Arc::new(Mutex::new(selection)),
        }
    }

    /// Executes a function with read access to the plan.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let result = plan_state.with_plan(|p| pricing::compute(p, Catalog::standard()));
    /// ```
    pub fn with_plan<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PlanSelection) -> R,
    {
        let plan = self.plan.lock().expect("Plan mutex poisoned");
        f(&plan)
    }

    /// Executes a function with write access to the plan.
    pub fn with_plan_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PlanSelection) -> R,
    {
        let mut plan = self.plan.lock().expect("Plan mutex poisoned");
        f(&mut plan)
    }

    /// Copy of the current plan, e.g. for saving.
    pub fn snapshot(&self) -> PlanSelection {
        self.with_plan(|p| p.clone())
    }
}

impl Default for PlanState {
    fn default() -> Self {
        Self::new()
    }
}
