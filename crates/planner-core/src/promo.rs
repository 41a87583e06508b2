//! # Promotions
//!
//! The fixed promotion registry and the evaluator that turns a rule plus a
//! plan into an [`AppliedPromotion`].
//!
//! ## Rule Set
//! ```text
//! ┌─────────────┬──────────┬─────┬──────────────────┬─────────────────────────────────────────┐
//! │ Code        │ Category │  %  │ Condition        │ Message when not met                    │
//! ├─────────────┼──────────┼─────┼──────────────────┼─────────────────────────────────────────┤
//! │ EARLYBIRD10 │ venue    │ 10  │ subtotal > 0     │ No venue items selected                 │
//! │ AVBUNDLE5   │ addons   │  5  │ subtotal ≥ 500   │ Add-ons subtotal must be at least $500  │
//! │ CATER15     │ meals    │ 15  │ headcount ≥ 50   │ Number of people must be at least 50    │
//! └─────────────┴──────────┴─────┴──────────────────┴─────────────────────────────────────────┘
//! ```
//!
//! ## Apply Flow
//! ```text
//! user input "  cater15 "
//!      │
//!      ▼
//! validate_promo_code ── trim + uppercase ── MissingCode / UnknownCode
//!      │
//!      ▼ &PromotionRule (canonical "CATER15")
//! evaluate(rule, plan) ── price plan WITHOUT any promo
//!      │                   pick category subtotal (+ headcount for meals)
//!      │                   subtotal == 0 ?  → NotEligible "No meals items selected"
//!      │                   condition fails? → NotEligible rule.ineligible_message
//!      ▼
//! AppliedPromotion ──► caller stores it in the PlanSelection
//! ```
//!
//! Conditions are data ([`PromoCondition`]), not closures, so rules can be
//! serialized and shipped to the UI as-is.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{PromoError, PromoResult};
use crate::money::Money;
use crate::pricing;
use crate::selection::PlanSelection;
use crate::types::{AppliedPromotion, Category};

// =============================================================================
// Conditions
// =============================================================================

/// Eligibility test attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "threshold", rename_all = "kebab-case")]
pub enum PromoCondition {
    /// Category subtotal must be above zero.
    AlwaysPositive,
    /// Category subtotal must reach the threshold (inclusive).
    MinSubtotal(Money),
    /// Meal headcount must reach the threshold (inclusive).
    MinHeadcount(u32),
}

/// Contextual metadata handed to a condition alongside the subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EligibilityContext {
    /// Present only when evaluating a meals rule.
    pub headcount: Option<u32>,
}

impl PromoCondition {
    /// Interprets the condition.
    pub fn is_met(&self, subtotal: Money, context: &EligibilityContext) -> bool {
        match *self {
            PromoCondition::AlwaysPositive => subtotal.is_positive(),
            PromoCondition::MinSubtotal(threshold) => subtotal >= threshold,
            PromoCondition::MinHeadcount(threshold) => {
                context.headcount.unwrap_or(0) >= threshold
            }
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// A named promotional rule scoped to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRule {
    /// Canonical upper-case code.
    pub code: String,
    pub category: Category,
    /// 0 to 100.
    pub discount_percent: u8,
    pub condition: PromoCondition,
    /// Fixed message shown when `condition` is not met.
    pub ineligible_message: String,
}

impl PromotionRule {
    fn new(
        code: &str,
        category: Category,
        discount_percent: u8,
        condition: PromoCondition,
        ineligible_message: &str,
    ) -> Self {
        PromotionRule {
            code: code.to_string(),
            category,
            discount_percent,
            condition,
            ineligible_message: ineligible_message.to_string(),
        }
    }

    /// Decides eligibility for a category subtotal.
    ///
    /// An empty category never qualifies, whatever the condition says.
    pub fn check(&self, subtotal: Money, context: &EligibilityContext) -> PromoResult<()> {
        if subtotal.is_zero() {
            return Err(self.not_eligible(format!("No {} items selected", self.category)));
        }

        if !self.condition.is_met(subtotal, context) {
            return Err(self.not_eligible(self.ineligible_message.clone()));
        }

        Ok(())
    }

    /// Discount this rule grants on `subtotal`.
    #[inline]
    pub fn discount_for(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.discount_percent)
    }

    /// One-line description, e.g. `5% off add-ons ($500+ subtotal)`.
    pub fn summary(&self) -> String {
        let base = format!(
            "{}% off {}",
            self.discount_percent,
            self.category.label().to_lowercase()
        );
        match self.condition {
            PromoCondition::AlwaysPositive => base,
            PromoCondition::MinSubtotal(threshold) => format!("{base} ({threshold}+ subtotal)"),
            PromoCondition::MinHeadcount(threshold) => format!("{base} ({threshold}+ people)"),
        }
    }

    fn not_eligible(&self, reason: String) -> PromoError {
        PromoError::NotEligible {
            code: self.code.clone(),
            category: self.category,
            reason,
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// The fixed set of promotions, keyed by canonical code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRegistry {
    rules: Vec<PromotionRule>,
}

static STANDARD: OnceLock<PromotionRegistry> = OnceLock::new();

impl PromotionRegistry {
    /// The process-wide rule set.
    pub fn standard() -> &'static PromotionRegistry {
        STANDARD.get_or_init(|| PromotionRegistry {
            rules: vec![
                PromotionRule::new(
                    "EARLYBIRD10",
                    Category::Venue,
                    10,
                    PromoCondition::AlwaysPositive,
                    "No venue items selected",
                ),
                PromotionRule::new(
                    "AVBUNDLE5",
                    Category::Addons,
                    5,
                    PromoCondition::MinSubtotal(Money::from_units(500)),
                    "Add-ons subtotal must be at least $500",
                ),
                PromotionRule::new(
                    "CATER15",
                    Category::Meals,
                    15,
                    PromoCondition::MinHeadcount(50),
                    "Number of people must be at least 50",
                ),
            ],
        })
    }

    pub fn rules(&self) -> &[PromotionRule] {
        &self.rules
    }

    /// Exact match on a canonical code.
    pub fn get(&self, code: &str) -> Option<&PromotionRule> {
        self.rules.iter().find(|rule| rule.code == code)
    }

    /// Resolves user input to a rule.
    ///
    /// Input is trimmed and matched case-insensitively.
    pub fn lookup(&self, input: &str) -> PromoResult<&PromotionRule> {
        let normalized = input.trim().to_uppercase();

        if normalized.is_empty() {
            return Err(PromoError::MissingCode);
        }

        self.get(&normalized).ok_or_else(|| PromoError::UnknownCode {
            input: input.to_string(),
        })
    }
}

/// Validates a promo code against the standard registry.
///
/// ```rust
/// use planner_core::promo::validate_promo_code;
///
/// let rule = validate_promo_code("  avBundle5 ").unwrap();
/// assert_eq!(rule.code, "AVBUNDLE5");
///
/// let err = validate_promo_code("   ").unwrap_err();
/// assert_eq!(err.to_string(), "Please enter a promo code");
/// ```
pub fn validate_promo_code(input: &str) -> PromoResult<&'static PromotionRule> {
    PromotionRegistry::standard().lookup(input)
}

// =============================================================================
// Evaluator
// =============================================================================

/// Evaluates a rule against a plan.
///
/// Any promotion already attached to `selection` is ignored: the discount is
/// always computed against the clean category subtotal. The selection is not
/// modified.
pub fn evaluate(
    rule: &PromotionRule,
    selection: &PlanSelection,
    catalog: &Catalog,
) -> PromoResult<AppliedPromotion> {
    let clean = pricing::compute(&selection.without_promo(), catalog);

    let subtotal = clean.subtotal_for(rule.category);
    let context = EligibilityContext {
        headcount: (rule.category == Category::Meals).then_some(selection.meals.headcount),
    };

    rule.check(subtotal, &context)?;

    let discount_amount = rule.discount_for(subtotal);

    Ok(AppliedPromotion {
        code: rule.code.clone(),
        category: rule.category,
        discount_amount,
        original_subtotal: subtotal,
        discounted_subtotal: subtotal - discount_amount,
    })
}

/// Validates user input and evaluates the resulting rule in one step.
pub fn apply_code(
    input: &str,
    selection: &PlanSelection,
    catalog: &Catalog,
) -> PromoResult<AppliedPromotion> {
    let rule = validate_promo_code(input)?;
    evaluate(rule, selection, catalog)
}

/// Re-runs the stored promotion against the current plan.
///
/// Returns the refreshed record, or `None` when there is no stored promotion
/// or it no longer applies. Callers use this after mutating a plan so a
/// discount never goes stale.
pub fn revalidate(selection: &PlanSelection, catalog: &Catalog) -> Option<AppliedPromotion> {
    let applied = selection.applied_promo.as_ref()?;
    let rule = PromotionRegistry::standard().get(&applied.code)?;
    evaluate(rule, selection, catalog).ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
