//! # Export Formatter
//!
//! Serializes a [`PricingResult`] into the two downloadable artifacts:
//! a delimited (CSV) table and a structured (JSON) document.
//!
//! ## Delimited Layout
//! ```text
//! Name,Unit Cost,Quantity,Total Cost
//! "Auditorium Hall","$5,500",2,"$11,000"
//! "Lunch",$65,for 100 people,"$6,500"
//!                                                    ◄── blank separator
//! Venue Subtotal,,,"$11,000"                         ◄── only non-zero categories
//! Meals Subtotal,,,"$6,500"
//! Subtotal,,,"$17,500"
//! Discount (CATER15),,,"-$975"                       ◄── only with a promotion
//! Grand Total,,,"$16,525"
//! ```
//!
//! Any cell that contains a comma is double-quoted, so every row splits into
//! the same four columns.
//!
//! ## Structured Layout
//! ```text
//! {
//!   "lineItems": [ LineItem, ... ],
//!   "subtotals": { "venue", "addons", "meals", "total" },
//!   "promo": AppliedPromotion | null,
//!   "grandTotal": number,
//!   "exportedAt": "2026-10-17T09:30:00.000Z"
//! }
//! ```
//!
//! Field names are a compatibility surface. Do not rename them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::{group_digits, Money};
use crate::types::{AppliedPromotion, Category, LineItem, PricingResult};

/// Header row of the delimited export.
pub const CSV_HEADER: &str = "Name,Unit Cost,Quantity,Total Cost";

// =============================================================================
// Delimited Text
// =============================================================================

/// Renders the delimited (CSV) export. Rows are joined with `\n`.
pub fn to_delimited_text(result: &PricingResult) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(result.line_items.len() + 8);

    lines.push(CSV_HEADER.to_string());

    for item in &result.line_items {
        lines.push(format!(
            "{},{},{},{}",
            quote(&item.name),
            cell(&item.unit_price.to_string()),
            cell(&format_quantity(item)),
            cell(&item.total.to_string()),
        ));
    }

    lines.push(String::new());

    for category in Category::ALL {
        let subtotal = result.subtotal_for(category);
        if subtotal.is_positive() {
            lines.push(total_row(&format!("{} Subtotal", category.label()), subtotal));
        }
    }

    lines.push(total_row("Subtotal", result.subtotal));

    if let Some(promo) = &result.applied_promo {
        lines.push(format!(
            "Discount ({}),,,{}",
            promo.code,
            quote(&(-promo.discount_amount).to_string())
        ));
    }

    lines.push(total_row("Grand Total", result.grand_total));

    lines.join("\n")
}

/// Quantity column: bare number for items, `for N people` for meals.
///
/// ```rust
/// use planner_core::export::format_people;
///
/// assert_eq!(format_people(1), "for 1 person");
/// assert_eq!(format_people(1200), "for 1,200 people");
/// ```
pub fn format_quantity(item: &LineItem) -> String {
    match item.for_people() {
        Some(people) => format_people(people),
        None => group_digits(item.quantity as u64),
    }
}

pub fn format_people(people: u32) -> String {
    let noun = if people == 1 { "person" } else { "people" };
    format!("for {} {}", group_digits(people as u64), noun)
}

fn total_row(label: &str, amount: Money) -> String {
    format!("{},,,{}", label, cell(&amount.to_string()))
}

/// Quotes a cell only when it would otherwise split the row.
fn cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        quote(value)
    } else {
        value.to_string()
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

// =============================================================================
// Structured Text
// =============================================================================

/// Per-category and grand subtotals in the structured export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportSubtotals {
    pub venue: Money,
    pub addons: Money,
    pub meals: Money,
    pub total: Money,
}

/// The structured export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StructuredExport {
    pub line_items: Vec<LineItem>,
    pub subtotals: ExportSubtotals,
    pub promo: Option<AppliedPromotion>,
    pub grand_total: Money,
    /// RFC 3339, millisecond precision, UTC.
    pub exported_at: String,
}

impl StructuredExport {
    /// Snapshot of a result at a given instant.
    pub fn from_result(result: &PricingResult, exported_at: DateTime<Utc>) -> Self {
        StructuredExport {
            line_items: result.line_items.clone(),
            subtotals: ExportSubtotals {
                venue: result.venue_subtotal,
                addons: result.addons_subtotal,
                meals: result.meals_subtotal,
                total: result.subtotal,
            },
            promo: result.applied_promo.clone(),
            grand_total: result.grand_total,
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Rebuilds the pricing result the export was taken from.
    pub fn into_result(self) -> PricingResult {
        PricingResult {
            line_items: self.line_items,
            venue_subtotal: self.subtotals.venue,
            addons_subtotal: self.subtotals.addons,
            meals_subtotal: self.subtotals.meals,
            subtotal: self.subtotals.total,
            applied_promo: self.promo,
            grand_total: self.grand_total,
        }
    }
}

/// Renders the structured export stamped with the current time.
pub fn to_structured_text(result: &PricingResult) -> CoreResult<String> {
    to_structured_text_at(result, Utc::now())
}

/// Renders the structured export stamped with `exported_at`.
///
/// Output is pretty-printed with two-space indentation.
pub fn to_structured_text_at(
    result: &PricingResult,
    exported_at: DateTime<Utc>,
) -> CoreResult<String> {
    let document = StructuredExport::from_result(result, exported_at);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parses a structured export back into its typed form.
pub fn parse_structured_text(text: &str) -> CoreResult<StructuredExport> {
    Ok(serde_json::from_str(text)?)
}

// =============================================================================
// Unit Tests
// =============================================================================
