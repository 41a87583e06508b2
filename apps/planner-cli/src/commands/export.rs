//! # Export Commands
//!
//! Produces the downloadable artifacts for the current plan.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ExportFormat, PlanState};
use planner_core::{export, pricing, Catalog};

/// Renders the current plan in the requested format.
///
/// ## Formats
/// - `csv`: `Name,Unit Cost,Quantity,Total Cost` table with subtotal rows
/// - `json`: pretty-printed document stamped with the export time
pub fn export_plan(plan: &PlanState, format: ExportFormat) -> Result<String, ApiError> {
    debug!(%format, "export_plan command");

    let result = plan.with_plan(|p| pricing::compute(p, Catalog::standard()));

    let text = match format {
        ExportFormat::Csv => export::to_delimited_text(&result),
        ExportFormat::Json => export::to_structured_text(&result)?,
    };

    info!(
        %format,
        line_items = result.line_items.len(),
        grand_total = result.grand_total.units(),
        "Plan exported"
    );

    Ok(text)
}
