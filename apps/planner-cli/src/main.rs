//! # Planner Entry Point
//!
//! ```text
//! planner catalog
//! planner promos
//! planner edit plan.json --venue auditorium-hall=2 --headcount 100 --toggle-meal lunch
//! planner quote plan.json --promo CATER15 --format json > quote.json
//! planner count plan.json
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    planner_cli::run()
}
