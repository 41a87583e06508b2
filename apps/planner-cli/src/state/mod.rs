//! # State Module
//!
//! Application state for the planner shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐          ┌──────────────────┐            │
//! │          │    PlanState     │          │   ConfigState    │            │
//! │          │                  │          │                  │            │
//! │          │  Arc<Mutex<      │          │  export_format   │            │
//! │          │   PlanSelection  │          │  max_headcount   │            │
//! │          │  >>              │          │  strict_promos   │            │
//! │          └──────────────────┘          └──────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • PlanState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod plan;

pub use config::{ConfigState, ExportFormat};
pub use plan::PlanState;
