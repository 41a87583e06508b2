//! # Configuration State
//!
//! Planner configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`PLANNER_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use planner_core::MAX_PEOPLE;
use serde::{Deserialize, Serialize};

/// Which export artifact to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited table (`Name,Unit Cost,Quantity,Total Cost`)
    #[default]
    Csv,

    /// Structured JSON document
    Json,
}

impl ExportFormat {
    /// Suggested file extension.
    pub const fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Default export format when none is given on the command line.
    pub export_format: ExportFormat,

    /// Upper bound accepted for the meal headcount.
    pub max_headcount: u32,

    /// Re-evaluate the stored promotion after every plan change and drop it
    /// once it no longer applies. When off, a stored promotion is kept
    /// verbatim until cleared.
    pub strict_promotions: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Export: CSV
    /// - Headcount: up to 500
    /// - Promotions: strict
    fn default() -> Self {
        ConfigState {
            export_format: ExportFormat::Csv,
            max_headcount: MAX_PEOPLE,
            strict_promotions: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PLANNER_EXPORT_FORMAT`: `csv` or `json`
    /// - `PLANNER_MAX_HEADCOUNT`: positive integer
    /// - `PLANNER_STRICT_PROMOTIONS`: `true` / `false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    ///
    /// Unparseable values are ignored with a warning; the default stays.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("PLANNER_EXPORT_FORMAT") {
            match raw.parse() {
                Ok(format) => config.export_format = format,
                Err(e) => tracing::warn!(value = %raw, "ignoring PLANNER_EXPORT_FORMAT: {}", e),
            }
        }

        if let Some(raw) = lookup("PLANNER_MAX_HEADCOUNT") {
            match raw.trim().parse::<u32>() {
                Ok(max) if max > 0 => config.max_headcount = max,
                _ => tracing::warn!(value = %raw, "ignoring PLANNER_MAX_HEADCOUNT"),
            }
        }

        if let Some(raw) = lookup("PLANNER_STRICT_PROMOTIONS") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.strict_promotions = true,
                "0" | "false" | "no" | "off" => config.strict_promotions = false,
                _ => tracing::warn!(value = %raw, "ignoring PLANNER_STRICT_PROMOTIONS"),
            }
        }

        config
    }
}
