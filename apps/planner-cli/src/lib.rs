//! # Planner CLI Library
//!
//! Command-line shell around `planner-core`. Everything with side effects
//! (files, environment, logging, exit codes) lives here; the engine stays
//! pure.
//!
//! ## Module Organization
//! ```text
//! planner_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── plan.rs     ◄─── Plan state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Catalog listing
//! │   ├── plan.rs     ◄─── Plan mutations
//! │   ├── promo.rs    ◄─── Promo codes
//! │   └── export.rs   ◄─── CSV / JSON artifacts
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout ──► exports, catalog, counts (safe to redirect into a file)    │
//! │  stderr ──► tracing output and error messages                          │
//! │  exit   ──► 0 on success, 1 on any ApiError                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::ApiError;
use planner_core::{Category, PlanSelection};
use state::{ConfigState, ExportFormat, PlanState};

// =============================================================================
// Arguments
// =============================================================================

/// Event expense planner: price a plan, apply promotions, export quotes.
#[derive(Debug, Parser)]
#[command(name = "planner", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the venue, add-on and meal catalog
    Catalog,

    /// List the available promo codes
    Promos,

    /// Price a saved plan and print it as CSV or JSON
    Quote {
        /// Plan selection file (JSON)
        plan: PathBuf,

        /// Promo code to apply before pricing
        #[arg(long)]
        promo: Option<String>,

        /// Output format (defaults to PLANNER_EXPORT_FORMAT, then csv)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Print the number of selected items in a saved plan
    Count {
        /// Plan selection file (JSON)
        plan: PathBuf,
    },

    /// Change a saved plan in place (the file is created when missing)
    Edit(EditArgs),
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Plan selection file (JSON)
    pub plan: PathBuf,

    /// Start from an empty plan
    #[arg(long)]
    pub reset: bool,

    /// Venue quantity as ID=QTY (0 removes the room)
    #[arg(long = "venue", value_name = "ID=QTY", value_parser = parse_quantity)]
    pub venue: Vec<(String, u32)>,

    /// Add-on quantity as ID=QTY (0 removes the add-on)
    #[arg(long = "addon", value_name = "ID=QTY", value_parser = parse_quantity)]
    pub addons: Vec<(String, u32)>,

    /// Number of people meals are priced for
    #[arg(long)]
    pub headcount: Option<u32>,

    /// Tick or untick a meal
    #[arg(long = "toggle-meal", value_name = "ID")]
    pub toggle_meals: Vec<String>,

    /// Promo code to apply after the changes
    #[arg(long, conflicts_with = "clear_promo")]
    pub promo: Option<String>,

    /// Remove the applied promotion
    #[arg(long)]
    pub clear_promo: bool,
}

fn parse_quantity(raw: &str) -> Result<(String, u32), String> {
    let (id, qty) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got `{}`", raw))?;
    let qty = qty
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("`{}` is not a valid quantity", qty.trim()))?;
    Ok((id.trim().to_string(), qty))
}

// =============================================================================
// Entry Point
// =============================================================================

/// Parses arguments, runs one command and maps the outcome to an exit code.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Load configuration from the environment
/// 3. Dispatch the subcommand
/// 4. Print the result to stdout, or the error message to stderr
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    init_tracing();

    let config = ConfigState::from_env();
    debug!(?config, "Configuration loaded");

    match execute(cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.message);
            ExitCode::FAILURE
        }
    }
}

/// Runs one command and returns what should be printed.
pub fn execute(command: Command, config: &ConfigState) -> Result<String, ApiError> {
    match command {
        Command::Catalog => Ok(render_catalog()),
        Command::Promos => Ok(render_promotions()),
        Command::Quote {
            plan,
            promo,
            format,
        } => {
            let state = PlanState::from_selection(load_plan(&plan)?);
            state.with_plan_mut(|p| commands::plan::refresh_promotion(p, config));

            if let Some(code) = promo {
                commands::promo::apply_promo_code(&state, &code)?;
            }

            commands::export::export_plan(&state, format.unwrap_or(config.export_format))
        }
        Command::Count { plan } => {
            let state = PlanState::from_selection(load_plan(&plan)?);
            Ok(commands::plan::get_plan(&state).item_count.to_string())
        }
        Command::Edit(args) => edit_plan(args, config),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=planner_cli=trace` - Trace the shell only
/// - Default: warnings, plus info from planner crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,planner=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Plan Files
// =============================================================================

/// Reads a plan selection from a JSON file.
pub fn load_plan(path: &Path) -> Result<PlanSelection, ApiError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ApiError::not_found("plan file", &path.display().to_string()),
        _ => ApiError::internal(format!("Could not read {}: {}", path.display(), e)),
    })?;

    let plan = serde_json::from_str(&text).map_err(|e| {
        ApiError::validation(format!("Malformed plan file {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "Plan loaded");
    Ok(plan)
}

/// Writes a plan selection as pretty JSON.
pub fn save_plan(path: &Path, plan: &PlanSelection) -> Result<(), ApiError> {
    let text = serde_json::to_string_pretty(plan)
        .map_err(|e| ApiError::internal(format!("Could not serialize plan: {}", e)))?;

    std::fs::write(path, text + "\n")
        .map_err(|e| ApiError::internal(format!("Could not write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), "Plan saved");
    Ok(())
}

fn edit_plan(args: EditArgs, config: &ConfigState) -> Result<String, ApiError> {
    let selection = if args.reset || !args.plan.exists() {
        PlanSelection::new()
    } else {
        load_plan(&args.plan)?
    };
    let state = PlanState::from_selection(selection);

    // The stored promotion is judged against the finished edit, not each step.
    let batch = ConfigState {
        strict_promotions: false,
        ..config.clone()
    };

    for (id, qty) in &args.venue {
        commands::plan::set_item_quantity(&state, &batch, Category::Venue, id, *qty)?;
    }
    for (id, qty) in &args.addons {
        commands::plan::set_item_quantity(&state, &batch, Category::Addons, id, *qty)?;
    }
    if let Some(headcount) = args.headcount {
        commands::plan::set_headcount(&state, &batch, headcount)?;
    }
    for meal in &args.toggle_meals {
        commands::plan::toggle_meal(&state, &batch, meal)?;
    }
    state.with_plan_mut(|p| commands::plan::refresh_promotion(p, config));

    let response = if args.clear_promo {
        commands::promo::clear_promo(&state)
    } else if let Some(code) = &args.promo {
        commands::promo::apply_promo_code(&state, code)?
    } else {
        commands::plan::get_plan(&state)
    };

    save_plan(&args.plan, &response.selection)?;

    Ok(format!(
        "{} item(s), grand total {}",
        response.item_count, response.pricing.grand_total
    ))
}

// =============================================================================
// Rendering
// =============================================================================

fn render_catalog() -> String {
    let mut out = Vec::new();

    for section in commands::catalog::get_catalog() {
        out.push(format!("{}:", section.label));
        for item in &section.items {
            let capacity = item
                .capacity
                .map(|c| format!("  (up to {} people)", c))
                .unwrap_or_default();
            let unit = if section.category == Category::Meals {
                " per person"
            } else {
                ""
            };
            out.push(format!(
                "  {:<20} {:<22} {}{}{}",
                item.id, item.name, item.unit_price, unit, capacity
            ));
        }
    }

    out.join("\n")
}

fn render_promotions() -> String {
    commands::promo::list_promotions()
        .iter()
        .map(|p| format!("{:<12} {}", p.code, p.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn temp_plan(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("planner-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let _ = std::fs::remove_file(&path);
        path
    }

    fn edit(path: &Path) -> EditArgs {
        EditArgs {
            plan: path.to_path_buf(),
            reset: false,
            venue: Vec::new(),
            addons: Vec::new(),
            headcount: None,
            toggle_meals: Vec::new(),
            promo: None,
            clear_promo: false,
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("projectors=3").unwrap(), ("projectors".to_string(), 3));
        assert!(parse_quantity("projectors").is_err());
        assert!(parse_quantity("projectors=-1").is_err());
    }

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from([
            "planner", "quote", "plan.json", "--promo", "cater15", "--format", "json",
        ])
        .unwrap();

        match cli.command {
            Command::Quote { plan, promo, format } => {
                assert_eq!(plan, PathBuf::from("plan.json"));
                assert_eq!(promo.as_deref(), Some("cater15"));
                assert_eq!(format, Some(ExportFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_edit_then_quote() {
        let path = temp_plan("edit-then-quote.json");
        let config = ConfigState::default();

        let mut args = edit(&path);
        args.venue = vec![("auditorium-hall".to_string(), 2)];
        args.headcount = Some(100);
        args.toggle_meals = vec!["lunch".to_string()];
        args.promo = Some("cater15".to_string());
        let summary = execute(Command::Edit(args), &config).unwrap();
        assert_eq!(summary, "3 item(s), grand total $16,525");

        let count = execute(Command::Count { plan: path.clone() }, &config).unwrap();
        assert_eq!(count, "3");

        let csv = execute(
            Command::Quote {
                plan: path,
                promo: None,
                format: Some(ExportFormat::Csv),
            },
            &config,
        )
        .unwrap();
        assert!(csv.contains("Discount (CATER15),,,\"-$975\""));
        assert!(csv.ends_with("Grand Total,,,\"$16,525\""));
    }

    #[test]
    fn test_edit_keeps_promotion_when_final_plan_qualifies() {
        let path = temp_plan("meal-swap.json");
        let config = ConfigState::default();

        let mut args = edit(&path);
        args.headcount = Some(60);
        args.toggle_meals = vec!["lunch".to_string()];
        args.promo = Some("CATER15".to_string());
        execute(Command::Edit(args), &config).unwrap();

        // Swapping lunch for dinner empties the meals briefly
        let mut args = edit(&path);
        args.toggle_meals = vec!["lunch".to_string(), "dinner".to_string()];
        execute(Command::Edit(args), &config).unwrap();

        let saved = load_plan(&path).unwrap();
        let applied = saved.applied_promo.expect("promotion should survive the swap");
        assert_eq!(applied.code, "CATER15");
        assert_eq!(applied.original_subtotal.units(), 70 * 60);
        assert_eq!(applied.discount_amount.units(), 630);
    }

    #[test]
    fn test_edit_drops_promotion_when_final_plan_fails() {
        let path = temp_plan("meal-drop.json");
        let config = ConfigState::default();

        let mut args = edit(&path);
        args.headcount = Some(60);
        args.toggle_meals = vec!["lunch".to_string()];
        args.promo = Some("CATER15".to_string());
        execute(Command::Edit(args), &config).unwrap();

        let mut args = edit(&path);
        args.headcount = Some(30);
        execute(Command::Edit(args), &config).unwrap();

        assert!(load_plan(&path).unwrap().applied_promo.is_none());
    }

    #[test]
    fn test_quote_reports_ineligible_promo() {
        let path = temp_plan("ineligible.json");
        let config = ConfigState::default();

        let mut args = edit(&path);
        args.addons = vec![("speakers".to_string(), 2)];
        execute(Command::Edit(args), &config).unwrap();

        let err = execute(
            Command::Quote {
                plan: path,
                promo: Some("AVBUNDLE5".to_string()),
                format: None,
            },
            &config,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::PromoNotEligible);
        assert_eq!(err.message, "Add-ons subtotal must be at least $500");
    }

    #[test]
    fn test_missing_and_malformed_plan_files() {
        let config = ConfigState::default();

        let missing = temp_plan("does-not-exist.json");
        let err = execute(Command::Count { plan: missing }, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let malformed = temp_plan("malformed.json");
        std::fs::write(&malformed, r#"{ "venueQuantities": { "conference-room": -1 } }"#).unwrap();
        let err = execute(Command::Count { plan: malformed }, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_catalog_and_promos_render() {
        let catalog = render_catalog();
        assert!(catalog.starts_with("Venue:"));
        assert!(catalog.contains("Add-ons:"));
        assert!(catalog.contains("$5,500"));

        let promos = render_promotions();
        assert_eq!(promos.lines().count(), 3);
        assert!(promos.contains("CATER15"));
    }
}
