//! REMEDIA Health Assistant — Demo CLI
//!
//! Runs one or all of the three demo scenarios. Each scenario wires real
//! REMEDIA components (catalog, matcher, projector, monitor, alert sink)
//! with the reference data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- symptom-check
//!   cargo run -p demo -- symptom-check "runny nose and a cough"
//!   cargo run -p demo -- refill-watch
//!   cargo run -p demo -- price-compare

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use remedia_core::SymptomChecker;
use remedia_reference::scenarios::{
    price_compare, refill_watch, symptom_check, ConsoleAlertSink,
};
use remedia_reference::StaticCatalog;
use remedia_triage::SymptomMatcher;

// ── CLI definition ────────────────────────────────────────────────────────────

/// REMEDIA — consumer health assistant demo.
///
/// Each subcommand runs one or all of the three scenarios, demonstrating
/// symptom matching, refill projection, and pharmacy price comparison.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "REMEDIA health assistant demo",
    long_about = "Runs REMEDIA demo scenarios showing symptom matching with risk tiers,\n\
                  refill projections with low-supply alerts, and pharmacy price comparison."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: Symptom Check (pass free text to analyze your own input).
    SymptomCheck {
        /// Free-text symptom description; omit to run the canned sub-cases.
        text: Option<String>,
    },
    /// Scenario 2: Refill Watch (projection dashboard over the sample feed).
    RefillWatch,
    /// Scenario 3: Pharmacy Price Comparison.
    PriceCompare,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::SymptomCheck { text: Some(text) } => run_adhoc_check(&text),
        Command::SymptomCheck { text: None } => symptom_check::run_scenario(),
        Command::RefillWatch => refill_watch::run_scenario(),
        Command::PriceCompare => price_compare::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> remedia_contracts::error::RemediaResult<()> {
    symptom_check::run_scenario()?;
    refill_watch::run_scenario()?;
    price_compare::run_scenario()?;
    Ok(())
}

/// Run one ad hoc symptom check over user-provided text.
fn run_adhoc_check(text: &str) -> remedia_contracts::error::RemediaResult<()> {
    let checker = SymptomChecker::new(
        Box::new(StaticCatalog::builtin()),
        Box::new(SymptomMatcher::new()),
        Box::new(ConsoleAlertSink),
    );

    println!("Input: \"{}\"", text);
    println!();

    match checker.check(text)? {
        Some(result) => {
            println!("{}", result.explanation);
            println!();
            for prediction in &result.predictions {
                println!(
                    "  {:>3}%  {}",
                    prediction.probability_percent, prediction.disease_name
                );
            }
            println!();
            println!("Risk tier: {}", result.risk_level);
            println!("Advice:");
            for line in &result.care_advice {
                println!("  - {}", line);
            }
            println!("{}", result.consultation);
            if let Some(emergency) = &result.emergency {
                println!("{}", emergency);
            }
        }
        None => {
            println!("Nothing in the catalog matched that description.");
            println!("Please describe your symptoms in a little more detail.");
        }
    }
    println!();

    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("REMEDIA — Consumer Health Assistant");
    println!("Reference Demo");
    println!("===================================");
    println!();
    println!("Components in play:");
    println!("  [1] Symptom matcher: weighted keyword scoring over the disease catalog");
    println!("  [2] Refill projector: supply depletion arithmetic with low-supply alerts");
    println!("  [3] Pharmacy offers: simulated price table with best-offer selection");
    println!();
}
