//! Scenario 1: Symptom Check
//!
//! Demonstrates three distinct matcher outcomes in one scenario:
//!
//! Sub-case A — cold-like symptoms      → Medium risk, ranked predictions
//! Sub-case B — dengue-like symptoms    → High risk, urgent alert emitted
//! Sub-case C — unrecognizable input    → no match, prompt for more detail
//!
//! The checker never errors on input content: an empty result is a valid
//! outcome, and only alert delivery can fail.

use remedia_contracts::error::RemediaResult;
use remedia_core::SymptomChecker;
use remedia_triage::SymptomMatcher;

use crate::catalog::StaticCatalog;
use crate::scenarios::ConsoleAlertSink;

/// Run Scenario 1: Symptom Check — three sub-cases.
pub fn run_scenario() -> RemediaResult<()> {
    println!("=== Scenario 1: Symptom Check ===");
    println!();

    let checker = SymptomChecker::new(
        Box::new(StaticCatalog::builtin()),
        Box::new(SymptomMatcher::new()),
        Box::new(ConsoleAlertSink),
    );

    // ── Sub-case A: cold-like symptoms → Medium ───────────────────────────────

    run_one(
        &checker,
        "A",
        "runny nose, sore throat and a cough since yesterday",
        "Medium risk, Common Cold first (expected)",
    )?;

    // ── Sub-case B: dengue-like symptoms → High + urgent alert ────────────────

    run_one(
        &checker,
        "B",
        "I have high fever, severe headache, joint pain",
        "High risk with urgent alert (expected)",
    )?;

    // ── Sub-case C: unrecognizable input → no match ───────────────────────────

    run_one(
        &checker,
        "C",
        "blorple snarfed my widget",
        "No match, prompt for detail (expected)",
    )?;

    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}

fn run_one(
    checker: &SymptomChecker,
    label: &str,
    input: &str,
    expectation: &str,
) -> RemediaResult<()> {
    println!("  Sub-case {}: \"{}\"", label, input);

    match checker.check(input)? {
        Some(result) => {
            println!("  Risk tier:      {}", result.risk_level);
            for prediction in &result.predictions {
                println!(
                    "    {:>3}%  {}",
                    prediction.probability_percent, prediction.disease_name
                );
            }
            println!("  Advice:");
            for line in &result.care_advice {
                println!("    - {}", line);
            }
            println!("  Consultation:   {}", result.consultation);
            if let Some(emergency) = &result.emergency {
                println!("  Emergency:      {}", emergency);
            }
        }
        None => {
            println!("  No catalog entry matched.");
            println!("  Prompt: Please describe your symptoms in a little more detail.");
        }
    }

    println!("  RESULT: {}", expectation);
    println!();
    Ok(())
}
