//! Scenario 2: Refill Watch
//!
//! Demonstrates a full dashboard refresh over the sample prescription
//! feed:
//!
//! - healthy rows project silently
//! - the low-supply row emits a Warning alert
//! - the corrupt row (zero dosage) is skipped with a data-integrity
//!   warning instead of failing the refresh
//!
//! Everything is recomputed from the feed snapshot and the system clock
//! on each run; nothing is cached between refreshes.

use chrono::Utc;

use remedia_contracts::error::RemediaResult;
use remedia_core::{traits::SystemClock, RefillMonitor};
use remedia_refill::RefillProjector;

use crate::sample::{sample_feed, DEMO_USER};
use crate::scenarios::ConsoleAlertSink;

/// Run Scenario 2: Refill Watch.
pub fn run_scenario() -> RemediaResult<()> {
    println!("=== Scenario 2: Refill Watch ===");
    println!();
    println!("  User: {} (sample feed, 4 prescriptions, 1 corrupt row)", DEMO_USER);
    println!();

    let monitor = RefillMonitor::new(
        Box::new(sample_feed(Utc::now())),
        Box::new(RefillProjector::new()),
        Box::new(SystemClock),
        Box::new(ConsoleAlertSink),
    );

    let statuses = monitor.refresh(DEMO_USER)?;

    println!();
    println!("  {:<14} {:>10} {:>10} {:>9}  {}", "Medicine", "Supply(d)", "Left(d)", "Percent", "Status");
    for status in &statuses {
        let p = &status.projection;
        println!(
            "  {:<14} {:>10.1} {:>10} {:>8.0}%  {}",
            status.prescription.medicine_name,
            p.days_supply_total,
            p.days_remaining,
            p.percent_remaining,
            if p.is_low { "LOW" } else { "ok" }
        );
    }

    println!();
    println!(
        "  {} of 4 rows projected; the corrupt row surfaced as a warning above.",
        statuses.len()
    );
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
