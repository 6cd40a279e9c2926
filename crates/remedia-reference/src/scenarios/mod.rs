//! Demo scenario walkthroughs.
//!
//! Each scenario is a self-contained module that wires real REMEDIA
//! components (catalog, matcher, projector, monitor, alert sink) with the
//! reference data and prints what happens at each step.

use tracing::info;

use remedia_contracts::{alert::HealthAlert, error::RemediaResult};
use remedia_core::traits::AlertSink;

pub mod price_compare;
pub mod refill_watch;
pub mod symptom_check;

/// An alert sink that prints each alert as an indented console line.
///
/// The scenarios pass this to the orchestrators so escalations and
/// low-supply warnings appear inline with the walkthrough output.
pub struct ConsoleAlertSink;

impl AlertSink for ConsoleAlertSink {
    fn notify(&self, alert: &HealthAlert) -> RemediaResult<()> {
        info!(severity = %alert.severity, title = %alert.title, "alert delivered");
        println!("  >> [{}] {}: {}", alert.severity, alert.title, alert.body);
        Ok(())
    }
}
