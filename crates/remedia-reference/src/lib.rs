//! # remedia-reference
//!
//! Reference data and demo scenarios for the REMEDIA health assistant.
//!
//! Provides:
//!
//! 1. **Disease catalog** — the built-in reference set plus TOML loading
//!    via [`catalog::StaticCatalog`].
//! 2. **Pharmacy prices** — a simulated offer table with best-offer
//!    selection.
//! 3. **Sample prescriptions** — an in-memory `PrescriptionFeed` with the
//!    demo user's rows, including one deliberately corrupt entry.
//! 4. **Scenarios** — println walkthroughs wiring real components, used
//!    by the demo CLI.
//!
//! All data is hardcoded and fictional. Nothing here is medical advice.

mod builtin;

pub mod catalog;
pub mod pharmacy;
pub mod sample;
pub mod scenarios;

pub use catalog::StaticCatalog;
pub use pharmacy::{best_offer, offers_for, PharmacyOffer};
pub use sample::{sample_feed, InMemoryPrescriptionFeed, DEMO_USER};

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// End-to-end checks of the engines against the shipped reference data.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, TimeZone, Utc};

    use remedia_contracts::{
        alert::{AlertSeverity, HealthAlert},
        analysis::RiskLevel,
        error::RemediaResult,
    };
    use remedia_core::{
        traits::{AlertSink, CatalogProvider, Clock, SymptomAnalyzer},
        RefillMonitor,
    };
    use remedia_refill::RefillProjector;
    use remedia_triage::SymptomMatcher;

    use super::{sample_feed, StaticCatalog, DEMO_USER};

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            fixed_now()
        }
    }

    struct RecordingSink {
        delivered: Arc<Mutex<Vec<HealthAlert>>>,
    }

    impl AlertSink for RecordingSink {
        fn notify(&self, alert: &HealthAlert) -> RemediaResult<()> {
            self.delivered.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    // ── Symptom matching over the builtin catalog ────────────────────────────

    /// The cold-symptom reference input ranks Common Cold first at Medium.
    #[test]
    fn test_builtin_catalog_cold_example() {
        let catalog = StaticCatalog::builtin();
        let matcher = SymptomMatcher::new();

        let result = matcher
            .analyze("runny nose, sore throat, cough", catalog.records())
            .unwrap();

        assert_eq!(result.predictions[0].disease_name, "Common Cold");
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result.emergency.is_none());
    }

    /// The dengue reference input yields High risk with an emergency note.
    #[test]
    fn test_builtin_catalog_dengue_example() {
        let catalog = StaticCatalog::builtin();
        let matcher = SymptomMatcher::new();

        let result = matcher
            .analyze("I have high fever, severe headache, joint pain", catalog.records())
            .unwrap();

        assert_eq!(result.predictions[0].disease_name, "Dengue Fever");
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.emergency.is_some());
    }

    // ── Refill monitoring over the sample feed ───────────────────────────────

    /// The sample feed's four rows produce three projections (the corrupt
    /// Vitamin D row is skipped) and the expected alerts.
    #[test]
    fn test_sample_feed_dashboard_refresh() {
        let delivered: Arc<Mutex<Vec<HealthAlert>>> = Arc::new(Mutex::new(vec![]));
        let monitor = RefillMonitor::new(
            Box::new(sample_feed(fixed_now())),
            Box::new(RefillProjector::new()),
            Box::new(FixedClock),
            Box::new(RecordingSink {
                delivered: Arc::clone(&delivered),
            }),
        );

        let statuses = monitor.refresh(DEMO_USER).unwrap();

        assert_eq!(statuses.len(), 3);

        // Paracetamol: 10-day supply refilled 8 days ago, 2 days left.
        let paracetamol = &statuses[0];
        assert_eq!(paracetamol.prescription.medicine_name, "Paracetamol");
        assert_eq!(paracetamol.projection.days_remaining, 2);
        assert!(paracetamol.projection.is_low);

        // Metformin: 30-day supply refilled 10 days ago, comfortably ok.
        let metformin = &statuses[1];
        assert_eq!(metformin.projection.days_remaining, 20);
        assert!(!metformin.projection.is_low);

        // Omeprazole anchors on its start date: 14 of 28 days consumed.
        let omeprazole = &statuses[2];
        assert_eq!(omeprazole.projection.days_remaining, 14);

        // One low-supply warning plus one data-integrity warning.
        let alerts = delivered.lock().unwrap();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.severity == AlertSeverity::Warning));
        assert!(alerts.iter().any(|a| a.body.contains("Paracetamol")));
        assert!(alerts.iter().any(|a| a.body.contains("Vitamin D")));
    }
}
