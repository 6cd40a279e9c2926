//! The refill dashboard orchestrator.
//!
//! `RefillMonitor` wires a prescription feed, a projector, a clock, and an
//! alert sink together. Callers invoke `refresh()` whenever the feed emits
//! a new snapshot (or whenever a dashboard re-renders); the monitor keeps
//! no state between calls, so every refresh is a full recomputation from
//! the current snapshot and the current clock reading.

use tracing::{debug, info, warn};

use remedia_contracts::{
    alert::{AlertSeverity, HealthAlert},
    error::{RemediaError, RemediaResult},
    prescription::SupplyStatus,
};

use crate::traits::{AlertSink, Clock, PrescriptionFeed, SupplyProjector};

/// Projects every prescription in a user's snapshot and flags low supplies.
pub struct RefillMonitor {
    feed: Box<dyn PrescriptionFeed>,
    projector: Box<dyn SupplyProjector>,
    clock: Box<dyn Clock>,
    alerts: Box<dyn AlertSink>,
}

impl RefillMonitor {
    /// Create a monitor from its four collaborators.
    pub fn new(
        feed: Box<dyn PrescriptionFeed>,
        projector: Box<dyn SupplyProjector>,
        clock: Box<dyn Clock>,
        alerts: Box<dyn AlertSink>,
    ) -> Self {
        Self {
            feed,
            projector,
            clock,
            alerts,
        }
    }

    /// Recompute the supply outlook for every prescription of `user_id`.
    ///
    /// # Behavior
    ///
    /// - Each projected row with `is_low` set emits one `Warning` alert.
    /// - A row the projector rejects with `InvalidInput` is dropped from
    ///   the returned list and surfaced as a `Warning` data-integrity
    ///   alert instead; one corrupt row must not blank the whole
    ///   dashboard.
    /// - Alert delivery failures abort the refresh: the
    ///   `AlertDeliveryFailed` error propagates to the caller.
    ///
    /// The result is ordered like the feed snapshot.
    pub fn refresh(&self, user_id: &str) -> RemediaResult<Vec<SupplyStatus>> {
        let now = self.clock.now();
        let snapshot = self.feed.snapshot(user_id);

        debug!(
            user_id = %user_id,
            prescription_count = snapshot.len(),
            %now,
            "refreshing refill projections"
        );

        let mut statuses = Vec::with_capacity(snapshot.len());

        for prescription in snapshot {
            let projection = match self.projector.project(&prescription, now) {
                Ok(projection) => projection,
                Err(RemediaError::InvalidInput { reason }) => {
                    warn!(
                        medicine = %prescription.medicine_name,
                        %reason,
                        "prescription failed projection, surfacing data-integrity alert"
                    );
                    let alert = HealthAlert::new(
                        AlertSeverity::Warning,
                        "Prescription data problem",
                        format!(
                            "{} could not be projected: {}",
                            prescription.medicine_name, reason
                        ),
                    );
                    self.alerts.notify(&alert)?;
                    continue;
                }
                Err(other) => return Err(other),
            };

            if projection.is_low {
                info!(
                    medicine = %prescription.medicine_name,
                    days_remaining = projection.days_remaining,
                    "supply low, notifying"
                );
                let alert = HealthAlert::new(
                    AlertSeverity::Warning,
                    "Supply running low",
                    format!(
                        "{} has {} day(s) of supply left (runs out {})",
                        prescription.medicine_name,
                        projection.days_remaining,
                        projection.depletion_date.format("%Y-%m-%d")
                    ),
                );
                self.alerts.notify(&alert)?;
            }

            statuses.push(SupplyStatus {
                prescription,
                projection,
            });
        }

        Ok(statuses)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{DateTime, Duration, TimeZone, Utc};

    use remedia_contracts::{
        alert::{AlertSeverity, HealthAlert},
        error::{RemediaError, RemediaResult},
        prescription::{ActivePrescription, PrescriptionId, RefillProjection},
    };

    use crate::traits::{AlertSink, Clock, PrescriptionFeed, SupplyProjector};

    use super::RefillMonitor;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn make_prescription(medicine: &str, dosage: f64, quantity: f64) -> ActivePrescription {
        ActivePrescription {
            id: PrescriptionId::new(),
            medicine_name: medicine.to_string(),
            dosage_per_day: dosage,
            total_quantity: quantity,
            start_date: fixed_now() - Duration::days(30),
            last_refill_date: Some(fixed_now() - Duration::days(8)),
        }
    }

    /// A feed with a fixed snapshot.
    struct MockFeed {
        rows: Vec<ActivePrescription>,
    }

    impl PrescriptionFeed for MockFeed {
        fn snapshot(&self, _user_id: &str) -> Vec<ActivePrescription> {
            self.rows.clone()
        }
    }

    /// A clock pinned to `fixed_now()`.
    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            fixed_now()
        }
    }

    /// A projector that derives a trivial projection from the quantity,
    /// rejecting non-positive dosage the way the real engine does.
    struct MockProjector;

    impl SupplyProjector for MockProjector {
        fn project(
            &self,
            prescription: &ActivePrescription,
            now: DateTime<Utc>,
        ) -> RemediaResult<RefillProjection> {
            if prescription.dosage_per_day <= 0.0 {
                return Err(RemediaError::InvalidInput {
                    reason: "dosage_per_day must be positive".to_string(),
                });
            }
            let days = (prescription.total_quantity / prescription.dosage_per_day) as i64;
            Ok(RefillProjection {
                days_supply_total: days as f64,
                depletion_date: now + Duration::days(days),
                days_remaining: days,
                percent_remaining: 100.0,
                is_low: days <= 5,
            })
        }
    }

    /// An alert sink that records every delivered alert.
    struct RecordingSink {
        delivered: Arc<Mutex<Vec<HealthAlert>>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                delivered: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    impl AlertSink for RecordingSink {
        fn notify(&self, alert: &HealthAlert) -> RemediaResult<()> {
            self.delivered.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    fn make_monitor(rows: Vec<ActivePrescription>, sink: RecordingSink) -> RefillMonitor {
        RefillMonitor::new(
            Box::new(MockFeed { rows }),
            Box::new(MockProjector),
            Box::new(FixedClock),
            Box::new(sink),
        )
    }

    // ── Test cases ───────────────────────────────────────────────────────────

    /// A healthy snapshot projects every row and sends no alerts.
    #[test]
    fn test_refresh_projects_all_rows() {
        let sink = RecordingSink::new();
        let delivered = sink.delivered.clone();

        let monitor = make_monitor(
            vec![
                make_prescription("Paracetamol", 2.0, 40.0),
                make_prescription("Cetirizine", 1.0, 30.0),
            ],
            sink,
        );

        let statuses = monitor.refresh("user-demo").unwrap();

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].prescription.medicine_name, "Paracetamol");
        assert_eq!(statuses[1].prescription.medicine_name, "Cetirizine");
        assert!(delivered.lock().unwrap().is_empty());
    }

    /// A low-supply row emits one Warning alert naming the medicine.
    #[test]
    fn test_low_supply_alerts() {
        let sink = RecordingSink::new();
        let delivered = sink.delivered.clone();

        let monitor = make_monitor(vec![make_prescription("Metformin", 2.0, 8.0)], sink);
        let statuses = monitor.refresh("user-demo").unwrap();

        assert_eq!(statuses.len(), 1);
        assert!(statuses[0].projection.is_low);

        let alerts = delivered.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert!(alerts[0].body.contains("Metformin"));
    }

    /// A corrupt row is skipped with a data-integrity alert; the remaining
    /// rows still project.
    #[test]
    fn test_invalid_row_skipped_with_warning() {
        let sink = RecordingSink::new();
        let delivered = sink.delivered.clone();

        let monitor = make_monitor(
            vec![
                make_prescription("Broken", 0.0, 30.0),
                make_prescription("Cetirizine", 1.0, 30.0),
            ],
            sink,
        );
        let statuses = monitor.refresh("user-demo").unwrap();

        assert_eq!(statuses.len(), 1, "corrupt row must be dropped");
        assert_eq!(statuses[0].prescription.medicine_name, "Cetirizine");

        let alerts = delivered.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].title.contains("data problem"));
        assert!(alerts[0].body.contains("Broken"));
    }

    /// Two refreshes over the same feed and clock yield identical results.
    #[test]
    fn test_refresh_is_idempotent() {
        let monitor = make_monitor(
            vec![make_prescription("Paracetamol", 2.0, 40.0)],
            RecordingSink::new(),
        );

        let first = monitor.refresh("user-demo").unwrap();
        let second = monitor.refresh("user-demo").unwrap();

        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].projection, second[0].projection);
    }
}
