//! Sample prescription data and the in-memory feed.
//!
//! `InMemoryPrescriptionFeed` is the reference implementation of the
//! `PrescriptionFeed` trait: a per-user map of prescription rows, safe to
//! share across threads because it is immutable after construction. The
//! sample data is entirely fictional and includes one deliberately corrupt
//! row so the data-integrity alert path is exercised end to end.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use remedia_contracts::prescription::{ActivePrescription, PrescriptionId};
use remedia_core::traits::PrescriptionFeed;

/// The demo user id used by the sample feed and the demo surfaces.
pub const DEMO_USER: &str = "user-demo";

/// An immutable, in-memory prescription feed keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrescriptionFeed {
    per_user: HashMap<String, Vec<ActivePrescription>>,
}

impl InMemoryPrescriptionFeed {
    /// Create an empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) one user's prescription rows.
    pub fn insert(&mut self, user_id: impl Into<String>, rows: Vec<ActivePrescription>) {
        self.per_user.insert(user_id.into(), rows);
    }
}

impl PrescriptionFeed for InMemoryPrescriptionFeed {
    /// Return the user's rows, or an empty snapshot for unknown users.
    fn snapshot(&self, user_id: &str) -> Vec<ActivePrescription> {
        self.per_user.get(user_id).cloned().unwrap_or_default()
    }
}

fn rx(
    medicine: &str,
    dosage_per_day: f64,
    total_quantity: f64,
    start: DateTime<Utc>,
    last_refill: Option<DateTime<Utc>>,
) -> ActivePrescription {
    ActivePrescription {
        id: PrescriptionId::new(),
        medicine_name: medicine.to_string(),
        dosage_per_day,
        total_quantity,
        start_date: start,
        last_refill_date: last_refill,
    }
}

/// Build the sample feed for `DEMO_USER`, anchored on `now`.
///
/// The rows cover the interesting projection states:
/// - Paracetamol: 10-day supply refilled 8 days ago, so 2 days left (low)
/// - Metformin: 30-day supply refilled 10 days ago, comfortably stocked
/// - Omeprazole: never refilled, anchored on its start date
/// - Vitamin D: corrupt row with a zero dosage, exercising the
///   data-integrity alert instead of a projection
pub fn sample_feed(now: DateTime<Utc>) -> InMemoryPrescriptionFeed {
    let mut feed = InMemoryPrescriptionFeed::new();
    feed.insert(
        DEMO_USER,
        vec![
            rx(
                "Paracetamol",
                2.0,
                20.0,
                now - Duration::days(40),
                Some(now - Duration::days(8)),
            ),
            rx(
                "Metformin",
                2.0,
                60.0,
                now - Duration::days(90),
                Some(now - Duration::days(10)),
            ),
            rx("Omeprazole", 1.0, 28.0, now - Duration::days(14), None),
            rx("Vitamin D", 0.0, 30.0, now - Duration::days(5), None),
        ],
    );
    feed
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use remedia_core::traits::PrescriptionFeed;

    use super::{sample_feed, InMemoryPrescriptionFeed, DEMO_USER};

    #[test]
    fn test_sample_feed_has_demo_rows() {
        let feed = sample_feed(Utc::now());
        let rows = feed.snapshot(DEMO_USER);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].medicine_name, "Paracetamol");

        // The corrupt row is present on purpose.
        assert!(rows.iter().any(|r| r.dosage_per_day <= 0.0));
    }

    #[test]
    fn test_unknown_user_gets_empty_snapshot() {
        let feed = sample_feed(Utc::now());
        assert!(feed.snapshot("someone-else").is_empty());
    }

    #[test]
    fn test_insert_replaces_rows() {
        let mut feed = InMemoryPrescriptionFeed::new();
        feed.insert("u1", vec![]);
        assert!(feed.snapshot("u1").is_empty());
    }
}
