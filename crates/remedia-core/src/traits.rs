//! Core trait definitions for the REMEDIA assistant.
//!
//! These traits are the seams between the pure calculation engines and the
//! outside world:
//!
//! - `CatalogProvider`   — read-only disease reference data
//! - `PrescriptionFeed`  — per-user prescription snapshots
//! - `Clock`             — injectable wall-clock time
//! - `AlertSink`         — explicit observer for user-facing notifications
//! - `SymptomAnalyzer`   — the symptom matching engine
//! - `SupplyProjector`   — the refill projection engine
//!
//! The orchestrators in this crate wire them together. Engines never talk
//! to a provider directly; they receive plain data and return plain data.

use chrono::{DateTime, Utc};

use remedia_contracts::{
    alert::HealthAlert,
    analysis::AnalysisResult,
    disease::DiseaseRecord,
    error::RemediaResult,
    prescription::{ActivePrescription, RefillProjection},
};

/// A read-only source of disease reference records.
///
/// Implementations load their data once at startup and hand out the same
/// ordered slice on every call. Catalog order is meaningful: the matcher's
/// tie-breaking preserves it.
pub trait CatalogProvider: Send + Sync {
    /// Return every catalog entry, in load order.
    fn records(&self) -> &[DiseaseRecord];
}

/// A subscription-style source of the current user's prescriptions.
///
/// `snapshot()` returns the full current set for the given opaque user id.
/// Whenever the underlying store emits a new snapshot, the caller re-runs
/// `RefillMonitor::refresh()`; the monitor itself keeps no state between
/// calls.
pub trait PrescriptionFeed: Send + Sync {
    /// Return the user's active prescriptions as of now.
    fn snapshot(&self, user_id: &str) -> Vec<ActivePrescription>;
}

/// Injectable time source.
///
/// Projections are derived from "now"; tests and the TUI's scrubable
/// dashboard substitute their own implementations.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Destination for user-facing notifications.
///
/// This replaces any global event bus: whoever constructs an orchestrator
/// passes in the sink its alerts should go to. Implementations decide how
/// to present the alert (console line, TUI banner, toast).
pub trait AlertSink: Send + Sync {
    /// Deliver one alert.
    ///
    /// A failed delivery is a real error; the orchestrators propagate it
    /// rather than dropping the notification on the floor.
    fn notify(&self, alert: &HealthAlert) -> RemediaResult<()>;
}

/// The symptom matching engine seam.
///
/// Implementations must be pure: same input and catalog, same result. A
/// `None` return means the input matched nothing and the caller should ask
/// for more detail; it is never an error.
pub trait SymptomAnalyzer: Send + Sync {
    fn analyze(&self, input: &str, catalog: &[DiseaseRecord]) -> Option<AnalysisResult>;
}

/// The refill projection engine seam.
///
/// Implementations must be pure given `now` and must reject non-positive
/// dosage or quantity with `RemediaError::InvalidInput` instead of
/// producing a division by zero.
pub trait SupplyProjector: Send + Sync {
    fn project(
        &self,
        prescription: &ActivePrescription,
        now: DateTime<Utc>,
    ) -> RemediaResult<RefillProjection>;
}
