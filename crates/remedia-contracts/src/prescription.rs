//! Prescription and supply projection types.
//!
//! `ActivePrescription` rows are sourced externally per user; the refill
//! projector only reads them. A `RefillProjection` is derived from the
//! current wall-clock time on every refresh and is never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for one prescription row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrescriptionId(pub uuid::Uuid);

impl PrescriptionId {
    /// Create a new, unique prescription ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for PrescriptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// One active prescription as delivered by the prescription feed.
///
/// `dosage_per_day` and `total_quantity` must be positive; the projector
/// rejects non-positive values with `RemediaError::InvalidInput` rather
/// than dividing by zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePrescription {
    pub id: PrescriptionId,
    /// Medicine display name, also the key into pharmacy price lookups.
    pub medicine_name: String,
    /// Units consumed per day. Must be > 0.
    pub dosage_per_day: f64,
    /// Units dispensed at the last fill. Must be > 0.
    pub total_quantity: f64,
    /// When the prescription was first issued.
    pub start_date: DateTime<Utc>,
    /// Most recent refill, if any. The projector anchors on this when
    /// present and falls back to `start_date` otherwise.
    pub last_refill_date: Option<DateTime<Utc>>,
}

/// Derived supply outlook for one prescription at one instant.
///
/// Recomputed in full from the prescription and the injected clock on
/// every call; holding one of these across renders is a staleness bug in
/// the caller, not supported behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefillProjection {
    /// Total days the dispensed quantity covers at the stated dosage.
    pub days_supply_total: f64,
    /// Calendar instant at which the supply reaches zero.
    pub depletion_date: DateTime<Utc>,
    /// Whole days of supply left, never negative.
    pub days_remaining: i64,
    /// Share of the supply window still ahead, clamped to 0..=100.
    pub percent_remaining: f64,
    /// True when `days_remaining` is at or below the low-supply threshold.
    pub is_low: bool,
}

/// One row of a refill dashboard refresh: the prescription together with
/// its freshly computed projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyStatus {
    pub prescription: ActivePrescription,
    pub projection: RefillProjection,
}
