//! Supply projection arithmetic.
//!
//! `project()` turns one prescription plus an instant "now" into a
//! `RefillProjection`:
//!
//! 1. Anchor on the last refill date, falling back to the start date.
//! 2. Total supply in days = quantity / daily dosage (real-valued).
//! 3. Depletion instant = anchor + total supply.
//! 4. Days remaining = ceil of the span to depletion, floored at zero.
//! 5. Percent remaining = days remaining over total supply, clamped to
//!    0..=100.
//!
//! Non-positive dosage or quantity is rejected up front with
//! `RemediaError::InvalidInput`; the original data source does not guard
//! this and silently clamping would hide the corrupt row from the user.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use remedia_contracts::{
    error::{RemediaError, RemediaResult},
    prescription::{ActivePrescription, RefillProjection},
};
use remedia_core::traits::SupplyProjector;

/// Days of remaining supply at or below which a projection is flagged low.
///
/// Product-chosen threshold; tune here, not in the arithmetic.
pub const LOW_SUPPLY_THRESHOLD_DAYS: i64 = 5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// The refill projection engine.
///
/// Stateless apart from its threshold; pure given `now`, so repeated calls
/// with identical inputs return identical projections.
#[derive(Debug, Clone, Copy)]
pub struct RefillProjector {
    low_supply_threshold_days: i64,
}

impl Default for RefillProjector {
    fn default() -> Self {
        Self {
            low_supply_threshold_days: LOW_SUPPLY_THRESHOLD_DAYS,
        }
    }
}

impl RefillProjector {
    /// Create a projector with the default low-supply threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with a custom low-supply threshold.
    pub fn with_threshold(days: i64) -> Self {
        Self {
            low_supply_threshold_days: days,
        }
    }

    /// Validate the caller-supplied numeric fields.
    fn validate(prescription: &ActivePrescription) -> RemediaResult<()> {
        if !prescription.dosage_per_day.is_finite() || prescription.dosage_per_day <= 0.0 {
            warn!(
                medicine = %prescription.medicine_name,
                dosage = prescription.dosage_per_day,
                "rejecting prescription with non-positive dosage"
            );
            return Err(RemediaError::InvalidInput {
                reason: format!(
                    "dosage_per_day must be positive, got {}",
                    prescription.dosage_per_day
                ),
            });
        }
        if !prescription.total_quantity.is_finite() || prescription.total_quantity <= 0.0 {
            warn!(
                medicine = %prescription.medicine_name,
                quantity = prescription.total_quantity,
                "rejecting prescription with non-positive quantity"
            );
            return Err(RemediaError::InvalidInput {
                reason: format!(
                    "total_quantity must be positive, got {}",
                    prescription.total_quantity
                ),
            });
        }
        Ok(())
    }
}

impl SupplyProjector for RefillProjector {
    fn project(
        &self,
        prescription: &ActivePrescription,
        now: DateTime<Utc>,
    ) -> RemediaResult<RefillProjection> {
        Self::validate(prescription)?;

        // The most recent fill is the supply anchor; a never-refilled
        // prescription anchors on its issue date.
        let anchor = prescription
            .last_refill_date
            .unwrap_or(prescription.start_date);

        let days_supply_total = prescription.total_quantity / prescription.dosage_per_day;
        let depletion_date =
            anchor + Duration::seconds((days_supply_total * SECONDS_PER_DAY) as i64);

        let span_days = (depletion_date - now).num_seconds() as f64 / SECONDS_PER_DAY;
        let days_remaining = span_days.ceil().max(0.0) as i64;

        let percent_remaining =
            (100.0 * days_remaining as f64 / days_supply_total).clamp(0.0, 100.0);
        let is_low = days_remaining <= self.low_supply_threshold_days;

        debug!(
            medicine = %prescription.medicine_name,
            days_supply_total,
            days_remaining,
            is_low,
            "projection computed"
        );

        Ok(RefillProjection {
            days_supply_total,
            depletion_date,
            days_remaining,
            percent_remaining,
            is_low,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use remedia_contracts::{
        error::RemediaError,
        prescription::{ActivePrescription, PrescriptionId},
    };
    use remedia_core::traits::SupplyProjector;

    use super::RefillProjector;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn prescription(
        dosage: f64,
        quantity: f64,
        last_refill: Option<DateTime<Utc>>,
    ) -> ActivePrescription {
        ActivePrescription {
            id: PrescriptionId::new(),
            medicine_name: "Paracetamol".to_string(),
            dosage_per_day: dosage,
            total_quantity: quantity,
            start_date: fixed_now() - Duration::days(60),
            last_refill_date: last_refill,
        }
    }

    // ── Happy-path arithmetic ────────────────────────────────────────────────

    /// 20 units at 2/day refilled 8 days ago: 10-day supply, 2 days left,
    /// flagged low.
    #[test]
    fn test_partially_consumed_supply() {
        let projector = RefillProjector::new();
        let rx = prescription(2.0, 20.0, Some(fixed_now() - Duration::days(8)));

        let projection = projector.project(&rx, fixed_now()).unwrap();

        assert_eq!(projection.days_supply_total, 10.0);
        assert_eq!(projection.days_remaining, 2);
        assert!(projection.is_low);
        assert_eq!(projection.percent_remaining, 20.0);
        assert_eq!(
            projection.depletion_date,
            fixed_now() + Duration::days(2)
        );
    }

    /// 30 units at 1/day refilled today: full 30-day supply, not low.
    #[test]
    fn test_freshly_refilled_supply() {
        let projector = RefillProjector::new();
        let rx = prescription(1.0, 30.0, Some(fixed_now()));

        let projection = projector.project(&rx, fixed_now()).unwrap();

        assert_eq!(projection.days_supply_total, 30.0);
        assert_eq!(projection.days_remaining, 30);
        assert!(!projection.is_low);
        assert_eq!(projection.percent_remaining, 100.0);
    }

    /// Without a refill date the projection anchors on the start date.
    #[test]
    fn test_anchor_falls_back_to_start_date() {
        let projector = RefillProjector::new();
        // Started 60 days ago, 90-day supply, never refilled: 30 days left.
        let rx = prescription(1.0, 90.0, None);

        let projection = projector.project(&rx, fixed_now()).unwrap();

        assert_eq!(projection.days_remaining, 30);
        assert!(!projection.is_low);
    }

    /// A supply depleted in the past clamps to zero days, never negative.
    #[test]
    fn test_depleted_supply_clamps_to_zero() {
        let projector = RefillProjector::new();
        let rx = prescription(2.0, 20.0, Some(fixed_now() - Duration::days(45)));

        let projection = projector.project(&rx, fixed_now()).unwrap();

        assert_eq!(projection.days_remaining, 0);
        assert_eq!(projection.percent_remaining, 0.0);
        assert!(projection.is_low);
    }

    /// A fractional supply window rounds days up but never pushes the
    /// percentage above 100.
    #[test]
    fn test_percent_remaining_is_clamped() {
        let projector = RefillProjector::new();
        // 10 units at 3/day: 3.33-day supply, ceil gives 4 remaining days.
        let rx = prescription(3.0, 10.0, Some(fixed_now()));

        let projection = projector.project(&rx, fixed_now()).unwrap();

        assert_eq!(projection.days_remaining, 4);
        assert_eq!(projection.percent_remaining, 100.0);
    }

    /// Identical inputs and clock produce identical projections.
    #[test]
    fn test_projection_is_idempotent() {
        let projector = RefillProjector::new();
        let rx = prescription(2.0, 20.0, Some(fixed_now() - Duration::days(3)));

        let first = projector.project(&rx, fixed_now()).unwrap();
        let second = projector.project(&rx, fixed_now()).unwrap();

        assert_eq!(first, second);
    }

    // ── Validation ───────────────────────────────────────────────────────────

    /// Zero dosage is a typed error, not a division by zero.
    #[test]
    fn test_zero_dosage_is_invalid_input() {
        let projector = RefillProjector::new();
        let rx = prescription(0.0, 30.0, None);

        match projector.project(&rx, fixed_now()) {
            Err(RemediaError::InvalidInput { reason }) => {
                assert!(reason.contains("dosage_per_day"), "reason: {}", reason);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    /// Negative quantity is rejected the same way.
    #[test]
    fn test_negative_quantity_is_invalid_input() {
        let projector = RefillProjector::new();
        let rx = prescription(1.0, -5.0, None);

        match projector.project(&rx, fixed_now()) {
            Err(RemediaError::InvalidInput { reason }) => {
                assert!(reason.contains("total_quantity"), "reason: {}", reason);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    // ── Threshold tuning ─────────────────────────────────────────────────────

    /// The low-supply cutoff is configurable without touching the math.
    #[test]
    fn test_custom_threshold() {
        let strict = RefillProjector::with_threshold(10);
        let rx = prescription(2.0, 20.0, Some(fixed_now() - Duration::days(2)));

        // 8 days remaining: low under a 10-day threshold, fine under 5.
        let projection = strict.project(&rx, fixed_now()).unwrap();
        assert_eq!(projection.days_remaining, 8);
        assert!(projection.is_low);

        let default = RefillProjector::new();
        assert!(!default.project(&rx, fixed_now()).unwrap().is_low);
    }
}
