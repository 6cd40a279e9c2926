//! Error types shared across the REMEDIA crates.
//!
//! All fallible operations return `RemediaResult<T>`. The taxonomy is
//! deliberately small: an empty symptom analysis is NOT an error (the
//! matcher returns `Option::None` for it), so the variants below cover
//! only genuine failures.

use thiserror::Error;

/// The unified error type for the REMEDIA crates.
#[derive(Debug, Error)]
pub enum RemediaError {
    /// A prescription carried a non-positive dosage or quantity.
    ///
    /// Callers must surface this as a data-integrity warning; silently
    /// clamping the values to zero would hide the corrupt row.
    #[error("invalid prescription input: {reason}")]
    InvalidInput { reason: String },

    /// A catalog file could not be read, parsed, or validated.
    #[error("catalog configuration error: {reason}")]
    ConfigError { reason: String },

    /// An alert sink failed to deliver a notification.
    #[error("alert delivery failed: {reason}")]
    AlertDeliveryFailed { reason: String },
}

/// Convenience alias used throughout the REMEDIA crates.
pub type RemediaResult<T> = Result<T, RemediaError>;
