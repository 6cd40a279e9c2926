//! Symptom analysis result types.
//!
//! These are ephemeral, per-query values: the matcher builds a fresh
//! `AnalysisResult` for every call and the caller owns it for the duration
//! of one query. Nothing here is cached or persisted.

use serde::{Deserialize, Serialize};

/// Coarse severity classification attached to an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        write!(f, "{}", name)
    }
}

/// One ranked candidate condition within an analysis result.
///
/// `probability_percent` is normalized over the top matches only; the
/// per-entry values are rounded independently, so the column can sum to
/// 100 plus or minus a small rounding error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Display name of the matched catalog entry.
    pub disease_name: String,
    /// Rounded share of the combined top-match score, 0..=100.
    pub probability_percent: u32,
}

/// The full outcome of one symptom analysis.
///
/// Built by the matcher, consumed by whatever surface ran the query, then
/// discarded. Absence of any match is represented by the matcher returning
/// `None`, never by an empty `predictions` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One-paragraph summary of what was matched.
    pub explanation: String,
    /// Ranked candidates, highest score first, at most three.
    pub predictions: Vec<Prediction>,
    /// Severity tier derived from the top match and the raw input.
    pub risk_level: RiskLevel,
    /// Self-care steps taken verbatim from the top match, at most three.
    pub care_advice: Vec<String>,
    /// Standing guidance on when to see a professional.
    pub consultation: String,
    /// Populated only when `risk_level` is High.
    pub emergency: Option<String>,
}
