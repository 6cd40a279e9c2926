//! The weighted-substring symptom matcher.
//!
//! Scoring algorithm, per catalog record:
//!
//! 1. Normalize the input to lowercase and tokenize it (tokens of length
//!    2 or less are discarded).
//! 2. Add `name_match` when the record's name appears verbatim in the
//!    input; `symptom_exact` per symptom phrase appearing verbatim;
//!    `symptom_token` per (symptom, token) pair where the symptom contains
//!    the token; `description_token` per token found in the description.
//! 3. Drop records with no positive score, sort descending (stable, so
//!    equal scores keep catalog order), keep the top `MAX_PREDICTIONS`.
//! 4. Normalize the kept scores to rounded percentages and derive the risk
//!    tier from the top match's category plus emergency phrases in the raw
//!    input.
//!
//! No step of this ever fails: an input that matches nothing produces
//! `None`, which callers treat as "tell me more", not as an error.

use std::cmp::Ordering;

use tracing::{debug, trace};

use remedia_contracts::{
    analysis::{AnalysisResult, Prediction, RiskLevel},
    disease::{DiseaseCategory, DiseaseRecord},
};
use remedia_core::traits::SymptomAnalyzer;

use crate::tokenize::{normalize, tokenize};

// ── Tuning constants ──────────────────────────────────────────────────────────
//
// Product-chosen values. Adjust here, never inline in the algorithm.

/// Maximum number of ranked predictions in a result.
pub const MAX_PREDICTIONS: usize = 3;

/// Maximum number of care-advice lines taken from the top match.
pub const CARE_ADVICE_LIMIT: usize = 3;

/// Phrases in the raw input that force the risk tier to High regardless of
/// the top match's category.
pub const EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "chest tightness",
    "pressure in my chest",
    "difficulty breathing",
    "shortness of breath",
    "trouble breathing",
    "cannot breathe",
    "can't breathe",
    "breathless",
];

/// The scoring weights applied by the matcher.
///
/// These are product-tuned values with no derivation behind them; keeping
/// them in one struct lets them be adjusted without touching the scoring
/// loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Disease name found verbatim in the input.
    pub name_match: f64,
    /// One symptom phrase found verbatim in the input.
    pub symptom_exact: f64,
    /// One input token found inside one symptom phrase.
    pub symptom_token: f64,
    /// One input token found inside the description.
    pub description_token: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name_match: 5.0,
            symptom_exact: 3.0,
            symptom_token: 1.0,
            description_token: 0.5,
        }
    }
}

/// One scored catalog entry, before ranking. Created per query and
/// discarded once the result is assembled.
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    pub record: &'a DiseaseRecord,
    pub score: f64,
}

/// The symptom matching engine.
///
/// Stateless apart from its weights; a single instance may serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SymptomMatcher {
    weights: ScoringWeights,
}

impl SymptomMatcher {
    /// Create a matcher with the default product weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom weights.
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score every catalog record against the input, dropping records with
    /// no positive score. The result is sorted descending by score; the
    /// sort is stable, so equal scores keep catalog order.
    pub fn score_catalog<'a>(
        &self,
        input: &str,
        catalog: &'a [DiseaseRecord],
    ) -> Vec<MatchResult<'a>> {
        let normalized = normalize(input);
        let tokens = tokenize(&normalized);

        let mut matches: Vec<MatchResult<'a>> = catalog
            .iter()
            .map(|record| MatchResult {
                record,
                score: self.score_record(record, &normalized, &tokens),
            })
            .filter(|m| m.score > 0.0)
            .collect();

        // Stable sort: ties keep catalog order. That ordering is observed
        // product behavior; do not replace with an unstable sort.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches
    }

    /// Compute the weighted score of one record.
    fn score_record(&self, record: &DiseaseRecord, normalized: &str, tokens: &[&str]) -> f64 {
        let mut score = 0.0;

        if normalized.contains(&record.name.to_lowercase()) {
            score += self.weights.name_match;
        }

        for symptom in &record.symptoms {
            let symptom_lower = symptom.to_lowercase();
            if normalized.contains(&symptom_lower) {
                score += self.weights.symptom_exact;
            }
            for token in tokens {
                if symptom_lower.contains(token) {
                    score += self.weights.symptom_token;
                }
            }
        }

        let description_lower = record.description.to_lowercase();
        for token in tokens {
            if description_lower.contains(token) {
                score += self.weights.description_token;
            }
        }

        trace!(disease = %record.name, score, "scored catalog record");
        score
    }

    /// Derive the risk tier from the top match and the normalized input.
    fn classify_risk(top: &DiseaseRecord, normalized: &str) -> RiskLevel {
        let emergency_phrase = EMERGENCY_PHRASES.iter().any(|p| normalized.contains(p));

        if top.category == DiseaseCategory::Infectious || emergency_phrase {
            RiskLevel::High
        } else if matches!(
            top.category,
            DiseaseCategory::Respiratory | DiseaseCategory::Chronic
        ) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Canned consultation guidance per risk tier.
    fn consultation_text(risk: RiskLevel) -> &'static str {
        match risk {
            RiskLevel::High => {
                "Contact a medical professional promptly; do not wait for symptoms to worsen."
            }
            RiskLevel::Medium => {
                "Schedule an appointment with a doctor if symptoms persist beyond a few days."
            }
            RiskLevel::Low => {
                "Monitor your symptoms at home and consult a doctor if they last more than a week."
            }
        }
    }
}

impl SymptomAnalyzer for SymptomMatcher {
    /// Analyze one free-text symptom description against the catalog.
    ///
    /// Returns `None` when nothing scores above zero. Otherwise the top
    /// `MAX_PREDICTIONS` matches are converted to percentages of their
    /// combined score (rounded independently, so the column may sum to
    /// 100 give or take a point or two).
    fn analyze(&self, input: &str, catalog: &[DiseaseRecord]) -> Option<AnalysisResult> {
        let matches = self.score_catalog(input, catalog);
        if matches.is_empty() {
            debug!(input_len = input.len(), "no record scored above zero");
            return None;
        }

        let top_matches = &matches[..matches.len().min(MAX_PREDICTIONS)];
        let score_sum: f64 = top_matches.iter().map(|m| m.score).sum();

        let predictions: Vec<Prediction> = top_matches
            .iter()
            .map(|m| Prediction {
                disease_name: m.record.name.clone(),
                probability_percent: (100.0 * m.score / score_sum).round() as u32,
            })
            .collect();

        let top = top_matches[0].record;
        let normalized = normalize(input);
        let risk_level = Self::classify_risk(top, &normalized);

        debug!(
            top_match = %top.name,
            category = %top.category,
            risk = %risk_level,
            candidates = matches.len(),
            "analysis assembled"
        );

        let care_advice: Vec<String> = top
            .remedies
            .iter()
            .take(CARE_ADVICE_LIMIT)
            .cloned()
            .collect();

        let emergency = match risk_level {
            RiskLevel::High => Some(
                "If you experience severe chest pain, difficulty breathing, or confusion, \
                 call emergency services immediately."
                    .to_string(),
            ),
            _ => None,
        };

        Some(AnalysisResult {
            explanation: format!(
                "Based on the symptoms you described, the closest match is {} ({}).",
                top.name, top.category
            ),
            predictions,
            risk_level,
            care_advice,
            consultation: Self::consultation_text(risk_level).to_string(),
            emergency,
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
