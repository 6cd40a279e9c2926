//! The symptom check orchestrator.
//!
//! `SymptomChecker` wires a catalog provider, an analyzer, and an alert
//! sink together. It owns no state of its own: every call to `check()`
//! runs the analyzer over the provider's current records and returns the
//! result, escalating High-risk outcomes through the sink.

use tracing::{debug, info, warn};

use remedia_contracts::{
    alert::{AlertSeverity, HealthAlert},
    analysis::{AnalysisResult, RiskLevel},
    error::RemediaResult,
};

use crate::traits::{AlertSink, CatalogProvider, SymptomAnalyzer};

/// Runs symptom analyses against a catalog and escalates urgent results.
pub struct SymptomChecker {
    catalog: Box<dyn CatalogProvider>,
    analyzer: Box<dyn SymptomAnalyzer>,
    alerts: Box<dyn AlertSink>,
}

impl SymptomChecker {
    /// Create a checker from its three collaborators.
    pub fn new(
        catalog: Box<dyn CatalogProvider>,
        analyzer: Box<dyn SymptomAnalyzer>,
        alerts: Box<dyn AlertSink>,
    ) -> Self {
        Self {
            catalog,
            analyzer,
            alerts,
        }
    }

    /// Analyze one free-text symptom description.
    ///
    /// Returns `Ok(None)` when the input matched nothing in the catalog;
    /// the caller should prompt for more detail. When the analysis comes
    /// back High risk, an `Urgent` alert is sent through the sink before
    /// the result is returned; a sink failure fails the whole call so the
    /// escalation is never silently lost.
    pub fn check(&self, input: &str) -> RemediaResult<Option<AnalysisResult>> {
        let records = self.catalog.records();
        debug!(
            input_len = input.len(),
            catalog_size = records.len(),
            "running symptom analysis"
        );

        let result = match self.analyzer.analyze(input, records) {
            Some(result) => result,
            None => {
                debug!("no catalog entry matched; returning empty result");
                return Ok(None);
            }
        };

        info!(
            top_match = %result
                .predictions
                .first()
                .map(|p| p.disease_name.as_str())
                .unwrap_or("?"),
            risk = %result.risk_level,
            prediction_count = result.predictions.len(),
            "symptom analysis complete"
        );

        if result.risk_level == RiskLevel::High {
            let top = result
                .predictions
                .first()
                .map(|p| p.disease_name.as_str())
                .unwrap_or("an urgent condition");
            warn!(top_match = %top, "high-risk analysis, escalating");

            let alert = HealthAlert::new(
                AlertSeverity::Urgent,
                "Urgent symptoms detected",
                format!(
                    "Your symptoms closely match {}. Seek medical attention promptly.",
                    top
                ),
            );
            self.alerts.notify(&alert)?;
        }

        Ok(Some(result))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use remedia_contracts::{
        alert::{AlertSeverity, HealthAlert},
        analysis::{AnalysisResult, Prediction, RiskLevel},
        disease::{DiseaseCategory, DiseaseId, DiseaseRecord},
        error::{RemediaError, RemediaResult},
    };

    use crate::traits::{AlertSink, CatalogProvider, SymptomAnalyzer};

    use super::SymptomChecker;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    fn make_record(name: &str, category: DiseaseCategory) -> DiseaseRecord {
        DiseaseRecord {
            id: DiseaseId::new(name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            category,
            description: "test entry".to_string(),
            causes: vec![],
            symptoms: vec!["fever".to_string()],
            remedies: vec!["rest".to_string()],
            medicines: vec![],
        }
    }

    fn make_result(top: &str, risk: RiskLevel) -> AnalysisResult {
        AnalysisResult {
            explanation: "test".to_string(),
            predictions: vec![Prediction {
                disease_name: top.to_string(),
                probability_percent: 100,
            }],
            risk_level: risk,
            care_advice: vec!["rest".to_string()],
            consultation: "see a doctor if symptoms persist".to_string(),
            emergency: match risk {
                RiskLevel::High => Some("seek care now".to_string()),
                _ => None,
            },
        }
    }

    /// A catalog with a fixed record list.
    struct MockCatalog {
        records: Vec<DiseaseRecord>,
    }

    impl CatalogProvider for MockCatalog {
        fn records(&self) -> &[DiseaseRecord] {
            &self.records
        }
    }

    /// An analyzer that always returns a pre-configured result.
    struct MockAnalyzer {
        result: Option<AnalysisResult>,
    }

    impl SymptomAnalyzer for MockAnalyzer {
        fn analyze(&self, _input: &str, _catalog: &[DiseaseRecord]) -> Option<AnalysisResult> {
            self.result.clone()
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

    /// A sink that always fails delivery.
    struct FailingSink;

    impl AlertSink for FailingSink {
        fn notify(&self, _alert: &HealthAlert) -> RemediaResult<()> {
            Err(RemediaError::AlertDeliveryFailed {
                reason: "sink closed".to_string(),
            })
        }
    }

    fn make_checker(
        result: Option<AnalysisResult>,
        sink: Box<dyn AlertSink>,
    ) -> SymptomChecker {
        SymptomChecker::new(
            Box::new(MockCatalog {
                records: vec![make_record("Common Cold", DiseaseCategory::Respiratory)],
            }),
            Box::new(MockAnalyzer { result }),
            sink,
        )
    }

    // ── Test cases ───────────────────────────────────────────────────────────

    /// An empty analysis passes through as Ok(None) with no alert sent.
    #[test]
    fn test_no_match_is_not_an_error() {
        let sink = RecordingSink::new();
        let delivered = sink.delivered.clone();

        let checker = make_checker(None, Box::new(sink));
        let result = checker.check("gibberish").unwrap();

        assert!(result.is_none());
        assert!(delivered.lock().unwrap().is_empty(), "no alert on no-match");
    }

    /// Medium-risk results return without touching the sink.
    #[test]
    fn test_medium_risk_sends_no_alert() {
        let sink = RecordingSink::new();
        let delivered = sink.delivered.clone();

        let checker = make_checker(
            Some(make_result("Common Cold", RiskLevel::Medium)),
            Box::new(sink),
        );
        let result = checker.check("runny nose and cough").unwrap().unwrap();

        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(delivered.lock().unwrap().is_empty());
    }

    /// High-risk results emit exactly one Urgent alert naming the top match.
    #[test]
    fn test_high_risk_escalates() {
        let sink = RecordingSink::new();
        let delivered = sink.delivered.clone();

        let checker = make_checker(
            Some(make_result("Dengue Fever", RiskLevel::High)),
            Box::new(sink),
        );
        let result = checker.check("high fever and joint pain").unwrap().unwrap();

        assert_eq!(result.risk_level, RiskLevel::High);

        let alerts = delivered.lock().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Urgent);
        assert!(
            alerts[0].body.contains("Dengue Fever"),
            "alert should name the top match: {}",
            alerts[0].body
        );
    }

    /// A failing sink fails the whole check so escalations are never lost.
    #[test]
    fn test_sink_failure_propagates() {
        let checker = make_checker(
            Some(make_result("Dengue Fever", RiskLevel::High)),
            Box::new(FailingSink),
        );
        let result = checker.check("high fever and joint pain");

        match result {
            Err(RemediaError::AlertDeliveryFailed { reason }) => {
                assert!(reason.contains("sink closed"));
            }
            other => panic!("expected AlertDeliveryFailed, got {:?}", other),
        }
    }
}
