//! Disease catalog entry types.
//!
//! A `DiseaseRecord` is an immutable reference entry: it is loaded once at
//! startup by a catalog provider and never mutated afterwards. Everything
//! the symptom matcher knows about a condition lives in these fields.

use serde::{Deserialize, Serialize};

/// Stable, human-readable identifier for a catalog entry.
///
/// Used in catalog files, logs, and lookup calls.
/// Example: DiseaseId("common-cold")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiseaseId(pub String);

impl DiseaseId {
    /// Construct an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Coarse clinical category of a catalog entry.
///
/// The category drives the risk tier of an analysis: `Infectious` escalates
/// to High, `Respiratory` and `Chronic` map to Medium, everything else is
/// Low unless the raw input contains an emergency phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiseaseCategory {
    Infectious,
    Respiratory,
    Chronic,
    Digestive,
    Neurological,
    Dermatological,
    General,
}

impl std::fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiseaseCategory::Infectious => "Infectious",
            DiseaseCategory::Respiratory => "Respiratory",
            DiseaseCategory::Chronic => "Chronic",
            DiseaseCategory::Digestive => "Digestive",
            DiseaseCategory::Neurological => "Neurological",
            DiseaseCategory::Dermatological => "Dermatological",
            DiseaseCategory::General => "General",
        };
        write!(f, "{}", name)
    }
}

/// One immutable disease catalog entry.
///
/// All list fields are ordered; the matcher reads them in order and the
/// first three `remedies` become the care advice of an analysis result.
/// Catalog providers hand out slices of these; nothing mutates them after
/// load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Catalog-unique identifier.
    pub id: DiseaseId,
    /// Display name, matched verbatim (case-insensitively) against input.
    pub name: String,
    /// Clinical category driving risk classification.
    pub category: DiseaseCategory,
    /// Short prose description; its words contribute low-weight matches.
    pub description: String,
    /// Common causes, in display order.
    pub causes: Vec<String>,
    /// Symptom phrases, lowercase, in display order.
    pub symptoms: Vec<String>,
    /// Self-care steps, in display order. The first three become advice.
    pub remedies: Vec<String>,
    /// Commonly dispensed medicine names, in display order.
    pub medicines: Vec<String>,
}
