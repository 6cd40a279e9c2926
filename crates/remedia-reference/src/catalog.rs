//! Catalog providers: the built-in reference set and TOML-loaded sets.
//!
//! `StaticCatalog` implements `CatalogProvider` over an immutable record
//! list. It can be built three ways:
//!
//! - `builtin()`           — the hardcoded reference catalog
//! - `from_toml_str(...)`  — parse a TOML document
//! - `from_file(...)`      — read and parse a TOML file
//!
//! A TOML catalog is an array of `[[diseases]]` tables whose fields mirror
//! `DiseaseRecord`. Load failures map to `RemediaError::ConfigError`; a
//! catalog that parses but is empty or repeats an id is rejected the same
//! way, so a misconfigured deployment fails at startup rather than
//! producing silently wrong analyses.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use remedia_contracts::{
    disease::{DiseaseCategory, DiseaseRecord},
    error::{RemediaError, RemediaResult},
};
use remedia_core::traits::CatalogProvider;

use crate::builtin::builtin_records;

/// The top-level structure deserialized from a TOML catalog file.
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    /// Ordered list of entries. Order is preserved into the catalog.
    diseases: Vec<DiseaseRecord>,
}

/// An immutable, in-memory catalog provider.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<DiseaseRecord>,
}

impl StaticCatalog {
    /// The hardcoded reference catalog shipped with the assistant.
    pub fn builtin() -> Self {
        let records = builtin_records();
        debug!(record_count = records.len(), "loaded builtin catalog");
        Self { records }
    }

    /// Parse `s` as a TOML catalog document.
    ///
    /// Returns `RemediaError::ConfigError` if the TOML is malformed, the
    /// catalog is empty, or two entries share an id.
    pub fn from_toml_str(s: &str) -> RemediaResult<Self> {
        let file: CatalogFile = toml::from_str(s).map_err(|e| RemediaError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Self::validated(file.diseases)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> RemediaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RemediaError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn validated(records: Vec<DiseaseRecord>) -> RemediaResult<Self> {
        if records.is_empty() {
            warn!("rejecting empty catalog");
            return Err(RemediaError::ConfigError {
                reason: "catalog contains no disease entries".to_string(),
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.0.as_str()) {
                return Err(RemediaError::ConfigError {
                    reason: format!("duplicate disease id '{}' in catalog", record.id.0),
                });
            }
        }

        debug!(record_count = records.len(), "catalog validated");
        Ok(Self { records })
    }

    // ── Lookup helpers ───────────────────────────────────────────────────────

    /// Find one entry by id.
    pub fn find_by_id(&self, id: &str) -> Option<&DiseaseRecord> {
        self.records.iter().find(|r| r.id.0 == id)
    }

    /// Find one entry by display name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&DiseaseRecord> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .find(|r| r.name.to_lowercase() == wanted)
    }

    /// All entries in the given category, in catalog order.
    pub fn by_category(&self, category: DiseaseCategory) -> Vec<&DiseaseRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }
}

impl CatalogProvider for StaticCatalog {
    fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
