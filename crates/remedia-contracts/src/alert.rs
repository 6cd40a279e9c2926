//! User-facing alert types.
//!
//! Alerts travel through the `AlertSink` seam in remedia-core: an explicit
//! observer interface handed to the orchestrators at construction time.
//! There is no global notification bus; whoever builds a checker or
//! monitor decides where its alerts go.

use serde::{Deserialize, Serialize};

/// How urgently an alert should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Urgent,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AlertSeverity::Info => "Info",
            AlertSeverity::Warning => "Warning",
            AlertSeverity::Urgent => "Urgent",
        };
        write!(f, "{}", name)
    }
}

/// One notification emitted by an orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub severity: AlertSeverity,
    /// Short headline, e.g. "Supply running low".
    pub title: String,
    /// Full message body shown to the user.
    pub body: String,
}

impl HealthAlert {
    /// Build an alert from any string-like title and body.
    pub fn new(severity: AlertSeverity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            body: body.into(),
        }
    }
}
