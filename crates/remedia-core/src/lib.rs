//! # remedia-core
//!
//! Trait seams and orchestrators for the REMEDIA health assistant.
//!
//! This crate provides:
//! - The collaborator traits (`CatalogProvider`, `PrescriptionFeed`,
//!   `Clock`, `AlertSink`) and engine seams (`SymptomAnalyzer`,
//!   `SupplyProjector`)
//! - The `SymptomChecker` and `RefillMonitor` orchestrators that wire
//!   engines to collaborators
//!
//! ## Usage
//!
//! ```rust,ignore
//! use remedia_core::{SymptomChecker, RefillMonitor, traits::SystemClock};
//! ```

pub mod checker;
pub mod monitor;
pub mod traits;

pub use checker::SymptomChecker;
pub use monitor::RefillMonitor;
