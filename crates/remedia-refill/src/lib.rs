//! # remedia-refill
//!
//! Medication supply projection for the REMEDIA health assistant.
//!
//! This crate provides [`projector::RefillProjector`], which implements the
//! [`remedia_core::traits::SupplyProjector`] trait. Given a prescription
//! and an injected "now", it computes the depletion date, remaining days,
//! and a low-supply flag. The computation is pure; callers re-run it on
//! every render or feed snapshot rather than caching results.

pub mod projector;

pub use projector::{RefillProjector, LOW_SUPPLY_THRESHOLD_DAYS};
