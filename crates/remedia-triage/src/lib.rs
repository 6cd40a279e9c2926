//! # remedia-triage
//!
//! Keyword-scoring symptom matcher for the REMEDIA health assistant.
//!
//! This crate provides [`engine::SymptomMatcher`], which implements the
//! [`remedia_core::traits::SymptomAnalyzer`] trait. Matching is pure
//! weighted substring counting over an in-memory catalog: no model, no
//! I/O, no state between queries.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use remedia_core::traits::SymptomAnalyzer;
//! use remedia_triage::SymptomMatcher;
//!
//! let matcher = SymptomMatcher::new();
//! match matcher.analyze("runny nose and sore throat", catalog.records()) {
//!     Some(result) => println!("{}", result.explanation),
//!     None => println!("Tell me a little more about how you feel."),
//! }
//! ```

pub mod engine;
pub mod tokenize;

pub use engine::{MatchResult, ScoringWeights, SymptomMatcher};
