//! # remedia-contracts
//!
//! Shared types and errors for the REMEDIA health assistant.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod alert;
pub mod analysis;
pub mod disease;
pub mod error;
pub mod prescription;
