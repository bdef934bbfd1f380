//! # eoscalc
//!
//! Neonatal early-onset sepsis (EOS) risk calculator.
//!
//! This crate provides:
//! - The published likelihood-ratio model over six maternal/infant risk factors
//! - A three-tier care recommendation derived from the estimated risk
//! - A pure form-state transition that keeps IAP consistent with GBS status
//! - Terminal UI for bedside use
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core value types (risk factors, model arithmetic, recommendation, form state)
//! - `ports`: Trait definitions for the model and the recommendation policy
//! - `adapters`: Concrete implementations (the published likelihood-ratio model)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{FormState, Recommendation, RiskEstimate, RiskInputs};

/// Result type for eoscalc operations
pub type Result<T> = std::result::Result<T, EosError>;

/// Main error type for eoscalc
#[derive(Debug, thiserror::Error)]
pub enum EosError {
    #[error("Unknown {field} code: {code:?}")]
    UnknownCode { field: domain::Field, code: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
