//! Ports layer: Trait definitions for the calculator's seams.
//!
//! Following Hexagonal Architecture, these traits separate the application
//! service from the concrete model coefficients and thresholds.

mod policy;
mod risk_model;

pub use policy::RecommendationPolicy;
pub use risk_model::RiskModel;
