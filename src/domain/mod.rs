//! Domain layer: Core value types and logic.
//!
//! This module contains pure Rust types with no I/O.
//! Everything here is recomputed from the current selections on demand.

pub mod factors;
mod form;
mod model;
mod recommendation;

pub use factors::{
    parse_incidence, Field, GbsStatus, GestationalAge, HighestTemp, Iap, RiskFactor, Rom,
    INCIDENCE_PRESETS,
};
pub use form::{FieldUpdate, FormState, DEFAULT_INCIDENCE};
pub use model::{
    compute_breakdown, compute_risk, effective_iap_lr, is_valid_incidence, RiskBreakdown,
    RiskEstimate, RiskInputs,
};
pub use recommendation::{
    Recommendation, EMPIRIC_ANTIBIOTICS_THRESHOLD, ENHANCED_VITALS_THRESHOLD,
};
