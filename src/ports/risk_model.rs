//! Risk model port: Trait for turning form inputs into a risk estimate.
//!
//! This trait abstracts the coefficient table from the application logic.

use crate::domain::{RiskBreakdown, RiskInputs};

/// Trait for EOS risk models.
///
/// Implementations must be pure: the same inputs always produce the same
/// breakdown, and malformed incidence yields a zero risk rather than an error.
pub trait RiskModel: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Evaluate the model.
    ///
    /// # Arguments
    /// * `inputs` - Current selections of the six risk factors
    ///
    /// # Returns
    /// The breakdown, including the rounded risk per 1000 births.
    fn compute(&self, inputs: &RiskInputs) -> RiskBreakdown;
}
