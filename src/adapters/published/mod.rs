//! Published likelihood-ratio model.
//!
//! Delegates to the domain arithmetic and the fixed clinical thresholds.

use crate::domain::{compute_breakdown, Recommendation, RiskBreakdown, RiskEstimate, RiskInputs};
use crate::ports::{RecommendationPolicy, RiskModel};

/// The published EOS model: static LR table plus fixed recommendation thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishedModel;

impl PublishedModel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RiskModel for PublishedModel {
    fn name(&self) -> &'static str {
        "published-lr"
    }

    fn compute(&self, inputs: &RiskInputs) -> RiskBreakdown {
        compute_breakdown(inputs)
    }
}

impl RecommendationPolicy for PublishedModel {
    fn classify(&self, risk: RiskEstimate) -> Recommendation {
        Recommendation::from_estimate(risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormState;

    #[test]
    fn test_default_form_is_routine_care() {
        let model = PublishedModel::new();
        let breakdown = model.compute(&FormState::default().inputs());
        assert_eq!(breakdown.risk.to_string(), "0.07");
        assert_eq!(model.classify(breakdown.risk), Recommendation::RoutineCare);
    }
}
