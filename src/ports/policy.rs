//! Recommendation policy port.

use crate::domain::{Recommendation, RiskEstimate};

/// Maps a risk estimate to a care recommendation.
pub trait RecommendationPolicy: Send + Sync {
    fn classify(&self, risk: RiskEstimate) -> Recommendation;
}
