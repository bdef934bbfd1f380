//! Care recommendation tiers.
//!
//! Maps an EOS risk estimate to one of three clinical recommendations using
//! the fixed thresholds of the published model.

use serde::{Deserialize, Serialize};

use super::model::RiskEstimate;

/// Lower bound (inclusive) of the "Enhanced Vital Signs" tier.
pub const ENHANCED_VITALS_THRESHOLD: f64 = 0.65;

/// Upper bound (inclusive) of the "Enhanced Vital Signs" tier; anything above
/// it recommends empiric antibiotics.
pub const EMPIRIC_ANTIBIOTICS_THRESHOLD: f64 = 1.18;

/// Recommendation tier, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Routine newborn care
    RoutineCare,
    /// Vital signs every 4 hours for 24 hours
    #[serde(rename = "enhanced_vitals")]
    EnhancedVitalSigns,
    /// Start empiric antibiotics
    EmpiricAntibiotics,
}

impl Recommendation {
    /// Classify a risk per 1000 births.
    #[must_use]
    pub fn classify(risk: f64) -> Self {
        if risk > EMPIRIC_ANTIBIOTICS_THRESHOLD {
            Self::EmpiricAntibiotics
        } else if risk >= ENHANCED_VITALS_THRESHOLD {
            Self::EnhancedVitalSigns
        } else {
            Self::RoutineCare
        }
    }

    #[must_use]
    pub fn from_estimate(risk: RiskEstimate) -> Self {
        Self::classify(risk.value())
    }

    /// Tier identifier used by display layers.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoutineCare => "routine_care",
            Self::EnhancedVitalSigns => "enhanced_vitals",
            Self::EmpiricAntibiotics => "empiric_antibiotics",
        }
    }

    /// 0 = lowest, 2 = highest.
    #[must_use]
    pub fn severity(&self) -> u8 {
        match self {
            Self::RoutineCare => 0,
            Self::EnhancedVitalSigns => 1,
            Self::EmpiricAntibiotics => 2,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::RoutineCare => "Routine Care",
            Self::EnhancedVitalSigns => "Enhanced Vital Signs",
            Self::EmpiricAntibiotics => "Empiric Antibiotics Recommended",
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::RoutineCare => "No culture, no antibiotics. Routine vitals.",
            Self::EnhancedVitalSigns => "Vitals every 4 hours for 24 hours.",
            Self::EmpiricAntibiotics => "Blood culture and empiric antibiotics.",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::RoutineCare => (16, 185, 129),        // Emerald (#10B981)
            Self::EnhancedVitalSigns => (251, 191, 36), // Amber (#FBBF24)
            Self::EmpiricAntibiotics => (244, 63, 94),  // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
