//! Likelihood-ratio model for early-onset sepsis risk.
//!
//! Prior odds come from the baseline incidence; each risk factor multiplies
//! them by its likelihood ratio (factors are treated as conditionally
//! independent). The posterior probability is reported per 1000 births.

use serde::{Deserialize, Serialize};

use super::factors::{GbsStatus, GestationalAge, HighestTemp, Iap, RiskFactor, Rom};

/// Births per incidence unit.
const PER_BIRTHS: f64 = 1000.0;

/// The six inputs to the model.
///
/// `incidence` is a plain float so malformed values can reach the model and
/// take the zero fallback instead of being rejected upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInputs {
    /// Baseline EOS incidence per 1000 live births
    pub incidence: f64,
    pub gestational_age: GestationalAge,
    pub highest_temp: HighestTemp,
    pub rom: Rom,
    pub gbs_status: GbsStatus,
    pub iap: Iap,
}

/// Risk per 1000 births, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct RiskEstimate(f64);

impl RiskEstimate {
    /// Build an estimate from a raw per-1000 value, rounding to two decimals.
    #[must_use]
    pub fn from_per_thousand(value: f64) -> Self {
        Self((value * 100.0).round() / 100.0)
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(0.0)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for RiskEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Intermediate quantities of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub gestational_age_lr: f64,
    pub highest_temp_lr: f64,
    pub rom_lr: f64,
    pub gbs_lr: f64,
    /// IAP LR after suppression (1.0 unless GBS is positive)
    pub iap_lr: f64,
    pub combined_lr: f64,
    pub prior_odds: f64,
    pub posterior_odds: f64,
    /// Unrounded posterior probability (0.0 to 1.0)
    pub posterior_probability: f64,
    pub risk: RiskEstimate,
}

impl RiskBreakdown {
    fn empty() -> Self {
        Self {
            gestational_age_lr: 1.0,
            highest_temp_lr: 1.0,
            rom_lr: 1.0,
            gbs_lr: 1.0,
            iap_lr: 1.0,
            combined_lr: 1.0,
            prior_odds: 0.0,
            posterior_odds: 0.0,
            posterior_probability: 0.0,
            risk: RiskEstimate::zero(),
        }
    }
}

/// Whether an incidence can be turned into prior odds.
#[must_use]
pub fn is_valid_incidence(incidence: f64) -> bool {
    incidence.is_finite() && incidence > 0.0 && incidence < PER_BIRTHS
}

/// IAP only adjusts the odds for a GBS-positive mother.
#[must_use]
pub fn effective_iap_lr(gbs_status: GbsStatus, iap: Iap) -> f64 {
    if iap == Iap::NoIapNeeded || !gbs_status.is_positive() {
        1.0
    } else {
        iap.likelihood_ratio()
    }
}

/// Run the model and keep every intermediate value.
#[must_use]
pub fn compute_breakdown(inputs: &RiskInputs) -> RiskBreakdown {
    if !is_valid_incidence(inputs.incidence) {
        return RiskBreakdown::empty();
    }

    let prior_odds = inputs.incidence / (PER_BIRTHS - inputs.incidence);

    let gestational_age_lr = inputs.gestational_age.likelihood_ratio();
    let highest_temp_lr = inputs.highest_temp.likelihood_ratio();
    let rom_lr = inputs.rom.likelihood_ratio();
    let gbs_lr = inputs.gbs_status.likelihood_ratio();
    let iap_lr = effective_iap_lr(inputs.gbs_status, inputs.iap);

    let combined_lr = gestational_age_lr * highest_temp_lr * rom_lr * gbs_lr * iap_lr;
    let posterior_odds = prior_odds * combined_lr;
    let posterior_probability = posterior_odds / (1.0 + posterior_odds);

    RiskBreakdown {
        gestational_age_lr,
        highest_temp_lr,
        rom_lr,
        gbs_lr,
        iap_lr,
        combined_lr,
        prior_odds,
        posterior_odds,
        posterior_probability,
        risk: RiskEstimate::from_per_thousand(posterior_probability * PER_BIRTHS),
    }
}

/// EOS risk per 1000 births, rounded to two decimals.
///
/// Returns `0.00` when the incidence is not a usable positive number.
#[must_use]
pub fn compute_risk(inputs: &RiskInputs) -> RiskEstimate {
    compute_breakdown(inputs).risk
}
