//! Calculator service: keeps the displayed recommendation in step with the form.
//!
//! This service coordinates:
//! - Form state transitions (GBS -> IAP rule)
//! - Risk computation through the model port
//! - Classification through the policy port

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    parse_incidence, Field, FieldUpdate, FormState, GbsStatus, GestationalAge, HighestTemp, Iap,
    Recommendation, RiskBreakdown, RiskEstimate, RiskFactor, RiskInputs, Rom,
};
use crate::ports::{RecommendationPolicy, RiskModel};
use crate::EosError;

/// One complete evaluation of the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub inputs: RiskInputs,
    pub breakdown: RiskBreakdown,
    pub recommendation: Recommendation,
}

impl Assessment {
    #[must_use]
    pub fn risk(&self) -> RiskEstimate {
        self.breakdown.risk
    }
}

/// Service owning the current form selections and their assessment.
///
/// Every edit recomputes synchronously; nothing is cached across edits
/// beyond the latest assessment.
pub struct CalculatorService<M, P>
where
    M: RiskModel,
    P: RecommendationPolicy,
{
    model: Arc<M>,
    policy: Arc<P>,
    state: FormState,
    current: Assessment,
}

impl<M, P> CalculatorService<M, P>
where
    M: RiskModel,
    P: RecommendationPolicy,
{
    /// Create a new calculator service with the form at its defaults.
    pub fn new(model: Arc<M>, policy: Arc<P>) -> Self {
        let state = FormState::default();
        let current = evaluate_with(model.as_ref(), policy.as_ref(), &state.inputs());
        tracing::info!(
            model = model.name(),
            risk = %current.risk(),
            tier = current.recommendation.code(),
            "Calculator initialized"
        );
        Self {
            model,
            policy,
            state,
            current,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[must_use]
    pub fn assessment(&self) -> &Assessment {
        &self.current
    }

    /// Apply one edit and recompute.
    pub fn apply(&mut self, update: FieldUpdate) -> &Assessment {
        let next = self.state.next_state(update);
        if next.iap != self.state.iap && update.field() != Field::Iap {
            tracing::debug!("IAP reset to {} after GBS change", next.iap.code());
        }
        self.state = next;
        self.recompute();
        &self.current
    }

    /// Restore the documented defaults and recompute.
    pub fn reset(&mut self) -> &Assessment {
        tracing::info!("Form reset to defaults");
        self.state = FormState::default();
        self.recompute();
        &self.current
    }

    /// Evaluate arbitrary inputs without touching the form.
    #[must_use]
    pub fn evaluate(&self, inputs: &RiskInputs) -> Assessment {
        evaluate_with(self.model.as_ref(), self.policy.as_ref(), inputs)
    }

    /// Evaluate raw wire codes, as delivered by a caller outside the form.
    ///
    /// Incidence text that does not parse yields a zero risk; an unknown
    /// category code is an error.
    ///
    /// # Errors
    /// Returns `EosError::UnknownCode` for any code outside its enumerated set.
    pub fn assess_codes(
        &self,
        incidence: &str,
        gestational_age: &str,
        highest_temp: &str,
        rom: &str,
        gbs_status: &str,
        iap: &str,
    ) -> Result<Assessment, EosError> {
        let parsed = parse_codes(gestational_age, highest_temp, rom, gbs_status, iap);
        let (gestational_age, highest_temp, rom, gbs_status, iap) = match parsed {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Rejected input: {}", e);
                return Err(e);
            }
        };

        let inputs = RiskInputs {
            incidence: parse_incidence(incidence),
            gestational_age,
            highest_temp,
            rom,
            gbs_status,
            iap,
        };
        Ok(self.evaluate(&inputs))
    }

    fn recompute(&mut self) {
        self.current = self.evaluate(&self.state.inputs());
        tracing::debug!(
            risk = %self.current.risk(),
            combined_lr = self.current.breakdown.combined_lr,
            tier = self.current.recommendation.code(),
            "Recomputed EOS risk"
        );
    }
}

fn evaluate_with<M, P>(model: &M, policy: &P, inputs: &RiskInputs) -> Assessment
where
    M: RiskModel,
    P: RecommendationPolicy,
{
    let breakdown = model.compute(inputs);
    Assessment {
        inputs: *inputs,
        breakdown,
        recommendation: policy.classify(breakdown.risk),
    }
}

fn parse_codes(
    gestational_age: &str,
    highest_temp: &str,
    rom: &str,
    gbs_status: &str,
    iap: &str,
) -> Result<(GestationalAge, HighestTemp, Rom, GbsStatus, Iap), EosError> {
    Ok((
        GestationalAge::from_code(gestational_age)?,
        HighestTemp::from_code(highest_temp)?,
        Rom::from_code(rom)?,
        GbsStatus::from_code(gbs_status)?,
        Iap::from_code(iap)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PublishedModel;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn create_test_service() -> CalculatorService<PublishedModel, PublishedModel> {
        let model = Arc::new(PublishedModel::new());
        CalculatorService::new(model.clone(), model)
    }

    /// Model that counts evaluations and returns a fixed risk.
    struct CountingModel {
        calls: AtomicUsize,
        risk: f64,
    }

    impl RiskModel for CountingModel {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn compute(&self, inputs: &RiskInputs) -> RiskBreakdown {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut b = crate::domain::compute_breakdown(inputs);
            b.risk = RiskEstimate::from_per_thousand(self.risk);
            b
        }
    }

    #[test]
    fn test_initial_assessment() {
        let service = create_test_service();
        assert_eq!(service.state(), &FormState::default());
        assert_eq!(service.assessment().risk().to_string(), "0.07");
        assert_eq!(service.assessment().recommendation, Recommendation::RoutineCare);
    }

    #[test]
    fn test_apply_recomputes() {
        let mut service = create_test_service();
        service.apply(FieldUpdate::GestationalAge(GestationalAge::Weeks34OrLess));
        service.apply(FieldUpdate::HighestTemp(HighestTemp::AtLeast38));
        service.apply(FieldUpdate::Rom(Rom::Over24h));
        service.apply(FieldUpdate::GbsStatus(GbsStatus::Positive));
        let assessment = *service.apply(FieldUpdate::Iap(Iap::AdequatePenAmp));

        assert_eq!(assessment.risk().to_string(), "3.56");
        assert_eq!(assessment.recommendation, Recommendation::EmpiricAntibiotics);
        assert!(service.state().is_enabled(Field::Iap));
    }

    #[test]
    fn test_gbs_change_resets_iap_and_risk() {
        let mut service = create_test_service();
        service.apply(FieldUpdate::GbsStatus(GbsStatus::Positive));
        let with_iap = *service.apply(FieldUpdate::Iap(Iap::AdequatePenAmp));
        assert_eq!(with_iap.inputs.iap, Iap::AdequatePenAmp);

        let after = *service.apply(FieldUpdate::GbsStatus(GbsStatus::Unknown));
        assert_eq!(after.inputs.iap, Iap::NoIapNeeded);
        assert!((after.breakdown.iap_lr - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_matches_fresh_service() {
        let mut service = create_test_service();
        service.apply(FieldUpdate::Incidence(0.2));
        service.apply(FieldUpdate::Rom(Rom::From18To24h));
        let reset = *service.reset();

        let fresh = create_test_service();
        assert_eq!(&reset, fresh.assessment());
        assert_eq!(service.state(), &FormState::default());
    }

    #[test]
    fn test_malformed_incidence_yields_zero() {
        let mut service = create_test_service();
        let a = *service.apply(FieldUpdate::Incidence(f64::NAN));
        assert_eq!(a.risk().to_string(), "0.00");
        assert_eq!(a.recommendation, Recommendation::RoutineCare);
    }

    #[test]
    fn test_assess_codes() {
        let service = create_test_service();
        let a = service
            .assess_codes("0.5", "<=34 6/7", ">=38", ">24", "positive", "adequate_pen_amp")
            .expect("valid codes");
        assert_eq!(a.risk().to_string(), "3.56");

        let zero = service
            .assess_codes("n/a", ">=42", "<38", "<12", "negative", "no_iap_needed")
            .expect("valid codes");
        assert_eq!(zero.risk().to_string(), "0.00");
    }

    #[test]
    fn test_assess_codes_rejects_unknown() {
        let service = create_test_service();
        let err = service
            .assess_codes("0.5", ">=42", "<38", "<12", "maybe", "no_iap_needed")
            .unwrap_err();
        assert!(matches!(
            err,
            EosError::UnknownCode { field: Field::GbsStatus, .. }
        ));
    }

    #[test]
    fn test_every_edit_goes_through_ports() {
        let model = Arc::new(CountingModel {
            calls: AtomicUsize::new(0),
            risk: 0.9,
        });
        let policy = Arc::new(PublishedModel::new());
        let mut service = CalculatorService::new(model.clone(), policy);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);

        service.apply(FieldUpdate::Rom(Rom::From12To18h));
        service.reset();
        assert_eq!(model.calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            service.assessment().recommendation,
            Recommendation::EnhancedVitalSigns
        );
    }
}
