use std::sync::Arc;

use eoscalc::adapters::PublishedModel;
use eoscalc::application::CalculatorService;
use eoscalc::domain::{
    compute_risk, FieldUpdate, GbsStatus, GestationalAge, HighestTemp, Iap, Recommendation,
    RiskFactor, RiskInputs, Rom, INCIDENCE_PRESETS,
};
use serde_json::json;

fn service() -> CalculatorService<PublishedModel, PublishedModel> {
    let model = Arc::new(PublishedModel::new());
    CalculatorService::new(model.clone(), model)
}

#[test]
fn high_risk_delivery_workflow() {
    // 1. Start from a fresh form
    let mut calc = service();
    assert_eq!(calc.assessment().recommendation, Recommendation::RoutineCare);

    // 2. Preterm, febrile mother, prolonged ROM, GBS positive with adequate penicillin
    calc.apply(FieldUpdate::GestationalAge(GestationalAge::Weeks34OrLess));
    calc.apply(FieldUpdate::HighestTemp(HighestTemp::AtLeast38));
    calc.apply(FieldUpdate::Rom(Rom::Over24h));
    calc.apply(FieldUpdate::GbsStatus(GbsStatus::Positive));
    let assessment = *calc.apply(FieldUpdate::Iap(Iap::AdequatePenAmp));

    // 3. Check the arithmetic and the tier
    assert!((assessment.breakdown.combined_lr - 2.3 * 3.7 * 2.1 * 2.0 * 0.2).abs() < 1e-12);
    assert_eq!(assessment.risk().to_string(), "3.56");
    assert_eq!(
        assessment.recommendation.label(),
        "Empiric Antibiotics Recommended"
    );

    // 4. Reset reproduces the literal baseline
    let baseline = *calc.reset();
    assert_eq!(baseline.risk().to_string(), "0.07");
    assert_eq!(baseline.recommendation, Recommendation::RoutineCare);
    assert_eq!(*calc.reset(), baseline);
}

#[test]
fn every_enumerated_combination_yields_two_decimal_risk() {
    for incidence in INCIDENCE_PRESETS {
        for gestational_age in GestationalAge::ALL {
            for highest_temp in HighestTemp::ALL {
                for rom in Rom::ALL {
                    for gbs_status in GbsStatus::ALL {
                        for iap in Iap::ALL {
                            let inputs = RiskInputs {
                                incidence,
                                gestational_age: *gestational_age,
                                highest_temp: *highest_temp,
                                rom: *rom,
                                gbs_status: *gbs_status,
                                iap: *iap,
                            };
                            let risk = compute_risk(&inputs);
                            let text = risk.to_string();
                            assert!(risk.value().is_finite() && risk.value() >= 0.0);
                            assert_eq!(text.split('.').nth(1).map(str::len), Some(2), "{text}");
                            assert!(!text.contains('e'));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn wire_codes_round_trip_through_json() {
    let calc = service();
    let assessment = calc
        .assess_codes("0.5", "<=34 6/7", ">=38", ">24", "positive", "adequate_pen_amp")
        .expect("valid codes");

    let value = serde_json::to_value(assessment).expect("serialize");
    assert_eq!(
        value["inputs"],
        json!({
            "incidence": 0.5,
            "gestationalAge": "<=34 6/7",
            "highestTemp": ">=38",
            "rom": ">24",
            "gbsStatus": "positive",
            "iap": "adequate_pen_amp",
        })
    );
    assert_eq!(value["recommendation"], json!("empiric_antibiotics"));
    assert_eq!(value["breakdown"]["risk"], json!(3.56));

    let iap: Iap = serde_json::from_value(json!("inadequate_or_no")).expect("known code");
    assert_eq!(iap, Iap::InadequateOrNone);
    assert_eq!(iap.code(), "inadequate_or_no");
}

#[test]
fn malformed_incidence_falls_back_to_zero() {
    let calc = service();
    for incidence in ["0", "-1", "NaN", "abc", ""] {
        let a = calc
            .assess_codes(incidence, ">=42", "<38", "<12", "negative", "no_iap_needed")
            .expect("valid codes");
        assert_eq!(a.risk().to_string(), "0.00", "incidence {incidence:?}");
        assert_eq!(a.recommendation, Recommendation::RoutineCare);
    }
}
