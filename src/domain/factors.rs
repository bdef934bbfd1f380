//! Risk factor categories and their likelihood ratios.
//!
//! Each category is a closed enum so every selectable code has a table entry
//! by construction. Wire codes are the strings the form layer exchanges;
//! they are also the serde representation.

use serde::{Deserialize, Serialize};

use crate::EosError;

/// Preset baseline incidences (per 1000 live births) offered by the form.
pub const INCIDENCE_PRESETS: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

/// Behaviour shared by every categorical risk factor.
pub trait RiskFactor: Copy + PartialEq + Sized + 'static {
    /// Form field this category is selected through.
    const FIELD: Field;

    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Wire code (e.g. `">=38"`).
    fn code(self) -> &'static str;

    /// Human-readable label for the form.
    fn label(self) -> &'static str;

    /// Published likelihood ratio for this bucket.
    fn likelihood_ratio(self) -> f64;

    /// Parse a wire code.
    ///
    /// # Errors
    /// Returns `EosError::UnknownCode` if `code` is not one of the enumerated codes.
    fn from_code(code: &str) -> Result<Self, EosError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or_else(|| EosError::UnknownCode {
                field: Self::FIELD,
                code: code.to_string(),
            })
    }

    /// Step through `ALL` by `delta`, wrapping at both ends.
    #[must_use]
    fn cycle(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL.iter().position(|v| *v == self).unwrap_or(0) as isize;
        Self::ALL[(idx + delta).rem_euclid(len) as usize]
    }
}

/// The six inputs of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Incidence,
    GestationalAge,
    HighestTemp,
    Rom,
    GbsStatus,
    Iap,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 6] = [
        Field::Incidence,
        Field::GestationalAge,
        Field::HighestTemp,
        Field::Rom,
        Field::GbsStatus,
        Field::Iap,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Incidence => "EOS Incidence (per 1000 live births)",
            Self::GestationalAge => "Gestational Age",
            Self::HighestTemp => "Highest Maternal Antepartum Temp (°C)",
            Self::Rom => "ROM Duration (hours)",
            Self::GbsStatus => "Maternal GBS Status",
            Self::Iap => "Intrapartum Antibiotics",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Incidence => "incidence",
            Self::GestationalAge => "gestationalAge",
            Self::HighestTemp => "highestTemp",
            Self::Rom => "rom",
            Self::GbsStatus => "gbsStatus",
            Self::Iap => "iap",
        };
        f.write_str(name)
    }
}

/// Gestational age at delivery, bucketed by completed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestationalAge {
    #[serde(rename = ">=42")]
    Weeks42Plus,
    #[serde(rename = "41-41 6/7")]
    Weeks41,
    #[serde(rename = "40-40 6/7")]
    Weeks40,
    #[serde(rename = "39-39 6/7")]
    Weeks39,
    #[serde(rename = "38-38 6/7")]
    Weeks38,
    #[serde(rename = "37-37 6/7")]
    Weeks37,
    #[serde(rename = "36-36 6/7")]
    Weeks36,
    #[serde(rename = "35-35 6/7")]
    Weeks35,
    #[serde(rename = "<=34 6/7")]
    Weeks34OrLess,
}

impl RiskFactor for GestationalAge {
    const FIELD: Field = Field::GestationalAge;

    const ALL: &'static [Self] = &[
        Self::Weeks42Plus,
        Self::Weeks41,
        Self::Weeks40,
        Self::Weeks39,
        Self::Weeks38,
        Self::Weeks37,
        Self::Weeks36,
        Self::Weeks35,
        Self::Weeks34OrLess,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Weeks42Plus => ">=42",
            Self::Weeks41 => "41-41 6/7",
            Self::Weeks40 => "40-40 6/7",
            Self::Weeks39 => "39-39 6/7",
            Self::Weeks38 => "38-38 6/7",
            Self::Weeks37 => "37-37 6/7",
            Self::Weeks36 => "36-36 6/7",
            Self::Weeks35 => "35-35 6/7",
            Self::Weeks34OrLess => "<=34 6/7",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Weeks42Plus => ">= 42 weeks",
            Self::Weeks41 => "41 0/7 - 41 6/7 weeks",
            Self::Weeks40 => "40 0/7 - 40 6/7 weeks",
            Self::Weeks39 => "39 0/7 - 39 6/7 weeks",
            Self::Weeks38 => "38 0/7 - 38 6/7 weeks",
            Self::Weeks37 => "37 0/7 - 37 6/7 weeks",
            Self::Weeks36 => "36 0/7 - 36 6/7 weeks",
            Self::Weeks35 => "35 0/7 - 35 6/7 weeks",
            Self::Weeks34OrLess => "<= 34 6/7 weeks",
        }
    }

    fn likelihood_ratio(self) -> f64 {
        match self {
            Self::Weeks42Plus => 1.4,
            Self::Weeks41 => 1.1,
            Self::Weeks40 => 0.9,
            Self::Weeks39 => 0.8,
            Self::Weeks38 => 0.8,
            Self::Weeks37 => 1.0,
            Self::Weeks36 => 1.3,
            Self::Weeks35 => 1.7,
            Self::Weeks34OrLess => 2.3,
        }
    }
}

/// Highest maternal antepartum temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighestTemp {
    #[serde(rename = "<38")]
    Below38,
    #[serde(rename = ">=38")]
    AtLeast38,
}

impl RiskFactor for HighestTemp {
    const FIELD: Field = Field::HighestTemp;

    const ALL: &'static [Self] = &[Self::Below38, Self::AtLeast38];

    fn code(self) -> &'static str {
        match self {
            Self::Below38 => "<38",
            Self::AtLeast38 => ">=38",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Below38 => "< 38.0 °C",
            Self::AtLeast38 => ">= 38.0 °C",
        }
    }

    fn likelihood_ratio(self) -> f64 {
        match self {
            Self::Below38 => 0.4,
            Self::AtLeast38 => 3.7,
        }
    }
}

/// Duration of rupture of membranes before delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rom {
    #[serde(rename = "<12")]
    Under12h,
    #[serde(rename = "12-18")]
    From12To18h,
    #[serde(rename = "18-24")]
    From18To24h,
    #[serde(rename = ">24")]
    Over24h,
}

impl RiskFactor for Rom {
    const FIELD: Field = Field::Rom;

    const ALL: &'static [Self] = &[
        Self::Under12h,
        Self::From12To18h,
        Self::From18To24h,
        Self::Over24h,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Under12h => "<12",
            Self::From12To18h => "12-18",
            Self::From18To24h => "18-24",
            Self::Over24h => ">24",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Under12h => "< 12 h",
            Self::From12To18h => "12 - 17.9 h",
            Self::From18To24h => "18 - 23.9 h",
            Self::Over24h => ">= 24 h",
        }
    }

    fn likelihood_ratio(self) -> f64 {
        match self {
            Self::Under12h => 0.6,
            Self::From12To18h => 1.0,
            Self::From18To24h => 1.5,
            Self::Over24h => 2.1,
        }
    }
}

/// Maternal Group B Streptococcus colonization status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GbsStatus {
    Positive,
    Negative,
    Unknown,
}

impl GbsStatus {
    #[must_use]
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl RiskFactor for GbsStatus {
    const FIELD: Field = Field::GbsStatus;

    const ALL: &'static [Self] = &[Self::Positive, Self::Negative, Self::Unknown];

    fn code(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Unknown => "unknown",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Unknown => "Unknown",
        }
    }

    fn likelihood_ratio(self) -> f64 {
        match self {
            Self::Positive => 2.0,
            Self::Negative => 0.4,
            Self::Unknown => 1.0,
        }
    }
}

/// Intrapartum antibiotic prophylaxis given to a GBS-positive mother.
///
/// `NoIapNeeded` and `InadequateOrNone` share LR 1.0 but are distinct choices:
/// the first is the placeholder while GBS is not positive, the second is an
/// active selection for a GBS-positive mother who received no adequate dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Iap {
    NoIapNeeded,
    AdequatePenAmp,
    Cefazolin,
    ClindaVanco,
    #[serde(rename = "inadequate_or_no")]
    InadequateOrNone,
}

impl RiskFactor for Iap {
    const FIELD: Field = Field::Iap;

    const ALL: &'static [Self] = &[
        Self::NoIapNeeded,
        Self::AdequatePenAmp,
        Self::Cefazolin,
        Self::ClindaVanco,
        Self::InadequateOrNone,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::NoIapNeeded => "no_iap_needed",
            Self::AdequatePenAmp => "adequate_pen_amp",
            Self::Cefazolin => "cefazolin",
            Self::ClindaVanco => "clinda_vanco",
            Self::InadequateOrNone => "inadequate_or_no",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::NoIapNeeded => "Not applicable",
            Self::AdequatePenAmp => "Penicillin/ampicillin >= 4 h",
            Self::Cefazolin => "Cefazolin >= 4 h",
            Self::ClindaVanco => "Clindamycin/vancomycin",
            Self::InadequateOrNone => "None or < 4 h",
        }
    }

    fn likelihood_ratio(self) -> f64 {
        match self {
            Self::NoIapNeeded => 1.0,
            Self::AdequatePenAmp => 0.2,
            Self::Cefazolin => 0.4,
            Self::ClindaVanco => 0.9,
            Self::InadequateOrNone => 1.0,
        }
    }
}

/// Lenient incidence parse: anything that is not a number becomes NaN,
/// which the model treats as "no risk information".
#[must_use]
pub fn parse_incidence(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
