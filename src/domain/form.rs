//! Calculator form state.
//!
//! The state is a plain value; every edit goes through `next_state`, which
//! returns a new state with the GBS -> IAP rule already applied.

use serde::{Deserialize, Serialize};

use super::factors::{Field, GbsStatus, GestationalAge, HighestTemp, Iap, Rom};
use super::model::RiskInputs;

/// Incidence used by a fresh or reset form.
pub const DEFAULT_INCIDENCE: f64 = 0.5;

/// One edit to a single form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldUpdate {
    Incidence(f64),
    GestationalAge(GestationalAge),
    HighestTemp(HighestTemp),
    Rom(Rom),
    GbsStatus(GbsStatus),
    Iap(Iap),
}

impl FieldUpdate {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Incidence(_) => Field::Incidence,
            Self::GestationalAge(_) => Field::GestationalAge,
            Self::HighestTemp(_) => Field::HighestTemp,
            Self::Rom(_) => Field::Rom,
            Self::GbsStatus(_) => Field::GbsStatus,
            Self::Iap(_) => Field::Iap,
        }
    }
}

/// Current selections of the six inputs.
///
/// Invariant (for states built by `default`/`next_state`): when GBS status is
/// not positive, `iap` is `Iap::NoIapNeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub incidence: f64,
    pub gestational_age: GestationalAge,
    pub highest_temp: HighestTemp,
    pub rom: Rom,
    pub gbs_status: GbsStatus,
    pub iap: Iap,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            incidence: DEFAULT_INCIDENCE,
            gestational_age: GestationalAge::Weeks42Plus,
            highest_temp: HighestTemp::Below38,
            rom: Rom::Under12h,
            gbs_status: GbsStatus::Negative,
            iap: Iap::NoIapNeeded,
        }
    }
}

impl FormState {
    /// Apply one edit and return the resulting state.
    ///
    /// Setting GBS to anything but positive resets IAP to "no IAP needed".
    /// IAP edits are dropped while GBS is not positive.
    #[must_use]
    pub fn next_state(&self, update: FieldUpdate) -> Self {
        let mut next = *self;
        match update {
            FieldUpdate::Incidence(v) => next.incidence = v,
            FieldUpdate::GestationalAge(v) => next.gestational_age = v,
            FieldUpdate::HighestTemp(v) => next.highest_temp = v,
            FieldUpdate::Rom(v) => next.rom = v,
            FieldUpdate::GbsStatus(v) => {
                next.gbs_status = v;
                if !v.is_positive() {
                    next.iap = Iap::NoIapNeeded;
                }
            }
            FieldUpdate::Iap(v) => {
                if next.gbs_status.is_positive() {
                    next.iap = v;
                }
            }
        }
        next
    }

    /// Whether a field accepts edits in the current state.
    #[must_use]
    pub fn is_enabled(&self, field: Field) -> bool {
        match field {
            Field::Iap => self.gbs_status.is_positive(),
            _ => true,
        }
    }

    #[must_use]
    pub fn inputs(&self) -> RiskInputs {
        RiskInputs {
            incidence: self.incidence,
            gestational_age: self.gestational_age,
            highest_temp: self.highest_temp,
            rom: self.rom,
            gbs_status: self.gbs_status,
            iap: self.iap,
        }
    }
}
