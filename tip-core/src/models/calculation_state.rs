use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::recompute;
use crate::models::TipConfig;

/// The three user-editable inputs, already sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInputs {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub number_of_people: u32,
}

impl TipInputs {
    /// Inputs shown when the calculator first opens or is reset.
    pub fn initial(config: &TipConfig) -> Self {
        Self {
            bill_amount: Decimal::ZERO,
            tip_percent: config.default_tip_percent,
            number_of_people: 1,
        }
    }
}

/// The derived outputs. Never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBreakdown {
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
    pub each_person_pays: Decimal,
}

impl TipBreakdown {
    /// Returns a copy rounded to cents for display.
    pub fn rounded(&self) -> Self {
        Self {
            tip_amount: round_half_up(self.tip_amount),
            total_amount: round_half_up(self.total_amount),
            each_person_pays: round_half_up(self.each_person_pays),
        }
    }
}

/// Inputs together with the outputs derived from them.
///
/// The only way to build one is from a full set of inputs, so the outputs
/// can never go stale. Edits produce a new state rather than patching fields.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{CalculationState, TipInputs};
///
/// let state = CalculationState::new(TipInputs {
///     bill_amount: dec!(50),
///     tip_percent: dec!(0),
///     number_of_people: 5,
/// });
///
/// assert_eq!(state.breakdown().each_person_pays, dec!(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationState {
    #[serde(flatten)]
    inputs: TipInputs,
    #[serde(flatten)]
    breakdown: TipBreakdown,
}

impl CalculationState {
    pub fn new(inputs: TipInputs) -> Self {
        let breakdown = recompute(
            inputs.bill_amount,
            inputs.tip_percent,
            inputs.number_of_people,
        );
        Self { inputs, breakdown }
    }

    /// The state shown when the calculator first opens or is reset.
    pub fn initial(config: &TipConfig) -> Self {
        Self::new(TipInputs::initial(config))
    }

    pub fn inputs(&self) -> &TipInputs {
        &self.inputs
    }

    pub fn breakdown(&self) -> &TipBreakdown {
        &self.breakdown
    }
}
