//! Session state for the calculator front-end.
//!
//! The session owns the one [`CalculationState`] on screen. Every interaction
//! sanitizes, recomputes and replaces that state as a whole.

use rust_decimal::Decimal;
use tip_core::{CalculationState, InputField, Sanitizer, TipConfig, TipInputs, TipPresets};
use tracing::{debug, info};

/// The calculator form as the user sees it.
#[derive(Debug, Clone)]
pub struct TipSession {
    sanitizer: Sanitizer,
    presets: TipPresets,
    state: CalculationState,
}

impl TipSession {
    /// Opens a session with the initial state for `config`.
    pub fn new(config: TipConfig) -> Self {
        let state = CalculationState::initial(&config);
        Self {
            presets: TipPresets::new(config.clone()),
            sanitizer: Sanitizer::new(config),
            state,
        }
    }

    pub fn state(&self) -> &CalculationState {
        &self.state
    }

    pub fn config(&self) -> &TipConfig {
        self.sanitizer.config()
    }

    pub fn preset_percentages(&self) -> &[Decimal] {
        self.presets.percentages()
    }

    /// Applies raw text typed into `field`.
    pub fn edit(
        &mut self,
        field: InputField,
        raw: &str,
    ) -> &CalculationState {
        debug!(field = field.as_str(), raw, "field edited");
        let inputs = self.sanitizer.sanitize(field, raw, self.state.inputs());
        self.replace(inputs)
    }

    /// Applies the preset at `index` (0-based). `None` leaves the state alone.
    pub fn apply_preset(
        &mut self,
        index: usize,
    ) -> Option<&CalculationState> {
        let current = self.state.inputs();
        let tip_percent = self.presets.select_preset(index, current.tip_percent)?;
        let inputs = TipInputs {
            tip_percent,
            ..*current
        };
        Some(self.replace(inputs))
    }

    /// Presses the tip stepper `steps` times (negative steps go down).
    pub fn step_tip_percent(
        &mut self,
        steps: i32,
    ) -> &CalculationState {
        let current = self.state.inputs();
        let inputs = TipInputs {
            tip_percent: self.presets.step_tip_percent(current.tip_percent, steps),
            ..*current
        };
        self.replace(inputs)
    }

    /// Presses the party-size stepper `steps` times (negative steps go down).
    pub fn step_people(
        &mut self,
        steps: i32,
    ) -> &CalculationState {
        let current = self.state.inputs();
        let inputs = TipInputs {
            number_of_people: self.presets.step_people(current.number_of_people, steps),
            ..*current
        };
        self.replace(inputs)
    }

    /// Clears the form back to its initial state.
    pub fn reset(&mut self) -> &CalculationState {
        info!("calculator reset");
        self.state = CalculationState::initial(self.sanitizer.config());
        &self.state
    }

    fn replace(
        &mut self,
        inputs: TipInputs,
    ) -> &CalculationState {
        self.state = CalculationState::new(inputs);
        &self.state
    }
}
