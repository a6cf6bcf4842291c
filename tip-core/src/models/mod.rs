mod calculation_state;
mod input_field;
mod tip_config;

pub use calculation_state::{CalculationState, TipBreakdown, TipInputs};
pub use input_field::InputField;
pub use tip_config::{BoundPolicy, TipConfig, TipConfigError};
