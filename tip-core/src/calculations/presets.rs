//! One-tap tip presets and stepper buttons.
//!
//! Choosing a preset goes through the same path as typing the percentage by
//! hand. Steppers always clamp to the field bounds, whatever the configured
//! [`BoundPolicy`](crate::BoundPolicy).

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::Sanitizer;
use crate::models::TipConfig;

/// Preset and stepper shortcuts for the tip percent and party size.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{TipConfig, TipPresets};
///
/// let presets = TipPresets::new(TipConfig::default());
///
/// assert_eq!(presets.select_preset(2, dec!(15)), Some(dec!(18)));
/// assert_eq!(presets.select_preset(9, dec!(15)), None);
/// assert_eq!(presets.step_tip_percent(dec!(49), 3), dec!(50));
/// assert_eq!(presets.step_people(1, -1), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TipPresets {
    sanitizer: Sanitizer,
}

impl TipPresets {
    pub fn new(config: TipConfig) -> Self {
        Self {
            sanitizer: Sanitizer::new(config),
        }
    }

    /// The configured preset percentages, in display order.
    pub fn percentages(&self) -> &[Decimal] {
        &self.sanitizer.config().presets
    }

    /// Returns the sanitized percentage for the preset at `index` (0-based).
    ///
    /// `None` when there is no such preset.
    pub fn select_preset(
        &self,
        index: usize,
        previous: Decimal,
    ) -> Option<Decimal> {
        let preset = self.percentages().get(index)?;
        let percent = self
            .sanitizer
            .sanitize_tip_percent(&preset.to_string(), previous);
        debug!(index, preset = %preset, percent = %percent, "tip preset selected");
        Some(percent)
    }

    /// Moves the tip percent by `steps` increments of the configured tip step.
    pub fn step_tip_percent(
        &self,
        current: Decimal,
        steps: i32,
    ) -> Decimal {
        let config = self.sanitizer.config();
        let delta = config.tip_step.saturating_mul(Decimal::from(steps));
        current
            .saturating_add(delta)
            .clamp(Decimal::ZERO, config.max_tip_percent)
    }

    /// Moves the party size by `steps`, staying within `[1, max_people]`.
    pub fn step_people(
        &self,
        current: u32,
        steps: i32,
    ) -> u32 {
        let max_people = self.sanitizer.config().max_people;
        let stepped = i64::from(current) + i64::from(steps);
        // Clamped to [1, max_people], which always fits in a u32.
        stepped.clamp(1, i64::from(max_people)) as u32
    }
}
