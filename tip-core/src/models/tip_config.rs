//! Bounds and defaults applied when turning raw form text into calculator inputs.
//!
//! A [`TipConfig`] is read once at startup (the CLI loads it from TOML) and
//! shared by the sanitizer and the preset/stepper helpers. Every field has a
//! default, so an empty config file is valid.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{BoundPolicy, TipConfig};
//!
//! let config = TipConfig {
//!     bound_policy: BoundPolicy::Reject,
//!     max_tip_percent: dec!(40),
//!     ..TipConfig::default()
//! };
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.default_tip_percent, dec!(15));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`TipConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipConfigError {
    /// The maximum tip percent must be between 0 and 100.
    #[error("maximum tip percent must be between 0 and 100, got {0}")]
    InvalidMaxTipPercent(Decimal),

    /// The default tip percent must lie within `[0, max_tip_percent]`.
    #[error("default tip percent must be between 0 and {max}, got {value}")]
    InvalidDefaultTipPercent { value: Decimal, max: Decimal },

    /// Every preset must lie within `[0, max_tip_percent]`.
    #[error("tip preset must be between 0 and {max}, got {value}")]
    InvalidPreset { value: Decimal, max: Decimal },

    #[error("maximum number of people must be at least 1")]
    InvalidMaxPeople,

    #[error("maximum bill amount must be positive, got {0}")]
    InvalidMaxBill(Decimal),

    #[error("tip step must be positive, got {0}")]
    InvalidTipStep(Decimal),
}

/// What the sanitizer does with a value that parses but falls outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundPolicy {
    /// Replace the value with the nearest bound.
    #[default]
    Clamp,
    /// Ignore the edit and keep the previous valid value.
    Reject,
}

/// Sanitization bounds, defaults and preset list for the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// How out-of-bound values are handled. Applies to all three fields.
    pub bound_policy: BoundPolicy,

    /// Tip percent used when the tip field is empty or not a number.
    pub default_tip_percent: Decimal,

    /// Upper bound for the tip percent. The lower bound is always 0.
    pub max_tip_percent: Decimal,

    /// Upper bound for the party size. The lower bound is always 1.
    pub max_people: u32,

    /// Upper bound for the bill amount.
    ///
    /// Keeps `bill * percent` comfortably inside the decimal range.
    pub max_bill: Decimal,

    /// One-tap tip percentages, in display order.
    pub presets: Vec<Decimal>,

    /// Increment applied by a single tip stepper press.
    pub tip_step: Decimal,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            bound_policy: BoundPolicy::Clamp,
            default_tip_percent: Decimal::from(15),
            max_tip_percent: Decimal::from(50),
            max_people: 100,
            max_bill: Decimal::from(1_000_000_000u64),
            presets: [10, 15, 18, 20, 25].into_iter().map(Decimal::from).collect(),
            tip_step: Decimal::ONE,
        }
    }
}

impl TipConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TipConfigError`] for the first value found outside its range.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tip_core::{TipConfig, TipConfigError};
    ///
    /// let config = TipConfig {
    ///     max_tip_percent: dec!(20),
    ///     ..TipConfig::default()
    /// };
    ///
    /// // The stock presets go up to 25%
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(TipConfigError::InvalidPreset { value: dec!(25), max: dec!(20) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), TipConfigError> {
        let hundred = Decimal::ONE_HUNDRED;

        if self.max_tip_percent < Decimal::ZERO || self.max_tip_percent > hundred {
            return Err(TipConfigError::InvalidMaxTipPercent(self.max_tip_percent));
        }
        if !self.is_valid_percent(self.default_tip_percent) {
            return Err(TipConfigError::InvalidDefaultTipPercent {
                value: self.default_tip_percent,
                max: self.max_tip_percent,
            });
        }
        if let Some(preset) = self
            .presets
            .iter()
            .find(|preset| !self.is_valid_percent(**preset))
        {
            return Err(TipConfigError::InvalidPreset {
                value: *preset,
                max: self.max_tip_percent,
            });
        }
        if self.max_people == 0 {
            return Err(TipConfigError::InvalidMaxPeople);
        }
        if self.max_bill <= Decimal::ZERO {
            return Err(TipConfigError::InvalidMaxBill(self.max_bill));
        }
        if self.tip_step <= Decimal::ZERO {
            return Err(TipConfigError::InvalidTipStep(self.tip_step));
        }
        Ok(())
    }

    fn is_valid_percent(
        &self,
        value: Decimal,
    ) -> bool {
        value >= Decimal::ZERO && value <= self.max_tip_percent
    }
}
