//! Input sanitization: raw form text in, bounded field value out.
//!
//! # Field rules
//!
//! | Field     | Parsed as          | Bounds                  | Unparseable text      |
//! |-----------|--------------------|-------------------------|-----------------------|
//! | bill      | decimal            | `[0, max_bill]`         | 0                     |
//! | tip       | decimal            | `[0, max_tip_percent]`  | `default_tip_percent` |
//! | people    | decimal, truncated | `[1, max_people]`       | 1                     |
//!
//! Parsed values outside the bounds are clamped or dropped according to the
//! configured [`BoundPolicy`]. Numbers too large for a decimal count as
//! out of bounds at the matching end, never as unparseable. The sanitizer never fails and never triggers a
//! recomputation by itself.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::calculations::common::{ParseAmountError, parse_amount};
use crate::models::{BoundPolicy, InputField, TipConfig, TipInputs};

const MIN_PEOPLE: u32 = 1;

/// Turns raw form text into valid calculator inputs.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{InputField, Sanitizer, TipConfig, TipInputs};
///
/// let sanitizer = Sanitizer::new(TipConfig::default());
/// let previous = TipInputs::initial(sanitizer.config());
///
/// let inputs = sanitizer.sanitize(InputField::BillAmount, "abc", &previous);
/// assert_eq!(inputs.bill_amount, dec!(0));
///
/// let inputs = sanitizer.sanitize(InputField::NumberOfPeople, "-3", &inputs);
/// assert_eq!(inputs.number_of_people, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer {
    config: TipConfig,
}

impl Sanitizer {
    pub fn new(config: TipConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    /// Sanitizes `raw` for `field` and returns `previous` with that field replaced.
    ///
    /// The other two inputs are copied through untouched.
    pub fn sanitize(
        &self,
        field: InputField,
        raw: &str,
        previous: &TipInputs,
    ) -> TipInputs {
        let mut inputs = *previous;
        match field {
            InputField::BillAmount => {
                inputs.bill_amount = self.sanitize_bill(raw, previous.bill_amount);
            }
            InputField::TipPercent => {
                inputs.tip_percent = self.sanitize_tip_percent(raw, previous.tip_percent);
            }
            InputField::NumberOfPeople => {
                inputs.number_of_people = self.sanitize_people(raw, previous.number_of_people);
            }
        }
        inputs
    }

    /// Sanitizes the bill amount. Unparseable text gives 0.
    pub fn sanitize_bill(
        &self,
        raw: &str,
        previous: Decimal,
    ) -> Decimal {
        match self.parse_field(InputField::BillAmount, raw) {
            Some(value) => self.bounded(
                InputField::BillAmount,
                value,
                Decimal::ZERO,
                self.config.max_bill,
                previous,
            ),
            None => Decimal::ZERO,
        }
    }

    /// Sanitizes the tip percent. Unparseable text gives the configured default.
    pub fn sanitize_tip_percent(
        &self,
        raw: &str,
        previous: Decimal,
    ) -> Decimal {
        match self.parse_field(InputField::TipPercent, raw) {
            Some(value) => self.bounded(
                InputField::TipPercent,
                value,
                Decimal::ZERO,
                self.config.max_tip_percent,
                previous,
            ),
            None => self.config.default_tip_percent,
        }
    }

    /// Sanitizes the party size. Fractions are truncated; unparseable text gives 1.
    pub fn sanitize_people(
        &self,
        raw: &str,
        previous: u32,
    ) -> u32 {
        let Some(value) = self.parse_field(InputField::NumberOfPeople, raw) else {
            return MIN_PEOPLE;
        };
        let people = self.bounded(
            InputField::NumberOfPeople,
            value.trunc(),
            Decimal::from(MIN_PEOPLE),
            Decimal::from(self.config.max_people),
            Decimal::from(previous),
        );
        // Bounded to [1, max_people] and integral, so the conversion cannot miss.
        people.to_u32().unwrap_or(MIN_PEOPLE)
    }

    fn parse_field(
        &self,
        field: InputField,
        raw: &str,
    ) -> Option<Decimal> {
        match parse_amount(raw) {
            Ok(value) => Some(value),
            // Too large to represent, but still a number: let the bound policy decide.
            Err(ParseAmountError::OutOfRange { negative, .. }) => {
                debug!(field = field.as_str(), negative, "input beyond decimal range; saturating");
                Some(if negative { Decimal::MIN } else { Decimal::MAX })
            }
            Err(ParseAmountError::Empty) => {
                debug!(field = field.as_str(), "empty input; using field default");
                None
            }
            Err(error) => {
                warn!(field = field.as_str(), %error, "unparseable input; using field default");
                None
            }
        }
    }

    fn bounded(
        &self,
        field: InputField,
        value: Decimal,
        min: Decimal,
        max: Decimal,
        previous: Decimal,
    ) -> Decimal {
        if value >= min && value <= max {
            return value;
        }

        match self.config.bound_policy {
            BoundPolicy::Clamp => {
                let clamped = value.clamp(min, max);
                warn!(
                    field = field.as_str(),
                    value = %value,
                    clamped = %clamped,
                    "input out of bounds; clamped"
                );
                clamped
            }
            BoundPolicy::Reject => {
                // The caller's previous value is trusted only as far as the bounds.
                let kept = previous.clamp(min, max);
                warn!(
                    field = field.as_str(),
                    value = %value,
                    kept = %kept,
                    "input out of bounds; edit rejected"
                );
                kept
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn clamp_sanitizer() -> Sanitizer {
        Sanitizer::new(TipConfig::default())
    }

    fn reject_sanitizer() -> Sanitizer {
        Sanitizer::new(TipConfig {
            bound_policy: BoundPolicy::Reject,
            ..TipConfig::default()
        })
    }

    // =========================================================================
    // bill
    // =========================================================================

    #[test]
    fn bill_accepts_valid_amount() {
        assert_eq!(clamp_sanitizer().sanitize_bill("86.43", dec!(0)), dec!(86.43));
    }

    #[test]
    fn bill_invalid_text_defaults_to_zero() {
        assert_eq!(clamp_sanitizer().sanitize_bill("abc", dec!(42)), dec!(0));
        assert_eq!(reject_sanitizer().sanitize_bill("abc", dec!(42)), dec!(0));
    }

    #[test]
    fn bill_empty_defaults_to_zero() {
        assert_eq!(clamp_sanitizer().sanitize_bill("", dec!(42)), dec!(0));
    }

    #[test]
    fn bill_negative_is_clamped_to_zero() {
        assert_eq!(clamp_sanitizer().sanitize_bill("-12", dec!(42)), dec!(0));
    }

    #[test]
    fn bill_negative_is_rejected_under_reject_policy() {
        assert_eq!(reject_sanitizer().sanitize_bill("-12", dec!(42)), dec!(42));
    }

    #[test]
    fn bill_above_max_is_clamped() {
        let result = clamp_sanitizer().sanitize_bill("5,000,000,000", dec!(0));

        assert_eq!(result, dec!(1000000000));
    }

    // =========================================================================
    // tip percent
    // =========================================================================

    #[test]
    fn tip_accepts_value_within_bounds() {
        assert_eq!(clamp_sanitizer().sanitize_tip_percent("18", dec!(15)), dec!(18));
        assert_eq!(clamp_sanitizer().sanitize_tip_percent("50", dec!(15)), dec!(50));
        assert_eq!(clamp_sanitizer().sanitize_tip_percent("0", dec!(15)), dec!(0));
    }

    #[test]
    fn tip_invalid_text_uses_configured_default() {
        assert_eq!(clamp_sanitizer().sanitize_tip_percent("lots", dec!(20)), dec!(15));
    }

    #[test]
    fn tip_above_max_is_clamped() {
        assert_eq!(clamp_sanitizer().sanitize_tip_percent("75", dec!(20)), dec!(50));
    }

    #[test]
    fn tip_above_max_is_rejected_under_reject_policy() {
        assert_eq!(reject_sanitizer().sanitize_tip_percent("75", dec!(20)), dec!(20));
    }

    #[test]
    fn tip_negative_is_clamped_to_zero() {
        assert_eq!(clamp_sanitizer().sanitize_tip_percent("-5", dec!(20)), dec!(0));
    }

    // =========================================================================
    // people
    // =========================================================================

    #[test]
    fn people_accepts_whole_number() {
        assert_eq!(clamp_sanitizer().sanitize_people("4", 1), 4);
    }

    #[test]
    fn people_truncates_fractions() {
        assert_eq!(clamp_sanitizer().sanitize_people("2.9", 1), 2);
    }

    #[test]
    fn people_zero_and_negative_clamp_to_one() {
        assert_eq!(clamp_sanitizer().sanitize_people("0", 3), 1);
        assert_eq!(clamp_sanitizer().sanitize_people("-3", 3), 1);
        assert_eq!(clamp_sanitizer().sanitize_people("0.5", 3), 1);
    }

    #[test]
    fn people_zero_is_rejected_under_reject_policy() {
        assert_eq!(reject_sanitizer().sanitize_people("0", 3), 3);
    }

    #[test]
    fn people_reject_never_returns_invalid_previous() {
        assert_eq!(reject_sanitizer().sanitize_people("0", 0), 1);
    }

    #[test]
    fn people_invalid_text_defaults_to_one() {
        assert_eq!(clamp_sanitizer().sanitize_people("a few", 6), 1);
    }

    #[test]
    fn people_above_max_is_clamped() {
        assert_eq!(clamp_sanitizer().sanitize_people("1000", 2), 100);
    }

    // =========================================================================
    // numbers beyond the decimal range
    // =========================================================================

    fn digits(count: usize) -> String {
        format!("1{}", "0".repeat(count - 1))
    }

    #[test]
    fn oversized_input_matches_large_input_under_clamp() {
        let sanitizer = clamp_sanitizer();
        let large = digits(28);
        let oversized = digits(30);

        assert_eq!(sanitizer.sanitize_people(&oversized, 3), 100);
        assert_eq!(
            sanitizer.sanitize_people(&oversized, 3),
            sanitizer.sanitize_people(&large, 3)
        );
        assert_eq!(sanitizer.sanitize_bill(&oversized, dec!(5)), dec!(1000000000));
        assert_eq!(
            sanitizer.sanitize_bill(&oversized, dec!(5)),
            sanitizer.sanitize_bill(&large, dec!(5))
        );
        assert_eq!(sanitizer.sanitize_tip_percent(&oversized, dec!(20)), dec!(50));
        assert_eq!(
            sanitizer.sanitize_tip_percent(&oversized, dec!(20)),
            sanitizer.sanitize_tip_percent(&large, dec!(20))
        );
    }

    #[test]
    fn oversized_input_matches_large_input_under_reject() {
        let sanitizer = reject_sanitizer();
        let large = digits(28);
        let oversized = digits(30);

        assert_eq!(sanitizer.sanitize_people(&oversized, 3), 3);
        assert_eq!(
            sanitizer.sanitize_people(&oversized, 3),
            sanitizer.sanitize_people(&large, 3)
        );
        assert_eq!(sanitizer.sanitize_bill(&oversized, dec!(5)), dec!(5));
        assert_eq!(
            sanitizer.sanitize_bill(&oversized, dec!(5)),
            sanitizer.sanitize_bill(&large, dec!(5))
        );
        assert_eq!(sanitizer.sanitize_tip_percent(&oversized, dec!(20)), dec!(20));
        assert_eq!(
            sanitizer.sanitize_tip_percent(&oversized, dec!(20)),
            sanitizer.sanitize_tip_percent(&large, dec!(20))
        );
    }

    #[test]
    fn oversized_negative_input_clamps_to_floor() {
        let oversized = format!("-{}", digits(30));

        assert_eq!(clamp_sanitizer().sanitize_people(&oversized, 3), 1);
        assert_eq!(clamp_sanitizer().sanitize_bill(&oversized, dec!(5)), dec!(0));
        assert_eq!(clamp_sanitizer().sanitize_tip_percent(&oversized, dec!(20)), dec!(0));
    }

    #[test]
    fn misplaced_commas_fall_back_to_default() {
        assert_eq!(clamp_sanitizer().sanitize_bill("1,2,3", dec!(9)), dec!(0));
    }

    // =========================================================================
    // sanitize
    // =========================================================================

    #[test]
    fn sanitize_replaces_only_the_named_field() {
        let previous = TipInputs {
            bill_amount: dec!(20),
            tip_percent: dec!(10),
            number_of_people: 2,
        };

        let result = clamp_sanitizer().sanitize(InputField::TipPercent, "20", &previous);

        assert_eq!(
            result,
            TipInputs {
                bill_amount: dec!(20),
                tip_percent: dec!(20),
                number_of_people: 2,
            }
        );
    }
}
