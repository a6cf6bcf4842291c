//! Parsing and rounding helpers shared by the engine and its front-ends.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Plain decimal notation. Commas are allowed only between groups of three digits.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>[+-])?(?P<int>[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)?(?:\.(?P<frac>[0-9]+))?$")
        .expect("amount pattern is valid")
});

/// Error returned when form text cannot be read as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}'")]
    Invalid { input: String },

    /// Well-formed, but beyond what a [`Decimal`] can hold.
    #[error("amount '{input}' is out of range: {source}")]
    OutOfRange {
        input: String,
        negative: bool,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. Only the display
/// boundary rounds; the engine keeps full precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(15.5574)), dec!(15.56));
/// assert_eq!(round_half_up(dec!(25.49685)), dec!(25.50));
/// assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount for display with exactly two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(115)), "115.00");
/// assert_eq!(format_amount(dec!(101.9874)), "101.99");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Strips whitespace, a leading `$` and a trailing `%`.
fn normalize_amount_input(s: &str) -> &str {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    trimmed.trim()
}

/// Parses form text into a [`Decimal`].
///
/// Accepts `"1,234.56"`, `"$12.50"`, `"18%"` and `".5"`. Commas must separate
/// groups of three digits, so `"1,2,3"` is rejected. Zero is always returned
/// without a sign, so `"-0"` reads as `0`.
///
/// # Errors
///
/// - [`ParseAmountError::Empty`] for blank text.
/// - [`ParseAmountError::Invalid`] for text that is not a plain decimal number.
/// - [`ParseAmountError::OutOfRange`] for a well-formed number too large for
///   [`Decimal`]; `negative` tells the caller which end it overflowed.
///
/// ```
/// use tip_core::calculations::common::{ParseAmountError, parse_amount};
///
/// let huge = format!("1{}", "0".repeat(29));
/// assert!(matches!(
///     parse_amount(&huge),
///     Err(ParseAmountError::OutOfRange { negative: false, .. })
/// ));
/// assert!(matches!(parse_amount("1,2,3"), Err(ParseAmountError::Invalid { .. })));
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let invalid = || ParseAmountError::Invalid {
        input: s.to_string(),
    };
    let captures = AMOUNT_PATTERN.captures(normalized).ok_or_else(invalid)?;
    let int = captures.name("int").map(|m| m.as_str());
    let frac = captures.name("frac").map(|m| m.as_str());
    if int.is_none() && frac.is_none() {
        return Err(invalid());
    }
    let negative = captures.name("sign").is_some_and(|m| m.as_str() == "-");

    let mut canonical = String::with_capacity(normalized.len());
    if negative {
        canonical.push('-');
    }
    canonical.extend(int.unwrap_or("0").chars().filter(|c| *c != ','));
    if let Some(frac) = frac {
        canonical.push('.');
        canonical.push_str(frac);
    }

    let value: Decimal = canonical
        .parse()
        .map_err(|source| ParseAmountError::OutOfRange {
            input: s.to_string(),
            negative,
            source,
        })?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(value)
}
