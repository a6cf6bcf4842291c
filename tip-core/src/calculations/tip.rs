//! Derived-value calculation: tip, total and per-person share.
//!
//! | Output            | Formula                          |
//! |-------------------|----------------------------------|
//! | `tip_amount`      | bill × percent ÷ 100             |
//! | `total_amount`    | bill + tip                       |
//! | `each_person_pays`| total ÷ people (0 when people=0) |
//!
//! All three outputs are computed together at full decimal precision.
//! Rounding to cents is left to [`TipBreakdown::rounded`] and the renderers.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::TipBreakdown;

/// Computes the tip, total and per-person share for sanitized inputs.
///
/// Pure: the same inputs always give the same breakdown. A party size of
/// zero yields a per-person share of zero instead of dividing by zero.
/// Arithmetic saturates at the decimal range instead of panicking.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::recompute;
///
/// let breakdown = recompute(dec!(86.43), dec!(18), 4);
///
/// assert_eq!(breakdown.tip_amount, dec!(15.5574));
/// assert_eq!(breakdown.total_amount, dec!(101.9874));
/// assert_eq!(breakdown.each_person_pays, dec!(25.49685));
///
/// let shown = breakdown.rounded();
/// assert_eq!(shown.each_person_pays, dec!(25.50));
/// ```
pub fn recompute(
    bill_amount: Decimal,
    tip_percent: Decimal,
    number_of_people: u32,
) -> TipBreakdown {
    let tip_amount = bill_amount.saturating_mul(tip_percent) / Decimal::ONE_HUNDRED;
    let total_amount = bill_amount.saturating_add(tip_amount);
    let each_person_pays = if number_of_people == 0 {
        Decimal::ZERO
    } else {
        total_amount / Decimal::from(number_of_people)
    };

    debug!(
        bill_amount = %bill_amount,
        tip_percent = %tip_percent,
        number_of_people,
        tip_amount = %tip_amount,
        total_amount = %total_amount,
        each_person_pays = %each_person_pays,
        "recomputed tip breakdown"
    );

    TipBreakdown {
        tip_amount,
        total_amount,
        each_person_pays,
    }
}
