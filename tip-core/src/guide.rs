//! Tipping etiquette shown alongside the calculator.
//!
//! Static content only; nothing here feeds the calculation.

use rust_decimal::Decimal;
use serde::Serialize;

/// Shown above the regional notes.
pub const GENERAL_NOTE: &str = "Tips are customarily worked out on the post-tax total, \
though tipping on the pre-tax amount is perfectly acceptable. Let the quality of \
the service decide.";

/// Customary tipping for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionGuideline {
    pub region: &'static str,
    /// Customary percentage range, when one exists.
    pub typical_percent: Option<(u8, u8)>,
    pub advice: &'static str,
}

impl RegionGuideline {
    /// Returns `true` if `percent` falls inside the customary range.
    ///
    /// Regions without a customary range never match.
    pub fn is_customary(
        &self,
        percent: Decimal,
    ) -> bool {
        self.typical_percent.is_some_and(|(low, high)| {
            percent >= Decimal::from(low) && percent <= Decimal::from(high)
        })
    }
}

const GUIDELINES: &[RegionGuideline] = &[
    RegionGuideline {
        region: "United States",
        typical_percent: Some((15, 20)),
        advice: "Most tips fall between 15% and 20%; going above 20% signals excellent service.",
    },
    RegionGuideline {
        region: "United Kingdom",
        typical_percent: Some((10, 15)),
        advice: "Add 10% to 15% when the bill does not already include a service charge.",
    },
    RegionGuideline {
        region: "Australia",
        typical_percent: None,
        advice: "Restaurants and taxis do not expect a tip, but rounding up for good service is welcome.",
    },
];

/// All regional guidelines, in display order.
pub fn guidelines() -> &'static [RegionGuideline] {
    GUIDELINES
}

/// Looks up a region by name, ignoring ASCII case.
pub fn find(region: &str) -> Option<&'static RegionGuideline> {
    let region = region.trim();
    GUIDELINES
        .iter()
        .find(|guideline| guideline.region.eq_ignore_ascii_case(region))
}
