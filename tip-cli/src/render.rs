//! Text and JSON rendering. This is the only place outputs are rounded.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;
use tip_core::calculations::common::format_amount;
use tip_core::{CalculationState, InputField, guide};

const LABEL_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A calculation as displayed: every amount fixed to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedCalculation {
    pub bill_amount: String,
    pub tip_percent: String,
    pub number_of_people: u32,
    pub tip_amount: String,
    pub total_amount: String,
    pub each_person_pays: String,
}

impl From<&CalculationState> for DisplayedCalculation {
    fn from(state: &CalculationState) -> Self {
        let inputs = state.inputs();
        let breakdown = state.breakdown();
        Self {
            bill_amount: format_amount(inputs.bill_amount),
            tip_percent: format_percent(inputs.tip_percent),
            number_of_people: inputs.number_of_people,
            tip_amount: format_amount(breakdown.tip_amount),
            total_amount: format_amount(breakdown.total_amount),
            each_person_pays: format_amount(breakdown.each_person_pays),
        }
    }
}

/// `18` for 18%, `12.5` for 12.5%.
pub fn format_percent(percent: Decimal) -> String {
    percent.normalize().to_string()
}

pub fn render(
    state: &CalculationState,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(state)),
        OutputFormat::Json => render_json(state),
    }
}

/// Renders the form in two sections, "Tip" and "Split".
pub fn render_text(state: &CalculationState) -> String {
    let shown = DisplayedCalculation::from(state);
    let mut out = String::new();

    let _ = writeln!(out, "Tip");
    push_row(&mut out, InputField::BillAmount.label(), &shown.bill_amount);
    push_row(
        &mut out,
        InputField::TipPercent.label(),
        &format!("{}%", shown.tip_percent),
    );
    push_row(&mut out, "Tip Amount", &shown.tip_amount);
    push_row(&mut out, "Total Amount", &shown.total_amount);
    let _ = writeln!(out, "Split");
    push_row(
        &mut out,
        InputField::NumberOfPeople.label(),
        &shown.number_of_people.to_string(),
    );
    push_row(&mut out, "Each Person Pays", &shown.each_person_pays);

    out
}

pub fn render_json(state: &CalculationState) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DisplayedCalculation::from(
        state,
    ))?)
}

/// Numbered (1-based) list of the preset percentages.
pub fn render_presets(presets: &[Decimal]) -> String {
    if presets.is_empty() {
        return "No tip presets configured.\n".to_string();
    }
    presets
        .iter()
        .enumerate()
        .map(|(i, preset)| format!("  {}. {}%\n", i + 1, format_percent(*preset)))
        .collect()
}

/// The tipping etiquette page.
pub fn render_guide() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", guide::GENERAL_NOTE);
    for guideline in guide::guidelines() {
        let _ = writeln!(out);
        match guideline.typical_percent {
            Some((low, high)) => {
                let _ = writeln!(out, "{} ({low}-{high}%)", guideline.region);
            }
            None => {
                let _ = writeln!(out, "{}", guideline.region);
            }
        }
        let _ = writeln!(out, "  {}", guideline.advice);
    }
    out
}

fn push_row(
    out: &mut String,
    label: &str,
    value: &str,
) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tip_core::TipInputs;

    use super::*;

    fn example_state() -> CalculationState {
        CalculationState::new(TipInputs {
            bill_amount: dec!(86.43),
            tip_percent: dec!(18),
            number_of_people: 4,
        })
    }

    #[test]
    fn displayed_calculation_rounds_to_cents() {
        assert_eq!(
            DisplayedCalculation::from(&example_state()),
            DisplayedCalculation {
                bill_amount: "86.43".to_string(),
                tip_percent: "18".to_string(),
                number_of_people: 4,
                tip_amount: "15.56".to_string(),
                total_amount: "101.99".to_string(),
                each_person_pays: "25.50".to_string(),
            }
        );
    }

    #[test]
    fn format_percent_drops_trailing_zeros() {
        assert_eq!(format_percent(dec!(12.50)), "12.5");
        assert_eq!(format_percent(dec!(20.0)), "20");
    }

    #[test]
    fn render_text_lays_out_both_sections() {
        let expected = "\
Tip
  Bill Amount                86.43
  Tip Percent                  18%
  Tip Amount                 15.56
  Total Amount              101.99
Split
  No. of People                  4
  Each Person Pays           25.50
";

        assert_eq!(render_text(&example_state()), expected);
    }

    #[test]
    fn render_json_uses_display_strings() {
        let json = render_json(&example_state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["each_person_pays"], "25.50");
        assert_eq!(value["number_of_people"], 4);
    }

    #[test]
    fn render_presets_numbers_from_one() {
        assert_eq!(
            render_presets(&[dec!(10), dec!(12.5)]),
            "  1. 10%\n  2. 12.5%\n"
        );
    }

    #[test]
    fn render_presets_handles_empty_list() {
        assert_eq!(render_presets(&[]), "No tip presets configured.\n");
    }

    #[test]
    fn render_guide_lists_every_region() {
        let text = render_guide();

        for guideline in guide::guidelines() {
            assert!(text.contains(guideline.region));
        }
        assert!(text.contains("United States (15-20%)"));
    }
}
