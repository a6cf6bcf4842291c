use serde::{Deserialize, Serialize};

/// The three user-editable fields of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    BillAmount,
    TipPercent,
    NumberOfPeople,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[
            InputField::BillAmount,
            InputField::TipPercent,
            InputField::NumberOfPeople,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BillAmount => "bill",
            Self::TipPercent => "tip",
            Self::NumberOfPeople => "people",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bill" => Some(Self::BillAmount),
            "tip" => Some(Self::TipPercent),
            "people" => Some(Self::NumberOfPeople),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BillAmount => "Bill Amount",
            Self::TipPercent => "Tip Percent",
            Self::NumberOfPeople => "No. of People",
        }
    }
}
