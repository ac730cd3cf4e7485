// src/models/calculation.rs
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Which of the four percentage formulas is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CalculationMode {
    #[serde(rename = "percentage-of")]
    PercentageOf,
    #[serde(rename = "percentage-what")]
    WhatPercentage,
    #[serde(rename = "percentage-change")]
    PercentageChange,
    #[serde(rename = "percentage-difference")]
    PercentageDifference,
}

impl CalculationMode {
    pub const ALL: [Self; 4] = [
        Self::PercentageOf,
        Self::WhatPercentage,
        Self::PercentageChange,
        Self::PercentageDifference,
    ];

    #[inline]
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PercentageOf => "percentage-of",
            Self::WhatPercentage => "percentage-what",
            Self::PercentageChange => "percentage-change",
            Self::PercentageDifference => "percentage-difference",
        }
    }

    /// The generic formula shown before any values are entered.
    #[inline]
    #[must_use]
    pub const fn formula_hint(self) -> &'static str {
        match self {
            Self::PercentageOf => "Formula: (Percentage ÷ 100) × Number = Result",
            Self::WhatPercentage => "Formula: (Part ÷ Whole) × 100 = Percentage",
            Self::PercentageChange => {
                "Formula: [(New Value - Original Value) ÷ Original Value] × 100 = Percentage Change"
            }
            Self::PercentageDifference => {
                "Formula: (|Value1 - Value2| ÷ [(Value1 + Value2) ÷ 2]) × 100 = Percentage Difference"
            }
        }
    }

    /// Message shown when the inputs for this mode are rejected.
    #[inline]
    #[must_use]
    pub const fn validation_message(self) -> &'static str {
        match self {
            Self::PercentageOf | Self::PercentageDifference => {
                "Please enter valid numbers in both fields"
            }
            Self::WhatPercentage => {
                "Please enter valid numbers in both fields (whole cannot be zero)"
            }
            Self::PercentageChange => {
                "Please enter valid numbers in both fields (original cannot be zero)"
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_percentage(self) -> bool {
        !matches!(self, Self::PercentageOf)
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CalculationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percentage-of" | "of" => Ok(Self::PercentageOf),
            "percentage-what" | "what" => Ok(Self::WhatPercentage),
            "percentage-change" | "change" => Ok(Self::PercentageChange),
            "percentage-difference" | "difference" | "diff" => Ok(Self::PercentageDifference),
            other => Err(ValidationError::new(format!(
                "Unknown calculation mode: {other}"
            ))),
        }
    }
}

/// A percentage calculation with its inputs named by what they mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    PercentageOf { percent: f64, number: f64 },
    WhatPercentage { part: f64, whole: f64 },
    PercentageChange { original: f64, new_value: f64 },
    PercentageDifference { first: f64, second: f64 },
}

impl Calculation {
    /// Pairs two ordered inputs with the fields `mode` expects.
    #[inline]
    #[must_use]
    pub const fn new(mode: CalculationMode, a: f64, b: f64) -> Self {
        match mode {
            CalculationMode::PercentageOf => Self::PercentageOf {
                percent: a,
                number: b,
            },
            CalculationMode::WhatPercentage => Self::WhatPercentage { part: a, whole: b },
            CalculationMode::PercentageChange => Self::PercentageChange {
                original: a,
                new_value: b,
            },
            CalculationMode::PercentageDifference => Self::PercentageDifference {
                first: a,
                second: b,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> CalculationMode {
        match self {
            Self::PercentageOf { .. } => CalculationMode::PercentageOf,
            Self::WhatPercentage { .. } => CalculationMode::WhatPercentage,
            Self::PercentageChange { .. } => CalculationMode::PercentageChange,
            Self::PercentageDifference { .. } => CalculationMode::PercentageDifference,
        }
    }

    #[inline]
    #[must_use]
    pub const fn inputs(&self) -> (f64, f64) {
        match *self {
            Self::PercentageOf { percent, number } => (percent, number),
            Self::WhatPercentage { part, whole } => (part, whole),
            Self::PercentageChange {
                original,
                new_value,
            } => (original, new_value),
            Self::PercentageDifference { first, second } => (first, second),
        }
    }
}
