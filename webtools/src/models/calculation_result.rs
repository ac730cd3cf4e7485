// src/models/calculation_result.rs
use serde::Serialize;

use crate::models::CalculationMode;
use crate::utils::format_number;

/// The outcome of one percentage calculation, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub mode: CalculationMode,
    pub primary_value: f64,
    pub primary_is_percentage: bool,
    pub explanation: String,
    pub secondary_value: f64,
    pub secondary_explanation: String,
    pub formula: String,
}

impl CalculationResult {
    /// The headline value, with a `%` suffix for percentage modes.
    #[inline]
    #[must_use]
    pub fn display_value(&self) -> String {
        let value = format_number(self.primary_value);
        if self.primary_is_percentage {
            format!("{value}%")
        } else {
            value
        }
    }

    /// Whether the secondary result is worth showing.
    #[inline]
    #[must_use]
    pub fn shows_secondary(&self) -> bool {
        self.secondary_value != 0.0 || self.mode == CalculationMode::PercentageOf
    }

    /// Text placed on the clipboard by the copy button.
    #[inline]
    #[must_use]
    pub fn copy_text(&self) -> String {
        format!("{} - {}", self.display_value(), self.explanation)
    }
}
