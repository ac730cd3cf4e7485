// src/core/percentage.rs
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::models::{Calculation, CalculationMode, CalculationResult};
use crate::utils::{format_number, format_plain, parse_number};

impl Calculation {
    /// Runs the formula for this calculation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] carrying the mode's message if:
    /// * Either input is not a finite number
    /// * `whole` is zero for [`Calculation::WhatPercentage`]
    /// * `original` is zero for [`Calculation::PercentageChange`]
    ///
    /// A zero sum in [`Calculation::PercentageDifference`] is not rejected;
    /// the non-finite result is passed through.
    pub fn evaluate(&self) -> Result<CalculationResult, ValidationError> {
        let mode = self.mode();
        let (a, b) = self.inputs();
        if !a.is_finite() || !b.is_finite() {
            return Err(ValidationError::new(mode.validation_message()));
        }
        debug!(%mode, a, b, "evaluating percentage calculation");

        let result = match *self {
            Self::PercentageOf { percent, number } => percentage_of(percent, number),
            Self::WhatPercentage { part, whole } => {
                if whole == 0.0 {
                    return Err(ValidationError::new(mode.validation_message()));
                }
                what_percentage(part, whole)
            }
            Self::PercentageChange {
                original,
                new_value,
            } => {
                if original == 0.0 {
                    return Err(ValidationError::new(mode.validation_message()));
                }
                percentage_change(original, new_value)
            }
            Self::PercentageDifference { first, second } => percentage_difference(first, second),
        };

        if !result.primary_value.is_finite() {
            warn!(%mode, a, b, "calculation produced a non-finite result");
        }
        Ok(result)
    }
}

/// Computes a percentage calculation from two ordered inputs whose meaning
/// depends on `mode`.
///
/// # Errors
///
/// See [`Calculation::evaluate`].
#[inline]
pub fn compute(mode: CalculationMode, a: f64, b: f64) -> Result<CalculationResult, ValidationError> {
    Calculation::new(mode, a, b).evaluate()
}

/// Like [`compute`], but takes the raw text of the two input fields.
///
/// # Errors
///
/// Returns a [`ValidationError`] if either field does not parse as a finite
/// number, or for any reason listed on [`Calculation::evaluate`].
pub fn compute_from_str(
    mode: CalculationMode,
    a: &str,
    b: &str,
) -> Result<CalculationResult, ValidationError> {
    match (parse_number(a), parse_number(b)) {
        (Some(a), Some(b)) => compute(mode, a, b),
        _ => Err(ValidationError::new(mode.validation_message())),
    }
}

fn percentage_of(percent: f64, number: f64) -> CalculationResult {
    let result = (percent / 100.0) * number;
    let additional = number - result;
    let (raw_percent, number_s, result_s) =
        (format_plain(percent), format_number(number), format_number(result));

    CalculationResult {
        mode: CalculationMode::PercentageOf,
        primary_value: result,
        primary_is_percentage: false,
        explanation: format!("{raw_percent}% of {number_s} is {result_s}"),
        secondary_value: additional,
        secondary_explanation: format!(
            "{number_s} minus {result_s} = {}",
            format_number(additional)
        ),
        formula: format!("Formula: ({raw_percent} ÷ 100) × {number_s} = {result_s}"),
    }
}

fn what_percentage(part: f64, whole: f64) -> CalculationResult {
    let result = (part / whole) * 100.0;
    let additional = whole - part;
    let (part_s, whole_s, result_s) =
        (format_number(part), format_number(whole), format_number(result));

    CalculationResult {
        mode: CalculationMode::WhatPercentage,
        primary_value: result,
        primary_is_percentage: true,
        explanation: format!("{part_s} is {result_s}% of {whole_s}"),
        secondary_value: additional,
        secondary_explanation: format!(
            "Remaining: {whole_s} - {part_s} = {}",
            format_number(additional)
        ),
        formula: format!("Formula: ({part_s} ÷ {whole_s}) × 100 = {result_s}%"),
    }
}

fn percentage_change(original: f64, new_value: f64) -> CalculationResult {
    let result = ((new_value - original) / original) * 100.0;
    let change_type = if result >= 0.0 { "increase" } else { "decrease" };
    let absolute_change = (new_value - original).abs();
    let (original_s, new_s) = (format_number(original), format_number(new_value));

    CalculationResult {
        mode: CalculationMode::PercentageChange,
        primary_value: result,
        primary_is_percentage: true,
        explanation: format!(
            "From {original_s} to {new_s} is a {}% {change_type}",
            format_number(result.abs())
        ),
        secondary_value: absolute_change,
        secondary_explanation: format!("Absolute change: {}", format_number(absolute_change)),
        formula: format!(
            "Formula: [({new_s} - {original_s}) ÷ {original_s}] × 100 = {}%",
            format_number(result)
        ),
    }
}

fn percentage_difference(first: f64, second: f64) -> CalculationResult {
    let average = (first + second) / 2.0;
    let difference = (first - second).abs();
    let result = (difference / average) * 100.0;
    let (first_s, second_s, result_s) =
        (format_number(first), format_number(second), format_number(result));

    CalculationResult {
        mode: CalculationMode::PercentageDifference,
        primary_value: result,
        primary_is_percentage: true,
        explanation: format!(
            "The percentage difference between {first_s} and {second_s} is {result_s}%"
        ),
        secondary_value: difference,
        secondary_explanation: format!("Absolute difference: {}", format_number(difference)),
        formula: format!(
            "Formula: (|{first_s} - {second_s}| ÷ [({first_s} + {second_s}) ÷ 2]) × 100 = {result_s}%"
        ),
    }
}
