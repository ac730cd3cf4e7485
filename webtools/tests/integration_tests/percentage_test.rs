// tests/integration_tests/percentage_test.rs
use webtools::{CalculationMode, ValidationError, compute, compute_from_str};

#[test]
fn test_percentage_of_scenario() -> Result<(), ValidationError> {
    let result = compute(CalculationMode::PercentageOf, 20.0, 50.0)?;
    assert_eq!(result.primary_value, 10.0);
    assert_eq!(result.secondary_value, 40.0);
    assert!(!result.primary_is_percentage);
    assert!(result.explanation.contains("20% of 50 is 10"));
    assert_eq!(result.display_value(), "10");
    assert_eq!(result.copy_text(), "10 - 20% of 50 is 10");
    Ok(())
}

#[test]
fn test_what_percentage_scenario() -> Result<(), ValidationError> {
    let result = compute(CalculationMode::WhatPercentage, 25.0, 200.0)?;
    assert_eq!(result.primary_value, 12.5);
    assert_eq!(result.secondary_value, 175.0);
    assert_eq!(result.display_value(), "12.5%");
    Ok(())
}

#[test]
fn test_percentage_change_direction() -> Result<(), ValidationError> {
    let increase = compute(CalculationMode::PercentageChange, 50.0, 75.0)?;
    assert_eq!(increase.primary_value, 50.0);
    assert!(increase.explanation.contains("increase"));

    let decrease = compute(CalculationMode::PercentageChange, 75.0, 50.0)?;
    assert!((decrease.primary_value - (-100.0 / 3.0)).abs() < 1e-9);
    assert!(decrease.explanation.contains("decrease"));
    Ok(())
}

#[test]
fn test_zero_denominators() {
    let whole = compute(CalculationMode::WhatPercentage, 1.0, 0.0);
    assert!(whole.is_err(), "whole of zero must be rejected");

    let original = compute(CalculationMode::PercentageChange, 0.0, 1.0);
    assert!(original.is_err(), "original of zero must be rejected");

    let difference = compute(CalculationMode::PercentageDifference, 3.0, -3.0);
    assert!(
        difference.is_ok_and(|result| !result.primary_value.is_finite()),
        "zero sum propagates a non-finite result"
    );
}

#[test]
fn test_large_inputs_use_exponential_in_text() -> Result<(), ValidationError> {
    let result = compute(CalculationMode::PercentageOf, 50.0, 4_000_000.0)?;
    assert_eq!(result.explanation, "50% of 4.0000e+6 is 2.0000e+6");
    Ok(())
}

#[test]
fn test_halfway_values_round_up_in_text() -> Result<(), ValidationError> {
    let result = compute(CalculationMode::PercentageOf, 100.0, 12_345.125)?;
    assert_eq!(result.explanation, "100% of 12,345.13 is 12,345.13");
    Ok(())
}

#[test]
fn test_extreme_raw_percent_uses_exponent() -> Result<(), ValidationError> {
    let result = compute(CalculationMode::PercentageOf, 1e-7, 100.0)?;
    assert!(result.formula.starts_with("Formula: (1e-7 ÷ 100) × 100 = "));
    Ok(())
}

#[test]
fn test_text_inputs() {
    assert!(compute_from_str(CalculationMode::WhatPercentage, "1", "").is_err());
    assert!(compute_from_str(CalculationMode::PercentageChange, "ten", "20").is_err());
    assert!(compute_from_str(CalculationMode::PercentageDifference, "-4", "12").is_ok());
}

#[test]
fn test_formula_hints_name_the_inputs() {
    assert!(CalculationMode::PercentageOf.formula_hint().contains("Percentage ÷ 100"));
    assert!(CalculationMode::WhatPercentage.formula_hint().contains("Part ÷ Whole"));
    assert!(CalculationMode::PercentageChange.formula_hint().ends_with("Percentage Change"));
    assert!(CalculationMode::PercentageDifference
        .formula_hint()
        .ends_with("Percentage Difference"));
}

#[test]
fn test_repeated_compute_is_identical() -> Result<(), ValidationError> {
    let inputs = [(0.5, 3.0), (-12.0, 48.0), (1e-7, 9e9)];
    for mode in CalculationMode::ALL {
        for (a, b) in inputs {
            let first = compute(mode, a, b)?;
            let second = compute(mode, a, b)?;
            assert_eq!(first.explanation, second.explanation);
            assert_eq!(first.formula, second.formula);
            assert_eq!(
                first.primary_value.to_bits(),
                second.primary_value.to_bits()
            );
        }
    }
    Ok(())
}
