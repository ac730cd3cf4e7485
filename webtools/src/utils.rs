// src/utils.rs
//! Number and text formatting shared by the percentage engine and the meta
//! tag generator.

/// Formats a number for display.
///
/// The magnitude picks the notation:
/// * `0` is always `"0"`
/// * below `0.0001` uses exponential notation with four fractional digits
/// * below `1` uses up to six decimals with trailing zeros removed
/// * below `10000` is grouped with `,` and keeps up to four decimals
/// * from `1000000` upwards uses exponential notation again
/// * everything in between is grouped with `,` and keeps up to two decimals
///
/// Non-finite values are rendered as `Infinity`, `-Infinity` and `NaN`.
#[must_use]
pub fn format_number(num: f64) -> String {
    if let Some(token) = non_finite_token(num) {
        return token.to_owned();
    }
    if num == 0.0 {
        return String::from("0");
    }

    let magnitude = num.abs();
    if magnitude < 0.0001 {
        return to_exponential(num, 4);
    }
    if magnitude < 1.0 {
        return format_fraction(num);
    }
    if magnitude < 10_000.0 {
        return format_grouped(num, 4);
    }
    if magnitude >= 1_000_000.0 {
        return to_exponential(num, 4);
    }

    format_grouped(num, 2)
}

/// Renders a raw input number in its plain shortest form (`20`, `12.5`).
///
/// Magnitudes from `1e21` upwards or below `1e-6` switch to exponential
/// notation (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_plain(num: f64) -> String {
    if let Some(token) = non_finite_token(num) {
        return token.to_owned();
    }
    if num == 0.0 {
        return String::from("0");
    }
    let magnitude = num.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return with_exponent_sign(format!("{num:e}"));
    }
    num.to_string()
}

/// Escapes the five HTML-significant characters `& < > " '`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Parses a user-supplied numeric field. Surrounding whitespace is ignored;
/// anything that is not a finite number yields `None`.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

const fn non_finite_token(num: f64) -> Option<&'static str> {
    if num.is_nan() {
        Some("NaN")
    } else if num.is_infinite() {
        if num.is_sign_positive() {
            Some("Infinity")
        } else {
            Some("-Infinity")
        }
    } else {
        None
    }
}

/// Enough fractional digits to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Exact decimal digits of `magnitude` and how many of them precede the
/// decimal point.
fn exact_digits(magnitude: f64) -> (Vec<u8>, usize) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits = Vec::with_capacity(integer.len() + fraction.len());
    digits.extend_from_slice(integer.as_bytes());
    digits.extend_from_slice(fraction.as_bytes());
    (digits, integer.len())
}

/// Keeps the first `keep` digits, rounding half away from zero. Returns
/// `true` when the carry added a leading digit.
fn round_digits(digits: &mut Vec<u8>, keep: usize) -> bool {
    let round_up = digits.get(keep).is_some_and(|digit| *digit >= b'5');
    digits.resize(keep, b'0');
    if !round_up {
        return false;
    }
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

/// Unsigned fixed-point rendering of `magnitude` as integer and fraction
/// digit strings.
fn to_fixed(magnitude: f64, fraction_digits: usize) -> (String, String) {
    let (mut digits, mut point) = exact_digits(magnitude);
    if round_digits(&mut digits, point + fraction_digits) {
        point += 1;
    }
    let fraction = digits.split_off(point);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

fn sign(num: f64) -> &'static str {
    if num < 0.0 { "-" } else { "" }
}

/// Exponential notation with an explicit exponent sign, e.g. `1.2346e+6`.
fn to_exponential(num: f64, fraction_digits: usize) -> String {
    let (digits, point) = exact_digits(num.abs());
    let first = digits.iter().position(|digit| *digit != b'0').unwrap_or(0);
    let mut exponent = point as isize - first as isize - 1;

    let mut significant = digits[first..].to_vec();
    if round_digits(&mut significant, fraction_digits + 1) {
        exponent += 1;
        significant.truncate(fraction_digits + 1);
    }
    let (lead, rest) = significant.split_at(1);

    let mut out = String::from(sign(num));
    out.push_str(&String::from_utf8_lossy(lead));
    if !rest.is_empty() {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(rest));
    }
    with_exponent_sign(format!("{out}e{exponent}"))
}

fn with_exponent_sign(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn format_fraction(num: f64) -> String {
    let (integer, fraction) = to_fixed(num.abs(), 6);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}{integer}", sign(num))
    } else {
        format!("{}{integer}.{fraction}", sign(num))
    }
}

fn format_grouped(num: f64, max_fraction_digits: usize) -> String {
    let (integer, fraction) = to_fixed(num.abs(), max_fraction_digits);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(integer.len() + integer.len() / 3 + fraction.len() + 2);
    out.push_str(sign(num));
    out.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len.saturating_add(len / 3));
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
