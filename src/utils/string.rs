//! Forgiving string-to-primitive coercion.
//!
//! Values read from markup attributes, local storage or query strings are
//! plain strings. These helpers turn them into primitives and fall back to a
//! caller-provided default instead of failing.

use tracing::debug;

/// Read a boolean out of a string.
///
/// Only the exact strings `"true"` and `"false"` are recognised. Anything
/// else, including `None`, `"TRUE"` or `"1"`, yields `default_value`.
///
/// # Examples
///
/// ```
/// # use cardkit::utils::to_boolean;
/// assert!(to_boolean(Some("true"), false));
/// assert!(!to_boolean(Some("false"), true));
/// assert!(to_boolean(Some("yes"), true));
/// ```
#[must_use]
pub fn to_boolean(value: Option<&str>, default_value: bool) -> bool {
    match value {
        Some("true") => true,
        Some("false") => false,
        _ => default_value,
    }
}

/// Read a float out of a string.
///
/// Leading whitespace is skipped and the longest numeric prefix is parsed, so
/// `"12px"` reads as `12.0`. Returns `default_value` when the value is
/// missing, empty, or does not start with a number.
///
/// # Examples
///
/// ```
/// # use cardkit::utils::to_float;
/// assert_eq!(to_float(Some("3.25"), 0.0), 3.25);
/// assert_eq!(to_float(Some("12px"), 0.0), 12.0);
/// assert_eq!(to_float(Some("abc"), 5.0), 5.0);
/// ```
#[must_use]
pub fn to_float(value: Option<&str>, default_value: f64) -> f64 {
    parse_float(value).unwrap_or_else(|| {
        debug!("{value:?} is not a number, using default {default_value}");
        default_value
    })
}

/// Read a float out of a string, without a default.
///
/// Same rules as [`to_float`]; `None` means there was no number to read.
#[must_use]
pub fn parse_float(value: Option<&str>) -> Option<f64> {
    let value = value.filter(|v| !v.is_empty())?;

    numeric_prefix(value).and_then(|prefix| prefix.parse::<f64>().ok())
}

/// Find the longest prefix of `value` that reads as a decimal number.
///
/// Accepts `[+-]?(digits[.digits?] | .digits)([eE][+-]?digits)?` and
/// `[+-]?Infinity` after leading whitespace.
fn numeric_prefix(value: &str) -> Option<&str> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if value[end..].starts_with("Infinity") {
        return Some(&value[..end + "Infinity".len()]);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&value[..end])
}

/// Number of leading ASCII digits.
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
