//! CSS length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

use wombat_common::warning::warn_once;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Read the leading number of a length string as CSS pixels.
///
/// Follows `parseFloat`: leading whitespace is skipped, the longest numeric
/// prefix (sign, digits, fraction, exponent) is taken and anything after it
/// is ignored. Input without a numeric prefix (`auto`, `normal`, `""`) reads
/// as `0.0`.
///
/// NOTE: Units other than `px` are not converted. `1.5em` reads as `1.5` and
/// a warning is emitted once.
#[must_use]
pub fn parse_px(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        return 0.0;
    }

    let (number, unit) = trimmed.split_at(len);
    let Ok(value) = number.parse::<f64>() else {
        return 0.0;
    };

    let unit = unit.trim_end();
    if !unit.is_empty() && !unit.eq_ignore_ascii_case("px") {
        let _ = warn_once("CSS", &format!("length '{}' read as {value}px", input.trim()));
    }
    value
}

/// Serialize a pixel value the way a declaration block stores it.
///
/// Negative zero is written as `0px`, and so are `NaN` and the infinities,
/// which no declaration can hold.
#[must_use]
pub fn format_px(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0px".to_string();
    }
    format!("{value}px")
}

/// Length of the `parseFloat`-style numeric prefix of `s`, in bytes.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// A value that is either the keyword `auto` or a pixel length. Used for
/// `width`, `height` and the box offsets `top`/`left`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutoLength {
    /// The keyword `auto`; resolved by layout.
    Auto,
    /// A length in CSS pixels.
    Px(f64),
}

impl AutoLength {
    /// The pixel value, or `fallback` when `auto`.
    #[must_use]
    pub const fn px_or(&self, fallback: f64) -> f64 {
        match self {
            Self::Auto => fallback,
            Self::Px(px) => *px,
        }
    }
}

/// Parse `auto` or a length. Anything else (empty, unknown keyword) is `auto`.
#[must_use]
pub fn parse_auto_length(input: &str) -> AutoLength {
    let trimmed = input.trim();
    if numeric_prefix_len(trimmed) == 0 {
        return AutoLength::Auto;
    }
    AutoLength::Px(parse_px(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_plain() {
        assert_eq!(parse_px("10px"), 10.0);
        assert_eq!(parse_px("  12.5px"), 12.5);
        assert_eq!(parse_px("-3px"), -3.0);
        assert_eq!(parse_px("0"), 0.0);
    }

    #[test]
    fn test_parse_px_unparsable_is_zero() {
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("px"), 0.0);
        assert_eq!(parse_px("-"), 0.0);
        assert_eq!(parse_px("."), 0.0);
    }

    #[test]
    fn test_parse_px_fraction_and_exponent() {
        assert_eq!(parse_px(".5px"), 0.5);
        assert_eq!(parse_px("1.px"), 1.0);
        assert_eq!(parse_px("1e2px"), 100.0);
        assert_eq!(parse_px("1e+1"), 10.0);
        // "e" without digits is not part of the number
        assert_eq!(parse_px("4em"), 4.0);
    }

    #[test]
    fn test_parse_px_ignores_other_units() {
        assert_eq!(parse_px("50%"), 50.0);
        assert_eq!(parse_px("2rem"), 2.0);
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(130.0), "130px");
        assert_eq!(format_px(12.5), "12.5px");
        assert_eq!(format_px(-0.0), "0px");
        assert_eq!(format_px(-4.0), "-4px");
    }

    #[test]
    fn test_format_px_non_finite_is_zero() {
        assert_eq!(format_px(f64::NAN), "0px");
        assert_eq!(format_px(f64::INFINITY), "0px");
        assert_eq!(format_px(f64::NEG_INFINITY), "0px");
        assert_eq!(parse_px(&format_px(f64::NAN)), 0.0);
    }

    #[test]
    fn test_parse_auto_length() {
        assert_eq!(parse_auto_length("auto"), AutoLength::Auto);
        assert_eq!(parse_auto_length(""), AutoLength::Auto);
        assert_eq!(parse_auto_length("30px"), AutoLength::Px(30.0));
        assert_eq!(parse_auto_length("0"), AutoLength::Px(0.0));
        assert_eq!(AutoLength::Auto.px_or(7.0), 7.0);
    }
}
