//! # Parse Module
//!
//! Turns raw form text into numbers.
//!
//! Browser number fields hand over whatever the user typed, so parsing is
//! deliberately lenient about what follows a number and strict about
//! whether a number is there at all:
//!
//! ```text
//! ┌──────────────┬──────────────────┬──────────────────┐
//! │  raw text    │  parse_decimal   │  parse_integer   │
//! ├──────────────┼──────────────────┼──────────────────┤
//! │  "42"        │  Some(42.0)      │  Some(42)        │
//! │  "  3.75"    │  Some(3.75)      │  Some(3)         │
//! │  "12abc"     │  Some(12.0)      │  Some(12)        │
//! │  "1e3"       │  Some(1000.0)    │  Some(1)         │
//! │  "0x1A"      │  Some(0.0)       │  Some(26)        │
//! │  ".5"        │  Some(0.5)       │  None            │
//! │  "abc" / ""  │  None            │  None            │
//! └──────────────┴──────────────────┴──────────────────┘
//! ```

const INFINITY_LITERAL: &str = "Infinity";

/// Parses the longest decimal number at the start of `text`.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored. Returns `None` when no digits can be read.
///
/// ## Example
/// ```rust
/// use tipsplit_core::parse::parse_decimal;
///
/// assert_eq!(parse_decimal("  12.50 dollars"), Some(12.5));
/// assert_eq!(parse_decimal("-3"), Some(-3.0));
/// assert_eq!(parse_decimal("abc"), None);
/// ```
pub fn parse_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut start = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        start = 1;
    }

    if s[start..].starts_with(INFINITY_LITERAL) {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_end = digit_run(bytes, start);
    let mut has_digits = int_end > start;
    let mut mantissa_end = int_end;

    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digit_run(bytes, int_end + 1);
        if frac_end > int_end + 1 {
            has_digits = true;
            mantissa_end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }

    let mut literal_end = mantissa_end;
    if matches!(bytes.get(mantissa_end), Some(b'e' | b'E')) {
        let mut exp_start = mantissa_end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digit_run(bytes, exp_start);
        if exp_end > exp_start {
            literal_end = exp_end;
        }
    }

    // Everything up to literal_end is ASCII, so the slice is on a char boundary.
    s[..literal_end].parse::<f64>().ok()
}

/// Parses the longest integer at the start of `text`.
///
/// A `0x`/`0X` prefix switches to hexadecimal. A fractional part ends the
/// number (`"3.7"` is `3`). Values beyond the `i64` range saturate.
///
/// ## Example
/// ```rust
/// use tipsplit_core::parse::parse_integer;
///
/// assert_eq!(parse_integer("4 people"), Some(4));
/// assert_eq!(parse_integer("3.7"), Some(3));
/// assert_eq!(parse_integer("-2"), Some(-2));
/// assert_eq!(parse_integer(""), None);
/// ```
pub fn parse_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }

    Some(if negative { -value } else { value })
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Parses the bill field.
///
/// Only finite, non-negative amounts are valid bills; everything else is
/// `None`, which the engine turns into a zero result.
pub fn parse_bill(text: &str) -> Option<f64> {
    parse_decimal(text).filter(|amount| amount.is_finite() && *amount >= 0.0)
}

/// Parses the custom tip field.
///
/// Never fails: unparsable or negative input is coerced to `0`.
///
/// ## Example
/// ```rust
/// use tipsplit_core::parse::parse_custom_tip;
///
/// assert_eq!(parse_custom_tip("18"), 18.0);
/// assert_eq!(parse_custom_tip("-5"), 0.0);
/// assert_eq!(parse_custom_tip(""), 0.0);
/// ```
pub fn parse_custom_tip(text: &str) -> f64 {
    match parse_decimal(text) {
        Some(percentage) if percentage >= 0.0 => percentage,
        _ => 0.0,
    }
}

/// Parses the people field.
///
/// Zero and negative counts are returned as parsed; rejecting them is the
/// engine's job so the guard lives in one place.
pub fn parse_people(text: &str) -> Option<i64> {
    parse_integer(text)
}

/// Returns the index just past the run of ASCII digits starting at `from`.
fn digit_run(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}
