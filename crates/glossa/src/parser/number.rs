//! Numeric string coercion following JavaScript's `Number(string)`.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::one_of;

/// Recognize a decimal literal: sign, digits, optional fraction and exponent.
fn decimal_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .parse_next(input)
}

/// Parse an unsigned integer literal in the given radix, saturating into `f64`.
fn radix_literal(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Coerce a string to a number the way JavaScript's `Number()` does.
///
/// Surrounding whitespace is ignored and the empty string is zero. Returns
/// `None` where JavaScript would produce `NaN`.
///
/// ```
/// use glossa::parser::parse_js_number;
///
/// assert_eq!(parse_js_number(" 12.5 "), Some(12.5));
/// assert_eq!(parse_js_number(""), Some(0.0));
/// assert_eq!(parse_js_number("0x1F"), Some(31.0));
/// assert_eq!(parse_js_number("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_js_number("12px"), None);
/// ```
pub fn parse_js_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return radix_literal(digits, radix);
        }
    }
    let mut remaining = trimmed;
    let literal = decimal_literal.parse_next(&mut remaining).ok()?;
    if !remaining.is_empty() {
        return None;
    }
    literal.parse::<f64>().ok()
}
