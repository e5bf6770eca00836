//! Identifier and dotted-key grammar.
//!
//! An identifier is an ASCII letter or underscore followed by word
//! characters, or a bare run of digits. A key joins identifiers with `.`.

use winnow::ascii::digit1;
use winnow::combinator::{alt, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::error::ParseError;

/// Parse a single identifier: `[A-Za-z_]\w*` or `\d+`.
pub(crate) fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((word, digit1)).parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

/// Check if a character can start a word identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if `input` is exactly one identifier.
pub fn is_identifier(input: &str) -> bool {
    let mut remaining = input;
    identifier.parse_next(&mut remaining).is_ok() && remaining.is_empty()
}

/// Parse a dotted key into its identifier segments.
///
/// ```
/// use glossa::parser::parse_key;
///
/// assert_eq!(parse_key("user.items.0").unwrap(), vec!["user", "items", "0"]);
/// assert!(parse_key("user..name").is_err());
/// ```
pub fn parse_key(input: &str) -> Result<Vec<&str>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut remaining = input;
    let parsed: Result<Vec<&str>, _> = separated(1.., identifier, '.').parse_next(&mut remaining);
    match parsed {
        Ok(segments) if remaining.is_empty() => Ok(segments),
        Ok(_) => Err(ParseError::at(
            input,
            remaining,
            format!(
                "unexpected character '{}' in key",
                remaining.chars().next().unwrap_or('?')
            ),
        )),
        Err(_) => Err(ParseError::at(input, remaining, "expected an identifier")),
    }
}
