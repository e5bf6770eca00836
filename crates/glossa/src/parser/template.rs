//! Template scanner using winnow.
//!
//! Splits template text into literal runs and `{identifier}` tokens. Any
//! brace that does not open a well-formed token is literal text, so
//! `{{name}}` yields `{`, a `name` token, and `}`.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::any;

use super::ast::{Message, Segment};
use super::key::identifier;

/// Scan template text into a [`Message`].
///
/// ```
/// use glossa::parser::{Segment, parse_template};
///
/// let message = parse_template("Hi {name}!");
/// assert_eq!(
///     message.segments,
///     vec![
///         Segment::Literal("Hi ".to_string()),
///         Segment::Param("name".to_string()),
///         Segment::Literal("!".to_string()),
///     ]
/// );
/// ```
pub fn parse_template(input: &str) -> Message {
    let mut remaining = input;
    message(&mut remaining).unwrap_or_else(|_| Message {
        segments: vec![Segment::Literal(input.to_string())],
    })
}

/// Parse a complete template into segments.
fn message(input: &mut &str) -> ModalResult<Message> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Message {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Param(_) => result.push(other),
        }
    }

    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((param_token, literal_char)).parse_next(input)
}

/// Parse a parameter token: `{identifier}`.
fn param_token(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', identifier, '}')
        .map(|name: &str| Segment::Param(name.to_string()))
        .parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
