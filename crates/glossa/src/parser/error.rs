//! Parse error types.

use thiserror::Error;

/// An error that occurred while parsing a key or version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with the 1-based column where parsing stopped.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// The input was empty.
    #[error("unexpected empty input")]
    Empty,
}

impl ParseError {
    /// Builds a syntax error positioned at the start of `remaining` within `original`.
    pub(crate) fn at(original: &str, remaining: &str, message: impl Into<String>) -> Self {
        let consumed = original.len() - remaining.len();
        ParseError::Syntax {
            column: original[..consumed].chars().count() + 1,
            message: message.into(),
        }
    }
}
