//! Error types for value formatting.

use serde::Serialize;
use thiserror::Error;

use crate::schema::SchemaError;
use crate::types::FormatKind;

/// Why a parameter value could not be formatted.
///
/// Serialized into `invalid-format` issues with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FormatError {
    /// The argument does not have the shape the format expects.
    #[error("{0}")]
    InvalidInput(#[from] SchemaError),

    /// The locale formatter could not render a valid argument.
    #[error("{kind} formatter failed: {message}")]
    Formatter { kind: FormatKind, message: String },
}

/// A failure inside a [`LocaleFormatter`](super::LocaleFormatter) primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatterError {
    message: String,
}

impl FormatterError {
    pub fn new(message: impl Into<String>) -> Self {
        FormatterError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Attach the format kind the primitive was serving.
    pub(crate) fn for_kind(self, kind: FormatKind) -> FormatError {
        FormatError::Formatter {
            kind,
            message: self.message,
        }
    }
}
