use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::Value;
use crate::format::FormatError;

/// A non-fatal problem found while resolving a translation.
///
/// Serializes with a `type` tag (`unknown-key`, `missing-param`,
/// `invalid-format`) so issues can be forwarded to logs or telemetry as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Issue {
    /// The key was not found, or does not point to a translation.
    UnknownKey { key: String },

    /// A template parameter had no argument and no default.
    MissingParam { key: String, param: String },

    /// An argument did not match its parameter's declared format.
    InvalidFormat {
        key: String,
        param: String,
        value: Value,
        error: FormatError,
    },
}

impl Issue {
    /// The translation key the issue was raised for.
    pub fn key(&self) -> &str {
        match self {
            Issue::UnknownKey { key }
            | Issue::MissingParam { key, .. }
            | Issue::InvalidFormat { key, .. } => key,
        }
    }

    /// The template parameter involved, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            Issue::UnknownKey { .. } => None,
            Issue::MissingParam { param, .. } | Issue::InvalidFormat { param, .. } => Some(param),
        }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Issue::UnknownKey { key } => write!(f, "unknown key '{key}'"),
            Issue::MissingParam { key, param } => {
                write!(f, "missing parameter '{param}' for '{key}'")
            }
            Issue::InvalidFormat {
                key, param, error, ..
            } => write!(f, "invalid value for parameter '{param}' of '{key}': {error}"),
        }
    }
}

/// The outcome of a translation: a display string plus any issues.
///
/// `issues` is `None` when resolution was clean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Translated {
    pub result: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Issue>>,
}

impl Translated {
    /// A result with no issues.
    pub fn clean(result: impl Into<String>) -> Self {
        Translated {
            result: result.into(),
            issues: None,
        }
    }

    /// The result for a key that does not resolve to a translation.
    pub fn unknown_key(key: &str) -> Self {
        Translated {
            result: key.to_string(),
            issues: Some(vec![Issue::UnknownKey {
                key: key.to_string(),
            }]),
        }
    }

    /// Returns true if no issues were recorded.
    pub fn is_clean(&self) -> bool {
        self.issues.is_none()
    }

    /// The recorded issues, empty when clean.
    pub fn issues(&self) -> &[Issue] {
        self.issues.as_deref().unwrap_or_default()
    }
}

impl Display for Translated {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.result)
    }
}
