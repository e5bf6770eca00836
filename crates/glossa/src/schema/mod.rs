//! Shape validation for glossary documents and template arguments.
//!
//! Validators take a loosely-typed value and return either the typed model
//! or a [`SchemaError`] naming the offending field. They never panic.

mod glossary;
pub mod input;

use serde::Serialize;
use thiserror::Error;

pub use glossary::{
    validate_glossary, validate_param_spec, validate_template, validate_translation,
};

/// Reserved field names of the glossary document.
pub mod fields {
    pub const VERSION: &str = "$version";
    pub const LOCALE: &str = "$locale";
    pub const TRANSLATIONS: &str = "$translations";
    pub const TEMPLATE: &str = "$template";
    pub const PARAMS: &str = "$params";
    pub const ALIAS: &str = "$alias";
    pub const DEFAULT: &str = "$default";
    pub const FORMAT: &str = "$format";
    pub const OPTIONS: &str = "$options";
    pub const PLURAL: &str = "$plural";
}

/// A validation failure at a field path.
///
/// The path starts at the validated root (`glossary` for documents, `value`
/// for template arguments) and names each field or list index below it, e.g.
/// `glossary.$translations.user.$params.count.$format`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{path}: {message}")]
pub struct SchemaError {
    pub path: String,
    pub message: String,
}

impl SchemaError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        SchemaError {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Extends a field path with an object field.
pub(crate) fn field_path(path: &str, name: &str) -> String {
    format!("{path}.{name}")
}

/// Extends a field path with a list index.
pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}
