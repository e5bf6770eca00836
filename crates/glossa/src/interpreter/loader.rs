//! Loading glossaries from JSON.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::LoadError;
use crate::schema::validate_glossary;
use crate::types::Glossary;

impl Glossary {
    /// Parse and validate a glossary from JSON text.
    ///
    /// ```
    /// use glossa::{Glossary, LoadError};
    ///
    /// let glossary = Glossary::from_json_str(r#"{
    ///     "$locale": "de-DE",
    ///     "$translations": { "app": { "title": "Willkommen" } }
    /// }"#).unwrap();
    /// assert_eq!(glossary.keys(), vec!["app.title"]);
    ///
    /// let err = Glossary::from_json_str(r#"{ "$locale": "de-DE" }"#).unwrap_err();
    /// assert!(matches!(err, LoadError::Schema(_)));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Glossary, LoadError> {
        let value: JsonValue =
            serde_json::from_str(json).map_err(|source| LoadError::Json { path: None, source })?;
        Glossary::from_json_value(&value)
    }

    /// Validate an already parsed JSON document.
    pub fn from_json_value(value: &JsonValue) -> Result<Glossary, LoadError> {
        let glossary = validate_glossary(value)?;
        tracing::debug!(
            locale = %glossary.locale(),
            keys = glossary.keys().len(),
            "glossary loaded"
        );
        Ok(glossary)
    }

    /// Read, parse and validate a glossary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Glossary, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: JsonValue = serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading glossary");
        Glossary::from_json_value(&value)
    }
}
