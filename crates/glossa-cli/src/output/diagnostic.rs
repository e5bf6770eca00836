//! Miette diagnostics for glossary load failures.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use glossa::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a glossary that failed to load.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
pub enum GlossaryDiagnostic {
    /// The file is not valid JSON.
    #[error("invalid JSON: {message}")]
    #[diagnostic(code(glossa::json))]
    Json {
        #[source_code]
        src: NamedSource<String>,

        #[label("error here")]
        span: SourceSpan,

        message: String,
    },

    /// The JSON does not describe a valid glossary.
    #[error("invalid glossary: {message}")]
    #[diagnostic(code(glossa::schema))]
    Schema {
        #[source_code]
        src: NamedSource<String>,

        #[label("error here")]
        span: SourceSpan,

        message: String,

        #[help]
        help: Option<String>,
    },

    /// Anything without a location in the file.
    #[error("{0}")]
    #[diagnostic(code(glossa::load))]
    Other(String),
}

impl GlossaryDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let src = || NamedSource::new(path.display().to_string(), content.to_string());
        match err {
            LoadError::Json { source, .. } => {
                let offset = line_column_offset(content, source.line(), source.column());
                GlossaryDiagnostic::Json {
                    src: src(),
                    span: (offset, 1).into(),
                    message: source.to_string(),
                }
            }
            LoadError::Schema(schema) => {
                let (offset, len) = locate_path(content, &schema.path);
                GlossaryDiagnostic::Schema {
                    src: src(),
                    span: (offset, len).into(),
                    message: schema.message.clone(),
                    help: Some(format!("at {}", schema.path)),
                }
            }
            LoadError::Io { .. } => GlossaryDiagnostic::Other(err.to_string()),
        }
    }
}

/// Convert a 1-based line and column to a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    // Sum of (line_length + 1) for lines before the error line, plus column.
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);

    // Clamp to content length to avoid a miette panic on out-of-bounds spans
    offset.min(content.len())
}

/// Find the span of the deepest quoted object key along a schema error path.
///
/// Each segment is searched for after the previous match, so
/// `glossary.$translations.user.name` lands on the `"name"` key under
/// `"user"`. Segments that cannot be found (such as a missing required field)
/// leave the span on their parent.
fn locate_path(content: &str, path: &str) -> (usize, usize) {
    let mut found = (0, 0);
    let mut cursor = 0;
    for segment in path.split('.').skip(1) {
        let name = segment.split('[').next().unwrap_or(segment);
        let needle = format!("\"{name}\"");
        match content[cursor..].find(&needle) {
            Some(at) => {
                found = (cursor + at, needle.len());
                cursor += at + needle.len();
            }
            None => break,
        }
    }
    found
}
