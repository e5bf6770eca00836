//! Error types for glossary loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaError;

/// Errors that occur while loading a glossary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the glossary file.
    #[error("failed to read '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error(
        "invalid JSON{}: {source}",
        path.as_ref().map(|p| format!(" in '{}'", p.display())).unwrap_or_default()
    )]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON does not describe a valid glossary.
    #[error("invalid glossary: {0}")]
    Schema(#[from] SchemaError),
}

/// Compute "did you mean" suggestions for a mistyped key.
///
/// Returns up to 3 available keys within edit distance 2 (1 for keys of
/// three characters or fewer), closest first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() > 3 { 2 } else { 1 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
