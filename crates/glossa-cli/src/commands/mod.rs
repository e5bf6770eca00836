//! CLI command implementations.

mod check;
mod coverage;
mod translate;

use std::fs::read_to_string;
use std::path::Path;

use glossa::Glossary;
use miette::{miette, Result};

use crate::output::GlossaryDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use translate::{run_translate, TranslateArgs};

/// Reads and validates a glossary, turning load failures into diagnostics
/// that point into the file.
fn load_glossary(path: &Path) -> Result<Glossary> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Failed to read glossary {}: {}", path.display(), e))?;
    Glossary::from_json_str(&content)
        .map_err(|e| GlossaryDiagnostic::from_load_error(path, &content, &e).into())
}
