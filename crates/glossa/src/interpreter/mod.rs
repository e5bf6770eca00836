//! Glossary interpreter.
//!
//! Loads glossaries, resolves keys and renders templates with runtime
//! arguments, and lints glossaries for declarations that never take effect.

mod context;
mod error;
mod evaluator;
mod lint;
mod loader;

pub use context::TranslateContext;
pub use error::{LoadError, compute_suggestions};
pub use evaluator::{translate, translate_with};
pub use lint::{LintWarning, lint_glossary};
