//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::debug;

use super::load_glossary;
use crate::output::table::{format_coverage_table, GlossaryCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source glossary that defines the full key set (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Translated glossaries to compare against the source.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Exit with non-zero code if any glossary is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    file: &'a str,
    locale: &'a str,
    translated: usize,
    total: usize,
    missing: &'a [String],
    extra: &'a [String],
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source = load_glossary(&args.source)?;
    let source_keys: BTreeSet<String> = source.keys().into_iter().collect();
    let source_count = source_keys.len();

    let mut coverage_data: Vec<GlossaryCoverage> = Vec::new();

    for path in &args.files {
        let glossary = load_glossary(path)?;
        let keys: BTreeSet<String> = glossary.keys().into_iter().collect();

        let missing: Vec<String> = source_keys.difference(&keys).cloned().collect();
        let extra: Vec<String> = keys.difference(&source_keys).cloned().collect();
        let translated = source_keys.intersection(&keys).count();
        debug!(file = %path.display(), translated, missing = missing.len(), "coverage computed");

        coverage_data.push(GlossaryCoverage {
            file: path.display().to_string(),
            locale: glossary.locale().as_str().to_string(),
            translated,
            missing,
            extra,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson<'_>> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                file: &c.file,
                locale: &c.locale,
                translated: c.translated,
                total: source_count,
                missing: &c.missing,
                extra: &c.extra,
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for entry in &coverage_data {
            if !entry.missing.is_empty() {
                println!("\nMissing in {}:", entry.file);
                for key in &entry.missing {
                    println!("  - {}", key);
                }
            }
            if !entry.extra.is_empty() {
                println!("\nNot in source, found in {}:", entry.file);
                for key in &entry.extra {
                    println!("  + {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
