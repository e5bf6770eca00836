//! Implementation of the `glossa check` command.

use std::path::PathBuf;

use glossa::{lint_glossary, LintWarning};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::load_glossary;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Glossary files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    keys: usize,
    warnings: Vec<LintWarning>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let file = path.display().to_string();
        match load_glossary(path) {
            Ok(glossary) => {
                let warnings = lint_glossary(&glossary);
                let keys = glossary.keys().len();
                debug!(file = %file, keys, warnings = warnings.len(), "checked");
                if !args.json {
                    print_warnings(&file, &warnings);
                    if warnings.is_empty() {
                        println!("{} {}", "ok".if_supports_color(Stream::Stdout, |t| t.green()), file);
                    }
                }
                reports.push(FileReport {
                    file,
                    valid: true,
                    error: None,
                    keys,
                    warnings,
                });
            }
            Err(report) => {
                let error = report.to_string();
                if !args.json {
                    eprintln!("{:?}", report);
                }
                reports.push(FileReport {
                    file,
                    valid: false,
                    error: Some(error),
                    keys: 0,
                    warnings: Vec::new(),
                });
            }
        }
    }

    if args.json {
        let output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", output);
    }

    let any_invalid = reports.iter().any(|r| !r.valid);
    let any_warnings = reports.iter().any(|r| !r.warnings.is_empty());
    if any_invalid || (args.strict && any_warnings) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_warnings(file: &str, warnings: &[LintWarning]) {
    for warning in warnings {
        eprintln!(
            "{}: {}: {}",
            "warning".if_supports_color(Stream::Stderr, |t| t.yellow()),
            file,
            warning
        );
    }
}
