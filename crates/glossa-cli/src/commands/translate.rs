//! Implementation of the `glossa translate` command.

use std::path::PathBuf;

use glossa::{compute_suggestions, Args, Issue, Value};
use miette::{miette, IntoDiagnostic};
use owo_colors::{OwoColorize, Stream};
use serde_json::Value as JsonValue;

use super::load_glossary;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Glossary file (.json)
    #[arg(short, long, env = "GLOSSA_GLOSSARY")]
    pub glossary: PathBuf,

    /// Dotted translation key, e.g. `user.greeting`
    pub key: String,

    /// Parameters in name=value format (repeatable). Values that parse as
    /// JSON are used as JSON, anything else is a string.
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, Value)>,

    /// All arguments as one JSON object. `--param` entries override it.
    #[arg(long, value_name = "JSON")]
    pub args: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero code if the translation has issues
    #[arg(long)]
    pub strict: bool,
}

/// Parse a name=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, Value), String> {
    let (name, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    if name.is_empty() {
        return Err(format!("invalid parameter format '{}': empty name", s));
    }
    let value = match serde_json::from_str::<JsonValue>(raw) {
        Ok(json) => Value::from(json),
        Err(_) => Value::from(raw),
    };
    Ok((name.to_string(), value))
}

/// Build the argument map from `--args` and `--param`.
fn collect_args(json: Option<&str>, params: Vec<(String, Value)>) -> miette::Result<Args> {
    let mut args = Args::new();
    if let Some(json) = json {
        let parsed: JsonValue = serde_json::from_str(json).into_diagnostic()?;
        let JsonValue::Object(entries) = parsed else {
            return Err(miette!("--args must be a JSON object"));
        };
        args.extend(entries.into_iter().map(|(k, v)| (k, Value::from(v))));
    }
    args.extend(params);
    Ok(args)
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let glossary = load_glossary(&args.glossary)?;
    let call_args = collect_args(args.args.as_deref(), args.params)?;

    let translated = glossary.translate(&args.key, &call_args);

    if args.json {
        let output = serde_json::to_string_pretty(&translated).into_diagnostic()?;
        println!("{}", output);
    } else {
        println!("{}", translated.result);
        for issue in translated.issues() {
            eprintln!(
                "{}: {}",
                "warning".if_supports_color(Stream::Stderr, |t| t.yellow()),
                issue
            );
            if let Issue::UnknownKey { key } = issue {
                let suggestions = compute_suggestions(key, &glossary.keys());
                if !suggestions.is_empty() {
                    eprintln!("  did you mean: {}", suggestions.join(", "));
                }
            }
        }
    }

    if args.strict && !translated.is_clean() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_values_parse_as_json_when_possible() {
        assert_eq!(
            parse_key_val("count=3").unwrap(),
            ("count".to_string(), Value::Number(3))
        );
        assert_eq!(
            parse_key_val("names=[\"a\",\"b\"]").unwrap(),
            ("names".to_string(), Value::from(vec!["a", "b"]))
        );
        assert_eq!(
            parse_key_val("name=Ada").unwrap(),
            ("name".to_string(), Value::from("Ada"))
        );
        assert_eq!(
            parse_key_val("query=a=b").unwrap(),
            ("query".to_string(), Value::from("a=b"))
        );
    }

    #[test]
    fn malformed_params_are_rejected() {
        assert!(parse_key_val("count").is_err());
        assert!(parse_key_val("=3").is_err());
    }

    #[test]
    fn params_override_json_args() {
        let args = collect_args(
            Some(r#"{ "count": 1, "name": "Ada" }"#),
            vec![("count".to_string(), Value::Number(5))],
        )
        .unwrap();
        assert_eq!(args["count"], Value::Number(5));
        assert_eq!(args["name"], Value::from("Ada"));
    }

    #[test]
    fn json_args_must_be_an_object() {
        assert!(collect_args(Some("[1, 2]"), Vec::new()).is_err());
    }
}
