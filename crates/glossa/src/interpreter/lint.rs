//! Static lint rules for glossaries.
//!
//! Lints inspect templates and parameter specs without rendering anything.
//! They flag declarations that can never take effect.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::format::PLURAL_CATEGORIES;
use crate::parser::parse_template;
use crate::types::{FormatSpec, Glossary, ParamMap, ParamNode, ParamSpec, Template, TranslationNode};

/// A warning about a glossary that loads but is probably wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LintWarning {
    /// A declared parameter is never referenced by the template or its variants.
    #[error("'{key}': parameter '{param}' is declared but never used")]
    UnusedParam { key: String, param: String },

    /// A `$plural` entry is not a CLDR category and can never be selected.
    #[error("'{key}': parameter '{param}' has unknown plural category '{category}'")]
    UnknownPluralCategory {
        key: String,
        param: String,
        category: String,
    },

    /// A `$plural` mapping has no `other` entry.
    #[error("'{key}': plural parameter '{param}' has no 'other' variant")]
    PluralWithoutOther { key: String, param: String },
}

/// Runs all lint rules over every template in `glossary`, in key order.
///
/// ```
/// use glossa::{Glossary, LintWarning, lint_glossary};
///
/// let glossary = Glossary::from_json_str(r#"{
///     "$locale": "en",
///     "$translations": {
///         "hello": {
///             "$template": "Hello",
///             "$params": { "name": {} }
///         }
///     }
/// }"#).unwrap();
///
/// assert_eq!(lint_glossary(&glossary), vec![LintWarning::UnusedParam {
///     key: "hello".to_string(),
///     param: "name".to_string(),
/// }]);
/// ```
pub fn lint_glossary(glossary: &Glossary) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for (key, node) in glossary.entries() {
        if let TranslationNode::Template(template) = node {
            lint_template(&key, template, &mut warnings);
        }
    }
    warnings
}

fn lint_template(key: &str, template: &Template, warnings: &mut Vec<LintWarning>) {
    let mut declared = Vec::new();
    collect_specs(&template.params, "", &mut declared);

    let mut referenced: BTreeSet<String> = parse_template(&template.text)
        .params()
        .map(str::to_string)
        .collect();
    for (_, spec) in &declared {
        if let Some(FormatSpec::Plural {
            categories: Some(categories),
            ..
        }) = &spec.format
        {
            for body in categories.values() {
                referenced.extend(parse_template(body).params().map(str::to_string));
            }
        }
    }

    for (param, spec) in &declared {
        if !referenced.contains(param) {
            warnings.push(LintWarning::UnusedParam {
                key: key.to_string(),
                param: param.clone(),
            });
        }
        lint_plural_categories(key, param, spec, warnings);
    }
}

fn lint_plural_categories(
    key: &str,
    param: &str,
    spec: &ParamSpec,
    warnings: &mut Vec<LintWarning>,
) {
    let Some(FormatSpec::Plural {
        categories: Some(categories),
        ..
    }) = &spec.format
    else {
        return;
    };
    for category in categories.keys() {
        if !PLURAL_CATEGORIES.contains(&category.as_str()) {
            warnings.push(LintWarning::UnknownPluralCategory {
                key: key.to_string(),
                param: param.to_string(),
                category: category.clone(),
            });
        }
    }
    if !categories.contains_key("other") {
        warnings.push(LintWarning::PluralWithoutOther {
            key: key.to_string(),
            param: param.to_string(),
        });
    }
}

/// Flatten a params tree into dotted names and their specs.
fn collect_specs<'a>(params: &'a ParamMap, prefix: &str, out: &mut Vec<(String, &'a ParamSpec)>) {
    for (name, node) in params {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match node {
            ParamNode::Spec(spec) => out.push((path, spec)),
            ParamNode::Group(children) => collect_specs(children, &path, out),
        }
    }
}
