//! Tests for static glossary lints.

use glossa::{Glossary, LintWarning, lint_glossary};
use serde_json::json;

fn glossary(translations: serde_json::Value) -> Glossary {
    Glossary::from_json_value(&json!({ "$locale": "en", "$translations": translations })).unwrap()
}

#[test]
fn clean_glossary_has_no_warnings() {
    let g = glossary(json!({
        "title": "Welcome",
        "greeting": {
            "$template": "Hello {name}",
            "$params": { "name": { "$default": "User" } }
        }
    }));
    assert!(lint_glossary(&g).is_empty());
}

#[test]
fn unused_param() {
    let g = glossary(json!({
        "greeting": {
            "$template": "Hello",
            "$params": { "name": {}, "user": { "email": {} } }
        }
    }));
    assert_eq!(
        lint_glossary(&g),
        vec![
            LintWarning::UnusedParam {
                key: "greeting".to_string(),
                param: "name".to_string(),
            },
            LintWarning::UnusedParam {
                key: "greeting".to_string(),
                param: "user.email".to_string(),
            },
        ]
    );
}

#[test]
fn params_used_only_in_plural_variants_count_as_used() {
    let g = glossary(json!({
        "inbox": {
            "$template": "{count}",
            "$params": {
                "count": {
                    "$format": "plural",
                    "$plural": { "one": "{name} has a message", "other": "{name} has {count}" }
                },
                "name": {}
            }
        }
    }));
    assert!(lint_glossary(&g).is_empty());
}

#[test]
fn plural_category_checks() {
    let g = glossary(json!({
        "items": {
            "$template": "{n}",
            "$params": {
                "n": { "$format": "plural", "$plural": { "one": "1 item", "plenty": "lots" } }
            }
        }
    }));
    let warnings = lint_glossary(&g);
    assert_eq!(
        warnings,
        vec![
            LintWarning::UnknownPluralCategory {
                key: "items".to_string(),
                param: "n".to_string(),
                category: "plenty".to_string(),
            },
            LintWarning::PluralWithoutOther {
                key: "items".to_string(),
                param: "n".to_string(),
            },
        ]
    );
    assert_eq!(
        warnings[1].to_string(),
        "'items': plural parameter 'n' has no 'other' variant"
    );
}
