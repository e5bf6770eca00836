//! Integration tests for key resolution and template rendering.

use glossa::{Args, Glossary, Issue, Value, args, translate};
use serde_json::json;

fn glossary(translations: serde_json::Value) -> Glossary {
    Glossary::from_json_value(&json!({
        "$locale": "en-US",
        "$translations": translations,
    }))
    .unwrap()
}

fn notifications() -> Glossary {
    glossary(json!({
        "user": {
            "notifications": {
                "$template": "You have {count} notification(s).",
                "$params": {
                    "count": {
                        "$format": "plural",
                        "$plural": {
                            "one": "You have 1 notification.",
                            "other": "You have {count} notifications."
                        }
                    }
                }
            }
        }
    }))
}

// =============================================================================
// Key Resolution
// =============================================================================

#[test]
fn unknown_key_returns_key() {
    let g = glossary(json!({ "title": "Welcome" }));
    let out = translate(&g, "missing.key", &args! {});
    assert_eq!(out.result, "missing.key");
    assert_eq!(
        out.issues,
        Some(vec![Issue::UnknownKey {
            key: "missing.key".to_string()
        }])
    );
}

#[test]
fn group_key_is_unknown() {
    let g = glossary(json!({ "app": { "title": "Welcome" } }));
    let out = translate(&g, "app", &args! {});
    assert_eq!(out.result, "app");
    assert_eq!(out.issues().len(), 1);
    assert!(matches!(out.issues()[0], Issue::UnknownKey { .. }));
}

#[test]
fn key_through_text_leaf_is_unknown() {
    let g = glossary(json!({ "app": { "title": "Welcome" } }));
    let out = translate(&g, "app.title.more", &args! {});
    assert_eq!(out.result, "app.title.more");
    assert!(!out.is_clean());
}

#[test]
fn plain_text_ignores_args() {
    let g = glossary(json!({ "app": { "title": "Welcome {name}" } }));
    let out = translate(&g, "app.title", &args! { "name" => "Ada" });
    assert_eq!(out.result, "Welcome {name}");
    assert!(out.is_clean());
}

#[test]
fn glossary_method_matches_free_function() {
    let g = notifications();
    let a = args! { "count" => 3 };
    assert_eq!(g.translate("user.notifications", &a), translate(&g, "user.notifications", &a));
}

#[test]
fn translation_is_deterministic() {
    let g = notifications();
    let a = args! { "count" => 7 };
    let first = translate(&g, "user.notifications", &a);
    for _ in 0..5 {
        assert_eq!(translate(&g, "user.notifications", &a), first);
    }
}

// =============================================================================
// Parameters
// =============================================================================

#[test]
fn missing_param_without_default() {
    let g = glossary(json!({ "x": { "$template": "{x}" } }));
    let out = translate(&g, "x", &args! {});
    assert_eq!(out.result, "x");
    assert_eq!(
        out.issues(),
        [Issue::MissingParam {
            key: "x".to_string(),
            param: "x".to_string()
        }]
    );
}

#[test]
fn repeated_missing_param_is_reported_per_token() {
    let g = glossary(json!({ "x": { "$template": "{x} and {x}" } }));
    let out = translate(&g, "x", &args! {});
    assert_eq!(out.result, "x and x");
    let missing = Issue::MissingParam {
        key: "x".to_string(),
        param: "x".to_string(),
    };
    assert_eq!(out.issues(), [missing.clone(), missing]);
}

#[test]
fn repeated_invalid_format_is_reported_per_token() {
    let g = glossary(json!({
        "ratio": {
            "$template": "{n}/{n}",
            "$params": { "n": { "$format": "number" } }
        }
    }));
    let out = translate(&g, "ratio", &args! { "n" => "abc" });
    assert_eq!(out.result, "abc/abc");
    assert_eq!(out.issues().len(), 2);
    assert!(
        out.issues()
            .iter()
            .all(|issue| matches!(issue, Issue::InvalidFormat { param, .. } if param == "n"))
    );
}

#[test]
fn default_substitution() {
    let g = glossary(json!({
        "greeting": {
            "$template": "Hello {name}",
            "$params": { "name": { "$default": "User" } }
        }
    }));
    let out = translate(&g, "greeting", &args! {});
    assert_eq!(out.result, "Hello User");
    assert!(out.is_clean());

    let out = translate(&g, "greeting", &args! { "name" => "Ada" });
    assert_eq!(out.result, "Hello Ada");
}

#[test]
fn default_is_not_formatted() {
    let g = glossary(json!({
        "total": {
            "$template": "Total: {n}",
            "$params": { "n": { "$default": "n/a", "$format": "number" } }
        }
    }));
    let out = translate(&g, "total", &args! {});
    assert_eq!(out.result, "Total: n/a");
    assert!(out.is_clean());
}

#[test]
fn unformatted_values_use_javascript_strings() {
    let g = glossary(json!({ "t": { "$template": "{a}|{b}|{c}|{d}|{e}" } }));
    let a: Args = args! {
        "a" => 3.0,
        "b" => true,
        "c" => Value::Null,
        "d" => vec![1, 2],
        "e" => Value::from(json!({ "k": 1 })),
    };
    let out = translate(&g, "t", &a);
    assert_eq!(out.result, "3|true|null|1,2|[object Object]");
    assert!(out.is_clean());
}

#[test]
fn alias_reads_other_argument() {
    let g = glossary(json!({
        "t": {
            "$template": "Hi {who}",
            "$params": { "who": { "$alias": "userName" } }
        }
    }));
    let out = translate(&g, "t", &args! { "userName" => "Grace", "who" => "ignored" });
    assert_eq!(out.result, "Hi Grace");
}

#[test]
fn dotted_alias_reads_nested_argument() {
    let g = glossary(json!({
        "t": {
            "$template": "Hi {name}, you have {first} first",
            "$params": {
                "name": { "$alias": "user.profile.name" },
                "first": { "$alias": "user.items.0" }
            }
        }
    }));
    let user = Value::from(json!({ "profile": { "name": "Lin" }, "items": ["tea"] }));
    let out = translate(&g, "t", &args! { "user" => user });
    assert_eq!(out.result, "Hi Lin, you have tea first");
    assert!(out.is_clean());
}

#[test]
fn missing_aliased_param_names_the_token() {
    let g = glossary(json!({
        "t": {
            "$template": "Hi {who}",
            "$params": { "who": { "$alias": "user.name" } }
        }
    }));
    let out = translate(&g, "t", &args! {});
    assert_eq!(out.result, "Hi who");
    assert_eq!(out.issues()[0].param(), Some("who"));
}

#[test]
fn non_tokens_are_literal() {
    let g = glossary(json!({ "t": { "$template": "{{x}} {} {a.b} {x" } }));
    let out = translate(&g, "t", &args! { "x" => "X" });
    assert_eq!(out.result, "{X} {} {a.b} {x");
}

#[test]
fn substituted_text_is_not_rescanned() {
    let g = glossary(json!({ "t": { "$template": "{a}" } }));
    let out = translate(&g, "t", &args! { "a" => "{b}", "b" => "nope" });
    assert_eq!(out.result, "{b}");
}

// =============================================================================
// Formats
// =============================================================================

#[test]
fn number_format_success_and_failure() {
    let g = glossary(json!({
        "price": {
            "$template": "Price: {amount}",
            "$params": { "amount": { "$format": "number" } }
        }
    }));
    let out = translate(&g, "price", &args! { "amount" => 1234.5 });
    assert_eq!(out.result, "Price: 1,234.5");
    assert!(out.is_clean());

    let out = translate(&g, "price", &args! { "amount" => "lots" });
    assert!(out.result.contains("lots"));
    let issues = out.issues();
    assert_eq!(issues.len(), 1);
    let Issue::InvalidFormat { param, value, .. } = &issues[0] else {
        panic!("expected invalid-format, got {issues:?}");
    };
    assert_eq!(param, "amount");
    assert_eq!(value, &Value::from("lots"));
}

#[test]
fn number_accepts_numeric_strings() {
    let g = glossary(json!({
        "n": { "$template": "{n}", "$params": { "n": { "$format": "number" } } }
    }));
    assert_eq!(translate(&g, "n", &args! { "n" => "2500" }).result, "2,500");
    assert_eq!(translate(&g, "n", &args! { "n" => "Infinity" }).result, "∞");
}

#[test]
fn plural_literal_mapping() {
    let g = glossary(json!({
        "items": {
            "$template": "{n}",
            "$params": {
                "n": { "$format": "plural", "$plural": { "one": "1 item", "other": "{n} items" } }
            }
        }
    }));
    assert_eq!(translate(&g, "items", &args! { "n" => 1 }).result, "1 item");
    assert_eq!(translate(&g, "items", &args! { "n" => 4 }).result, "4 items");
}

#[test]
fn unmapped_plural_category_is_bare() {
    let g = glossary(json!({
        "items": {
            "$template": "Count: {n}",
            "$params": { "n": { "$format": "plural", "$plural": { "one": "one item" } } }
        }
    }));
    assert_eq!(translate(&g, "items", &args! { "n" => 5 }).result, "Count: other");

    let bare = glossary(json!({
        "items": {
            "$template": "Count: {n}",
            "$params": { "n": { "$format": "plural" } }
        }
    }));
    assert_eq!(translate(&bare, "items", &args! { "n" => 1 }).result, "Count: one");
}

#[test]
fn invalid_plural_falls_back_to_template() {
    let g = notifications();
    let out = translate(&g, "user.notifications", &args! { "count" => "many" });
    assert_eq!(out.result, "You have many notification(s).");
    assert!(matches!(out.issues()[0], Issue::InvalidFormat { .. }));
}

#[test]
fn plural_variant_renders_other_params() {
    let g = glossary(json!({
        "inbox": {
            "$template": "{name}: {count}",
            "$params": {
                "count": {
                    "$format": "plural",
                    "$plural": { "one": "{name} has one message", "other": "{name} has {count} messages" }
                }
            }
        }
    }));
    let out = translate(&g, "inbox", &args! { "name" => "Ada", "count" => 1200 });
    assert_eq!(out.result, "Ada has 1,200 messages");

    let out = translate(&g, "inbox", &args! { "count" => 1 });
    assert_eq!(out.result, "name has one message");
    assert_eq!(out.issues().len(), 1);
}

// =============================================================================
// End to End
// =============================================================================

#[test]
fn notifications_singular() {
    let g = notifications();
    let out = translate(&g, "user.notifications", &args! { "count" => 1 });
    assert_eq!(out.result, "You have 1 notification.");
    assert!(out.is_clean());
}

#[test]
fn notifications_plural() {
    let g = notifications();
    let out = translate(&g, "user.notifications", &args! { "count" => 5 });
    assert_eq!(out.result, "You have 5 notifications.");
    assert!(out.is_clean());
}

#[test]
fn notifications_missing_count() {
    let g = notifications();
    let out = translate(&g, "user.notifications", &args! {});
    assert_eq!(out.result, "You have count notification(s).");
    assert!(matches!(out.issues()[0], Issue::MissingParam { .. }));
}
