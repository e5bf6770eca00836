//! Issues serialize to tagged JSON for logs and telemetry.

use glossa::{Glossary, Translated, args};
use serde_json::json;

fn to_json(translated: &Translated) -> String {
    serde_json::to_string(translated).unwrap()
}

fn glossary() -> Glossary {
    Glossary::from_json_value(&json!({
        "$locale": "en-US",
        "$translations": {
            "title": "Welcome",
            "greeting": { "$template": "Hi {name}" },
            "total": {
                "$template": "Total: {n}",
                "$params": { "n": { "$format": "number" } }
            }
        }
    }))
    .unwrap()
}

#[test]
fn clean_result_omits_issues() {
    let out = glossary().translate("title", &args! {});
    insta::assert_snapshot!(to_json(&out), @r#"{"result":"Welcome"}"#);
}

#[test]
fn unknown_key_json() {
    let out = glossary().translate("nope", &args! {});
    insta::assert_snapshot!(
        to_json(&out),
        @r#"{"result":"nope","issues":[{"type":"unknown-key","key":"nope"}]}"#
    );
}

#[test]
fn missing_param_json() {
    let out = glossary().translate("greeting", &args! {});
    insta::assert_snapshot!(
        to_json(&out),
        @r#"{"result":"Hi name","issues":[{"type":"missing-param","key":"greeting","param":"name"}]}"#
    );
}

#[test]
fn invalid_format_json() {
    let out = glossary().translate("total", &args! { "n" => "abc" });
    insta::assert_snapshot!(
        to_json(&out),
        @r#"{"result":"Total: abc","issues":[{"type":"invalid-format","key":"total","param":"n","value":"abc","error":{"type":"invalid-input","path":"value","message":"expected number, received string 'abc'"}}]}"#
    );
}

#[test]
fn issue_display() {
    let out = glossary().translate("total", &args! { "n" => "abc" });
    assert_eq!(
        out.issues()[0].to_string(),
        "invalid value for parameter 'n' of 'total': value: expected number, received string 'abc'"
    );
}
