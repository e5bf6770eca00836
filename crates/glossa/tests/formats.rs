//! Integration tests for formatted parameters.

use chrono::{DateTime, Utc};
use glossa::format::{FormatError, FormatterError, IcuFormatter, LocaleFormatter, format_value};
use glossa::schema::input::{NumberInput, RelativeTimeInput};
use glossa::types::{
    DateTimeOptions, ListOptions, NumberOptions, PluralOptions, RelativeTimeOptions,
};
use glossa::{FormatKind, FormatSpec, Glossary, Issue, Value, args, translate, translate_with};
use icu_locale_core::{Locale, locale};
use serde_json::json;

fn single(locale: &str, params: serde_json::Value) -> Glossary {
    Glossary::from_json_value(&json!({
        "$locale": locale,
        "$translations": {
            "t": { "$template": "{v}", "$params": { "v": params } }
        }
    }))
    .unwrap()
}

// =============================================================================
// Number
// =============================================================================

#[test]
fn number_uses_glossary_locale() {
    let de = single("de-DE", json!({ "$format": "number" }));
    assert_eq!(translate(&de, "t", &args! { "v" => 1234.5 }).result, "1.234,5");

    let en = single("en-US", json!({ "$format": "number" }));
    assert_eq!(translate(&en, "t", &args! { "v" => 1234.5 }).result, "1,234.5");
}

#[test]
fn number_currency_and_percent() {
    let usd = single(
        "en-US",
        json!({ "$format": "number", "$options": { "style": "currency", "currency": "USD" } }),
    );
    assert_eq!(translate(&usd, "t", &args! { "v" => 42 }).result, "$42.00");

    let pct = single("en-US", json!({ "$format": "number", "$options": { "style": "percent" } }));
    assert_eq!(translate(&pct, "t", &args! { "v" => 0.5 }).result, "50%");
}

#[test]
fn number_fraction_digits() {
    let g = single(
        "en-US",
        json!({ "$format": "number", "$options": { "maximumFractionDigits": 1 } }),
    );
    assert_eq!(translate(&g, "t", &args! { "v" => 2.25 }).result.len(), 3);
    assert_eq!(translate(&g, "t", &args! { "v" => 3.14159 }).result, "3.1");
}

#[test]
fn number_rejects_objects() {
    let g = single("en-US", json!({ "$format": "number" }));
    let out = translate(&g, "t", &args! { "v" => Value::from(json!({ "n": 1 })) });
    assert_eq!(out.result, "[object Object]");
    assert_eq!(out.issues().len(), 1);
}

// =============================================================================
// List
// =============================================================================

#[test]
fn list_conjunction_and_disjunction() {
    let and = single("en-US", json!({ "$format": "list" }));
    let out = translate(&and, "t", &args! { "v" => vec!["red", "green", "blue"] });
    assert_eq!(out.result, "red, green, and blue");

    let or = single("en-US", json!({ "$format": "list", "$options": { "type": "disjunction" } }));
    let out = translate(&or, "t", &args! { "v" => vec!["tea", "coffee"] });
    assert_eq!(out.result, "tea or coffee");
}

#[test]
fn list_rejects_non_strings() {
    let g = single("en-US", json!({ "$format": "list" }));
    let out = translate(&g, "t", &args! { "v" => vec![1, 2] });
    assert_eq!(out.result, "1,2");
    let Issue::InvalidFormat { error, .. } = &out.issues()[0] else {
        panic!("expected invalid-format");
    };
    let FormatError::InvalidInput(schema) = error else {
        panic!("expected invalid input");
    };
    assert_eq!(schema.path, "value[0]");
}

// =============================================================================
// Date-Time
// =============================================================================

#[test]
fn date_time_from_millis_and_dates() {
    let g = single("en-US", json!({ "$format": "date-time" }));
    // 2024-01-15T00:00:00Z
    let millis = 1_705_276_800_000_i64;
    assert_eq!(translate(&g, "t", &args! { "v" => millis }).result, "1/15/2024");

    let date = DateTime::from_timestamp_millis(millis).unwrap();
    assert_eq!(translate(&g, "t", &args! { "v" => date }).result, "1/15/2024");
}

#[test]
fn date_time_beyond_renderable_years_is_a_formatter_failure() {
    let g = single("en-US", json!({ "$format": "date-time" }));
    for millis in [8_640_000_000_000_000_i64, -8_640_000_000_000_000] {
        let out = translate(&g, "t", &args! { "v" => millis });
        assert_eq!(out.result, millis.to_string());
        let [Issue::InvalidFormat { error, .. }] = out.issues() else {
            panic!("expected one invalid-format issue, got {:?}", out.issues());
        };
        let FormatError::Formatter { kind, message } = error else {
            panic!("expected formatter failure, got {error:?}");
        };
        assert_eq!(*kind, FormatKind::DateTime);
        assert!(message.contains("formattable years"), "{message}");
    }
}

#[test]
fn date_time_rejects_strings() {
    let g = single("en-US", json!({ "$format": "date-time" }));
    let out = translate(&g, "t", &args! { "v" => "2024-01-15" });
    assert_eq!(out.result, "2024-01-15");
    assert_eq!(out.issues().len(), 1);
}

// =============================================================================
// Relative Time
// =============================================================================

#[test]
fn relative_time_phrases() {
    let g = single("en-US", json!({ "$format": "relative-time" }));
    let v = Value::from(json!({ "value": -3, "unit": "days" }));
    assert_eq!(translate(&g, "t", &args! { "v" => v }).result, "3 days ago");

    let auto = single(
        "en-US",
        json!({ "$format": "relative-time", "$options": { "numeric": "auto" } }),
    );
    let v = Value::from(json!({ "value": 1, "unit": "day" }));
    assert_eq!(translate(&auto, "t", &args! { "v" => v }).result, "tomorrow");
}

#[test]
fn relative_time_rejects_unknown_units() {
    let g = single("en-US", json!({ "$format": "relative-time" }));
    let v = Value::from(json!({ "value": 2, "unit": "fortnight" }));
    let out = translate(&g, "t", &args! { "v" => v });
    assert_eq!(out.result, "[object Object]");
    assert_eq!(out.issues().len(), 1);
}

// =============================================================================
// Plural
// =============================================================================

#[test]
fn plural_ordinals() {
    let g = single(
        "en-US",
        json!({
            "$format": "plural",
            "$options": { "type": "ordinal" },
            "$plural": { "one": "{v}st", "two": "{v}nd", "few": "{v}rd", "other": "{v}th" }
        }),
    );
    assert_eq!(translate(&g, "t", &args! { "v" => 1 }).result, "1st");
    assert_eq!(translate(&g, "t", &args! { "v" => 22 }).result, "22nd");
    assert_eq!(translate(&g, "t", &args! { "v" => 13 }).result, "13th");
}

#[test]
fn plural_does_not_coerce_strings() {
    let g = single("en-US", json!({ "$format": "plural" }));
    let out = translate(&g, "t", &args! { "v" => "1" });
    assert_eq!(out.result, "1");
    assert_eq!(out.issues().len(), 1);
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn format_value_dispatches_by_kind() {
    let en = locale!("en-US");
    let spec = FormatSpec::List(ListOptions::default());
    let out = format_value(&IcuFormatter, &en, &Value::from(vec!["a", "b"]), &spec);
    assert_eq!(out.unwrap(), "a and b");

    let spec = FormatSpec::Plural {
        options: PluralOptions::default(),
        categories: None,
    };
    assert_eq!(format_value(&IcuFormatter, &en, &Value::from(2), &spec).unwrap(), "other");
}

/// Formatter that fails every call, to check error propagation.
struct Broken;

impl LocaleFormatter for Broken {
    fn format_date_time(
        &self,
        _: &Locale,
        _: &DateTime<Utc>,
        _: &DateTimeOptions,
    ) -> Result<String, FormatterError> {
        Err(FormatterError::new("no data"))
    }

    fn format_list(
        &self,
        _: &Locale,
        _: &[String],
        _: &ListOptions,
    ) -> Result<String, FormatterError> {
        Err(FormatterError::new("no data"))
    }

    fn format_number(
        &self,
        _: &Locale,
        _: NumberInput,
        _: &NumberOptions,
    ) -> Result<String, FormatterError> {
        Err(FormatterError::new("no data"))
    }

    fn plural_category(
        &self,
        _: &Locale,
        _: f64,
        _: &PluralOptions,
    ) -> Result<&'static str, FormatterError> {
        Err(FormatterError::new("no data"))
    }

    fn format_relative_time(
        &self,
        _: &Locale,
        _: RelativeTimeInput,
        _: &RelativeTimeOptions,
    ) -> Result<String, FormatterError> {
        Err(FormatterError::new("no data"))
    }
}

#[test]
fn formatter_failures_become_issues() {
    let g = single("en-US", json!({ "$format": "number" }));
    let out = translate_with(&Broken, &g, "t", &args! { "v" => 5 });
    assert_eq!(out.result, "5");
    let Issue::InvalidFormat { error, .. } = &out.issues()[0] else {
        panic!("expected invalid-format");
    };
    assert_eq!(error.to_string(), "number formatter failed: no data");
}
