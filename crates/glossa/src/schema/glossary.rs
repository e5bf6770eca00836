//! Validators for the glossary document.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use super::fields::{
    ALIAS, DEFAULT, FORMAT, LOCALE, OPTIONS, PARAMS, PLURAL, TEMPLATE, TRANSLATIONS, VERSION,
};
use super::{SchemaError, field_path};
use crate::parser::{is_identifier, parse_version};
use crate::types::{
    DateTimeOptions, FormatKind, FormatSpec, Glossary, Key, LocaleTag, NumberOptions, ParamMap,
    ParamNode, ParamSpec, Template, TranslationMap, TranslationNode,
};

type Object = Map<String, JsonValue>;

/// Name of a JSON value's type as used in diagnostics.
fn json_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn expect_object<'a>(value: &'a JsonValue, path: &str) -> Result<&'a Object, SchemaError> {
    value.as_object().ok_or_else(|| {
        SchemaError::new(path, format!("expected object, received {}", json_type(value)))
    })
}

fn expect_str<'a>(value: &'a JsonValue, path: &str) -> Result<&'a str, SchemaError> {
    value.as_str().ok_or_else(|| {
        SchemaError::new(path, format!("expected string, received {}", json_type(value)))
    })
}

fn check_identifier(name: &str, path: &str) -> Result<(), SchemaError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::new(
            field_path(path, name),
            format!("'{name}' is not a valid identifier"),
        ))
    }
}

/// Validate a complete glossary document.
///
/// ```
/// use glossa::schema::validate_glossary;
/// use serde_json::json;
///
/// let glossary = validate_glossary(&json!({
///     "$version": "1.2.0",
///     "$locale": "en-US",
///     "$translations": { "title": "Welcome" }
/// })).unwrap();
/// assert_eq!(glossary.version().unwrap().to_string(), "1.2.0");
///
/// let err = validate_glossary(&json!({ "$locale": "en-US" })).unwrap_err();
/// assert_eq!(err.path, "glossary.$translations");
/// ```
pub fn validate_glossary(value: &JsonValue) -> Result<Glossary, SchemaError> {
    let path = "glossary";
    let obj = expect_object(value, path)?;

    let version = match obj.get(VERSION) {
        None => None,
        Some(raw) => {
            let version_path = field_path(path, VERSION);
            let text = expect_str(raw, &version_path)?;
            Some(
                parse_version(text)
                    .map_err(|e| SchemaError::new(&version_path, format!("invalid version: {e}")))?,
            )
        }
    };

    let locale_path = field_path(path, LOCALE);
    let raw_locale = obj
        .get(LOCALE)
        .ok_or_else(|| SchemaError::new(&locale_path, "required field is missing"))?;
    let tag = expect_str(raw_locale, &locale_path)?;
    let locale = LocaleTag::parse(tag)
        .map_err(|e| SchemaError::new(&locale_path, format!("invalid locale '{tag}': {e}")))?;

    let translations_path = field_path(path, TRANSLATIONS);
    let raw_translations = obj
        .get(TRANSLATIONS)
        .ok_or_else(|| SchemaError::new(&translations_path, "required field is missing"))?;
    let translations = validate_translation_map(raw_translations, &translations_path)?;

    Ok(Glossary::builder()
        .maybe_version(version)
        .locale(locale)
        .translations(translations)
        .build())
}

fn validate_translation_map(value: &JsonValue, path: &str) -> Result<TranslationMap, SchemaError> {
    let obj = expect_object(value, path)?;
    let mut map = TranslationMap::new();
    for (name, child) in obj {
        check_identifier(name, path)?;
        map.insert(name.clone(), validate_node(child, &field_path(path, name))?);
    }
    Ok(map)
}

/// A translation tree node: a translation, or a nested map of translations.
fn validate_node(value: &JsonValue, path: &str) -> Result<TranslationNode, SchemaError> {
    match value {
        JsonValue::Object(obj) if !obj.contains_key(TEMPLATE) => {
            Ok(TranslationNode::Group(validate_translation_map(value, path)?))
        }
        _ => validate_translation(value, path),
    }
}

/// Validate a single translation: a plain string or a template object.
pub fn validate_translation(value: &JsonValue, path: &str) -> Result<TranslationNode, SchemaError> {
    match value {
        JsonValue::String(text) => Ok(TranslationNode::Text(text.clone())),
        JsonValue::Object(_) => Ok(TranslationNode::Template(validate_template(value, path)?)),
        other => Err(SchemaError::new(
            path,
            format!(
                "expected a string, a template or a nested translation map, received {}",
                json_type(other)
            ),
        )),
    }
}

/// Validate a template object: `$template` text plus optional `$params`.
pub fn validate_template(value: &JsonValue, path: &str) -> Result<Template, SchemaError> {
    let obj = expect_object(value, path)?;
    let text_path = field_path(path, TEMPLATE);
    let text = obj
        .get(TEMPLATE)
        .ok_or_else(|| SchemaError::new(&text_path, "required field is missing"))
        .and_then(|raw| expect_str(raw, &text_path))?;
    let params = match obj.get(PARAMS) {
        None => ParamMap::new(),
        Some(raw) => validate_param_map(raw, &field_path(path, PARAMS))?,
    };
    Ok(Template::builder().text(text).params(params).build())
}

fn validate_param_map(value: &JsonValue, path: &str) -> Result<ParamMap, SchemaError> {
    let obj = expect_object(value, path)?;
    let mut map = ParamMap::new();
    for (name, child) in obj {
        check_identifier(name, path)?;
        map.insert(name.clone(), validate_param_node(child, &field_path(path, name))?);
    }
    Ok(map)
}

/// A param tree node. Objects made only of `$` fields are specs.
fn validate_param_node(value: &JsonValue, path: &str) -> Result<ParamNode, SchemaError> {
    let obj = expect_object(value, path)?;
    let reserved = obj.keys().filter(|k| k.starts_with('$')).count();
    if reserved == obj.len() {
        Ok(ParamNode::Spec(validate_param_spec(value, path)?))
    } else if reserved == 0 {
        Ok(ParamNode::Group(validate_param_map(value, path)?))
    } else {
        Err(SchemaError::new(
            path,
            "cannot mix param spec fields with nested params",
        ))
    }
}

/// Validate a parameter spec: optional `$alias`, `$default` and at most one format.
///
/// ```
/// use glossa::FormatKind;
/// use glossa::schema::validate_param_spec;
/// use serde_json::json;
///
/// let spec = validate_param_spec(&json!({ "$format": "number" }), "param").unwrap();
/// assert_eq!(spec.format.map(|f| f.kind()), Some(FormatKind::Number));
///
/// let err = validate_param_spec(&json!({ "$format": "duration" }), "param").unwrap_err();
/// assert_eq!(err.path, "param.$format");
/// ```
pub fn validate_param_spec(value: &JsonValue, path: &str) -> Result<ParamSpec, SchemaError> {
    let obj = expect_object(value, path)?;

    let alias = match obj.get(ALIAS) {
        None => None,
        Some(raw) => {
            let alias_path = field_path(path, ALIAS);
            let text = expect_str(raw, &alias_path)?;
            Some(
                Key::parse(text)
                    .map_err(|e| SchemaError::new(&alias_path, format!("invalid alias: {e}")))?,
            )
        }
    };

    let default = obj
        .get(DEFAULT)
        .map(|raw| expect_str(raw, &field_path(path, DEFAULT)))
        .transpose()?;

    let format = validate_format(obj, path)?;

    Ok(ParamSpec::builder()
        .maybe_alias(alias)
        .maybe_default(default)
        .maybe_format(format)
        .build())
}

fn validate_format(obj: &Object, path: &str) -> Result<Option<FormatSpec>, SchemaError> {
    let Some(raw) = obj.get(FORMAT) else {
        return Ok(None);
    };
    let format_path = field_path(path, FORMAT);
    let tag = expect_str(raw, &format_path)?;
    let kind = match FormatKind::from_tag(tag) {
        Some(kind) => kind,
        None if tag == "duration" => {
            return Err(SchemaError::new(
                &format_path,
                "format 'duration' is not supported",
            ));
        }
        None => {
            let expected: Vec<&str> = FormatKind::ALL.iter().map(|k| k.as_str()).collect();
            return Err(SchemaError::new(
                &format_path,
                format!("unknown format '{tag}', expected one of: {}", expected.join(", ")),
            ));
        }
    };

    let spec = match kind {
        FormatKind::DateTime => {
            let options: DateTimeOptions = options(obj, path)?;
            if let Some(zone) = &options.time_zone {
                if zone != "UTC" && zone != "Etc/UTC" {
                    return Err(SchemaError::new(
                        field_path(&field_path(path, OPTIONS), "timeZone"),
                        format!("unsupported time zone '{zone}', only UTC is available"),
                    ));
                }
            }
            FormatSpec::DateTime(options)
        }
        FormatKind::List => FormatSpec::List(options(obj, path)?),
        FormatKind::Number => {
            let options: NumberOptions = options(obj, path)?;
            options
                .check()
                .map_err(|message| SchemaError::new(field_path(path, OPTIONS), message))?;
            FormatSpec::Number(options)
        }
        FormatKind::Plural => FormatSpec::Plural {
            options: options(obj, path)?,
            categories: plural_categories(obj, path)?,
        },
        FormatKind::RelativeTime => FormatSpec::RelativeTime(options(obj, path)?),
    };
    Ok(Some(spec))
}

/// Deserialize the `$options` bag, defaulting when absent.
fn options<T: DeserializeOwned + Default>(obj: &Object, path: &str) -> Result<T, SchemaError> {
    let options_path = field_path(path, OPTIONS);
    match obj.get(OPTIONS) {
        None => Ok(T::default()),
        Some(raw) => {
            expect_object(raw, &options_path)?;
            serde_json::from_value(raw.clone())
                .map_err(|e| SchemaError::new(&options_path, e.to_string()))
        }
    }
}

fn plural_categories(
    obj: &Object,
    path: &str,
) -> Result<Option<BTreeMap<String, String>>, SchemaError> {
    let Some(raw) = obj.get(PLURAL) else {
        return Ok(None);
    };
    let plural_path = field_path(path, PLURAL);
    let entries = expect_object(raw, &plural_path)?;
    let mut categories = BTreeMap::new();
    for (category, text) in entries {
        let text = expect_str(text, &field_path(&plural_path, category))?;
        categories.insert(category.clone(), text.to_string());
    }
    Ok(Some(categories))
}
