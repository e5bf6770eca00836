//! Locale-aware value formatting.
//!
//! [`format_value`] validates a raw argument against a parameter's
//! [`FormatSpec`] and hands the typed input to a [`LocaleFormatter`]
//! primitive. [`IcuFormatter`] is the ICU4X-backed implementation used by
//! [`translate`](crate::translate).

mod cache;
mod date_time;
mod error;
mod icu;
mod list;
mod number;
mod plural;
mod relative_time;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use icu_locale_core::Locale;

pub use error::{FormatError, FormatterError};
pub use icu::IcuFormatter;
pub use plural::CATEGORIES as PLURAL_CATEGORIES;

use crate::schema::input::{
    NumberInput, RelativeTimeInput, validate_date_time, validate_list, validate_number,
    validate_plural, validate_relative_time,
};
use crate::types::{
    DateTimeOptions, FormatKind, FormatSpec, ListOptions, NumberOptions, PluralOptions,
    RelativeTimeOptions, Value,
};

/// Formatting primitives for one locale at a time.
///
/// Implementations receive already validated input. Custom implementations
/// can be passed to [`translate_with`](crate::translate_with), e.g. to stub
/// formatting in tests.
pub trait LocaleFormatter {
    fn format_date_time(
        &self,
        locale: &Locale,
        value: &DateTime<Utc>,
        options: &DateTimeOptions,
    ) -> Result<String, FormatterError>;

    fn format_list(
        &self,
        locale: &Locale,
        items: &[String],
        options: &ListOptions,
    ) -> Result<String, FormatterError>;

    fn format_number(
        &self,
        locale: &Locale,
        value: NumberInput,
        options: &NumberOptions,
    ) -> Result<String, FormatterError>;

    /// The CLDR plural category name for `value`.
    fn plural_category(
        &self,
        locale: &Locale,
        value: f64,
        options: &PluralOptions,
    ) -> Result<&'static str, FormatterError>;

    fn format_relative_time(
        &self,
        locale: &Locale,
        input: RelativeTimeInput,
        options: &RelativeTimeOptions,
    ) -> Result<String, FormatterError>;
}

/// The outcome of a plural lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralSelection<'a> {
    /// The validated number.
    pub value: f64,
    /// The CLDR category it falls into.
    pub category: &'static str,
    /// The `$plural` entry for that category, if any.
    pub variant: Option<&'a str>,
}

/// Validate a plural argument and look up its category's variant.
pub fn select_plural<'a>(
    formatter: &dyn LocaleFormatter,
    locale: &Locale,
    raw: &Value,
    options: &PluralOptions,
    categories: Option<&'a BTreeMap<String, String>>,
) -> Result<PluralSelection<'a>, FormatError> {
    let value = validate_plural(raw)?;
    let category = formatter
        .plural_category(locale, value, options)
        .map_err(|e| e.for_kind(FormatKind::Plural))?;
    let variant = categories
        .and_then(|map| map.get(category))
        .map(String::as_str);
    Ok(PluralSelection {
        value,
        category,
        variant,
    })
}

/// Validate and format a raw argument according to `spec`.
///
/// ```
/// use glossa::format::{IcuFormatter, format_value};
/// use glossa::{FormatSpec, Value};
/// use icu_locale_core::locale;
///
/// let spec = FormatSpec::Number(Default::default());
/// let out = format_value(&IcuFormatter, &locale!("en-US"), &Value::from(1234.5), &spec);
/// assert_eq!(out.unwrap(), "1,234.5");
///
/// let err = format_value(&IcuFormatter, &locale!("en-US"), &Value::from("abc"), &spec);
/// assert!(err.is_err());
/// ```
pub fn format_value(
    formatter: &dyn LocaleFormatter,
    locale: &Locale,
    raw: &Value,
    spec: &FormatSpec,
) -> Result<String, FormatError> {
    let kind = spec.kind();
    match spec {
        FormatSpec::DateTime(options) => {
            let value = validate_date_time(raw)?;
            formatter.format_date_time(locale, &value, options)
        }
        FormatSpec::List(options) => {
            let items = validate_list(raw)?;
            formatter.format_list(locale, &items, options)
        }
        FormatSpec::Number(options) => {
            let value = validate_number(raw)?;
            formatter.format_number(locale, value, options)
        }
        FormatSpec::Plural {
            options,
            categories,
        } => {
            let selection = select_plural(formatter, locale, raw, options, categories.as_ref())?;
            Ok(selection
                .variant
                .unwrap_or(selection.category)
                .to_string())
        }
        FormatSpec::RelativeTime(options) => {
            let input = validate_relative_time(raw)?;
            formatter.format_relative_time(locale, input, options)
        }
    }
    .map_err(|e| e.for_kind(kind))
}
