use chrono::{DateTime, Utc};
use icu_locale_core::Locale;

use super::{FormatterError, LocaleFormatter, date_time, list, number, plural, relative_time};
use crate::schema::input::{NumberInput, RelativeTimeInput};
use crate::types::{
    DateTimeOptions, ListOptions, NumberOptions, PluralOptions, RelativeTimeOptions,
};

/// Formats values with ICU4X compiled data.
///
/// Stateless apart from per-thread formatter caches, so a single value can
/// be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IcuFormatter;

impl LocaleFormatter for IcuFormatter {
    fn format_date_time(
        &self,
        locale: &Locale,
        value: &DateTime<Utc>,
        options: &DateTimeOptions,
    ) -> Result<String, FormatterError> {
        date_time::format_date_time(locale, value, options)
    }

    fn format_list(
        &self,
        locale: &Locale,
        items: &[String],
        options: &ListOptions,
    ) -> Result<String, FormatterError> {
        list::format_list(locale, items, options)
    }

    fn format_number(
        &self,
        locale: &Locale,
        value: NumberInput,
        options: &NumberOptions,
    ) -> Result<String, FormatterError> {
        number::format_number(locale, value, options)
    }

    fn plural_category(
        &self,
        locale: &Locale,
        value: f64,
        options: &PluralOptions,
    ) -> Result<&'static str, FormatterError> {
        plural::plural_category(locale, value, options.plural_type)
    }

    fn format_relative_time(
        &self,
        locale: &Locale,
        input: RelativeTimeInput,
        options: &RelativeTimeOptions,
    ) -> Result<String, FormatterError> {
        relative_time::format_relative_time(locale, input, options)
    }
}
