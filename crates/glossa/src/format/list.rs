use std::cell::RefCell;

use icu_list::ListFormatter;
use icu_list::options::{ListFormatterOptions, ListLength};
use icu_locale_core::Locale;

use super::FormatterError;
use super::cache::{Cache, with_cached};
use crate::types::{ListOptions, ListStyle, ListType};

thread_local! {
    static LIST_FORMATTER_CACHE: Cache<(Locale, ListOptions), ListFormatter> =
        const { RefCell::new(Vec::new()) };
}

fn build_formatter((locale, options): &(Locale, ListOptions)) -> Result<ListFormatter, FormatterError> {
    let length = match options.style {
        ListStyle::Long => ListLength::Wide,
        ListStyle::Short => ListLength::Short,
        ListStyle::Narrow => ListLength::Narrow,
    };
    let prefs = locale.clone().into();
    let icu_options = ListFormatterOptions::default().with_length(length);
    let formatter = match options.list_type {
        ListType::Conjunction => ListFormatter::try_new_and(prefs, icu_options),
        ListType::Disjunction => ListFormatter::try_new_or(prefs, icu_options),
        ListType::Unit => ListFormatter::try_new_unit(prefs, icu_options),
    };
    formatter.map_err(|e| FormatterError::new(format!("no list data for '{locale}': {e}")))
}

/// Join strings with the locale's list pattern, e.g. "a, b, and c".
pub(crate) fn format_list(
    locale: &Locale,
    items: &[String],
    options: &ListOptions,
) -> Result<String, FormatterError> {
    with_cached(
        &LIST_FORMATTER_CACHE,
        (locale.clone(), *options),
        build_formatter,
        |formatter| formatter.format(items.iter().map(String::as_str)).to_string(),
    )
}
