//! Decimal, percent and currency formatting.
//!
//! Digits and separators come from ICU's `DecimalFormatter`. Percent and
//! currency affixes come from small built-in tables, since ICU4X 2 ships no
//! stable currency formatter.

use std::cell::RefCell;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_decimal::DecimalFormatter;
use icu_decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu_locale_core::Locale;

use super::FormatterError;
use super::cache::{Cache, with_cached};
use crate::schema::input::NumberInput;
use crate::types::{NumberOptions, NumberStyle};

thread_local! {
    static DECIMAL_FORMATTER_CACHE: Cache<(Locale, bool), DecimalFormatter> =
        const { RefCell::new(Vec::new()) };
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";
const INFINITY: &str = "∞";

/// `(code, symbol, minor unit digits)`.
const CURRENCIES: &[(&str, &str, u8)] = &[
    ("AUD", "A$", 2),
    ("BRL", "R$", 2),
    ("CAD", "CA$", 2),
    ("CHF", "CHF", 2),
    ("CNY", "CN¥", 2),
    ("EUR", "€", 2),
    ("GBP", "£", 2),
    ("INR", "₹", 2),
    ("JPY", "¥", 0),
    ("KRW", "₩", 0),
    ("MXN", "MX$", 2),
    ("USD", "$", 2),
];

/// Languages that write the currency symbol after the amount.
const CURRENCY_SUFFIX_LANGUAGES: &[&str] = &["cs", "de", "es", "fi", "fr", "it", "pl", "ru", "sv"];

fn currency_info(code: &str) -> (String, u8) {
    let upper = code.to_ascii_uppercase();
    CURRENCIES
        .iter()
        .find(|(c, _, _)| *c == upper)
        .map_or((upper.clone(), 2), |(_, symbol, digits)| {
            ((*symbol).to_string(), *digits)
        })
}

fn percent_suffix(language: &str) -> &'static str {
    match language {
        "fr" => "\u{202f}%",
        "cs" | "de" | "es" | "fi" | "ru" | "sv" => "\u{a0}%",
        _ => "%",
    }
}

fn build_formatter((locale, grouping): &(Locale, bool)) -> Result<DecimalFormatter, FormatterError> {
    let mut options = DecimalFormatterOptions::default();
    if !grouping {
        options.grouping_strategy = Some(GroupingStrategy::Never);
    }
    DecimalFormatter::try_new(locale.clone().into(), options)
        .map_err(|e| FormatterError::new(format!("no decimal data for '{locale}': {e}")))
}

/// Fraction digit bounds after applying `Intl.NumberFormat` defaults.
fn fraction_digits(options: &NumberOptions, default_min: u8, default_max: u8) -> (i16, i16) {
    let (min, max) = match (options.minimum_fraction_digits, options.maximum_fraction_digits) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, default_max.max(min)),
        (None, Some(max)) => (default_min.min(max), max),
        (None, None) => (default_min, default_max),
    };
    (i16::from(min), i16::from(max))
}

/// Format a non-negative finite number with the locale's digits.
fn format_digits(
    locale: &Locale,
    n: f64,
    options: &NumberOptions,
    (min_fraction, max_fraction): (i16, i16),
) -> Result<String, FormatterError> {
    let mut decimal = Decimal::try_from_f64(n, FloatPrecision::RoundTrip)
        .map_err(|_| FormatterError::new(format!("cannot represent {n} as a decimal")))?;
    if *decimal.magnitude_range().start() < -max_fraction {
        decimal.round(-max_fraction);
    }
    decimal.trim_end();
    decimal.pad_end(-min_fraction);
    if let Some(min_integer) = options.minimum_integer_digits {
        decimal.pad_start(i16::from(min_integer));
    }
    let grouping = options.use_grouping.unwrap_or(true);
    with_cached(
        &DECIMAL_FORMATTER_CACHE,
        (locale.clone(), grouping),
        build_formatter,
        |formatter| formatter.format(&decimal).to_string(),
    )
}

/// Format a number for a locale following `Intl.NumberFormat` conventions.
pub(crate) fn format_number(
    locale: &Locale,
    input: NumberInput,
    options: &NumberOptions,
) -> Result<String, FormatterError> {
    let value = input.as_f64();
    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    let language = locale.id.language.as_str();

    match options.style {
        NumberStyle::Decimal => {
            let digits = match input {
                NumberInput::Infinite { .. } => INFINITY.to_string(),
                NumberInput::Finite(n) => {
                    format_digits(locale, n.abs(), options, fraction_digits(options, 0, 3))?
                }
            };
            Ok(format!("{sign}{digits}"))
        }
        NumberStyle::Percent => {
            let digits = match input {
                NumberInput::Infinite { .. } => INFINITY.to_string(),
                NumberInput::Finite(n) => format_digits(
                    locale,
                    n.abs() * 100.0,
                    options,
                    fraction_digits(options, 0, 0),
                )?,
            };
            Ok(format!("{sign}{digits}{}", percent_suffix(language)))
        }
        NumberStyle::Currency => {
            let code = options
                .currency
                .as_deref()
                .ok_or_else(|| FormatterError::new("currency style requires a currency code"))?;
            let (symbol, minor_digits) = currency_info(code);
            let digits = match input {
                NumberInput::Infinite { .. } => INFINITY.to_string(),
                NumberInput::Finite(n) => format_digits(
                    locale,
                    n.abs(),
                    options,
                    fraction_digits(options, minor_digits, minor_digits),
                )?,
            };
            if CURRENCY_SUFFIX_LANGUAGES.contains(&language) {
                let space = if language == "fr" { NARROW_NBSP } else { NBSP };
                let space = if symbol.chars().all(|c| c.is_ascii_alphabetic()) { NBSP } else { space };
                Ok(format!("{sign}{digits}{space}{symbol}"))
            } else if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
                Ok(format!("{sign}{symbol}{NBSP}{digits}"))
            } else {
                Ok(format!("{sign}{symbol}{digits}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use icu_locale_core::locale;

    use super::*;

    fn decimal(n: f64) -> NumberInput {
        NumberInput::Finite(n)
    }

    #[test]
    fn default_fraction_digits() {
        let options = NumberOptions::default();
        assert_eq!(fraction_digits(&options, 0, 3), (0, 3));

        let options = NumberOptions {
            minimum_fraction_digits: Some(5),
            ..NumberOptions::default()
        };
        assert_eq!(fraction_digits(&options, 0, 3), (5, 5));

        let options = NumberOptions {
            maximum_fraction_digits: Some(1),
            ..NumberOptions::default()
        };
        assert_eq!(fraction_digits(&options, 2, 2), (1, 1));
    }

    #[test]
    fn english_decimals() {
        let en = locale!("en-US");
        let options = NumberOptions::default();
        assert_eq!(format_number(&en, decimal(1234.5), &options).unwrap(), "1,234.5");
        assert_eq!(format_number(&en, decimal(-42.0), &options).unwrap(), "-42");
        assert_eq!(format_number(&en, decimal(0.12345), &options).unwrap(), "0.123");
    }

    #[test]
    fn grouping_can_be_disabled() {
        let en = locale!("en-US");
        let options = NumberOptions {
            use_grouping: Some(false),
            ..NumberOptions::default()
        };
        assert_eq!(format_number(&en, decimal(1234567.0), &options).unwrap(), "1234567");
    }

    #[test]
    fn minimum_digits_pad() {
        let en = locale!("en");
        let options = NumberOptions {
            minimum_integer_digits: Some(3),
            minimum_fraction_digits: Some(2),
            ..NumberOptions::default()
        };
        assert_eq!(format_number(&en, decimal(7.5), &options).unwrap(), "007.50");
    }

    #[test]
    fn percent_and_currency() {
        let en = locale!("en-US");
        let percent = NumberOptions {
            style: NumberStyle::Percent,
            ..NumberOptions::default()
        };
        assert_eq!(format_number(&en, decimal(0.25), &percent).unwrap(), "25%");

        let usd = NumberOptions {
            style: NumberStyle::Currency,
            currency: Some("USD".to_string()),
            ..NumberOptions::default()
        };
        assert_eq!(format_number(&en, decimal(1234.5), &usd).unwrap(), "$1,234.50");
        assert_eq!(format_number(&en, decimal(-5.0), &usd).unwrap(), "-$5.00");

        let de = locale!("de-DE");
        let eur = NumberOptions {
            style: NumberStyle::Currency,
            currency: Some("EUR".to_string()),
            ..NumberOptions::default()
        };
        assert_eq!(format_number(&de, decimal(1234.5), &eur).unwrap(), "1.234,50\u{a0}€");
    }

    #[test]
    fn infinity() {
        let en = locale!("en");
        let options = NumberOptions::default();
        assert_eq!(
            format_number(&en, NumberInput::Infinite { negative: true }, &options).unwrap(),
            "-∞"
        );
    }
}
