//! CLDR plural category resolution.
//!
//! English distinguishes "one" and "other", Russian adds "few" and "many",
//! and Arabic uses all six categories. Rules are cached per thread per
//! locale and rule type.

use std::cell::RefCell;

use fixed_decimal::{Decimal, FloatPrecision};
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use super::FormatterError;
use super::cache::{Cache, with_cached};
use crate::types::PluralType;

/// The six CLDR plural category names.
pub const CATEGORIES: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

thread_local! {
    static PLURAL_RULES_CACHE: Cache<(Locale, PluralType), PluralRules> =
        const { RefCell::new(Vec::new()) };
}

fn build_rules((locale, plural_type): &(Locale, PluralType)) -> Result<PluralRules, FormatterError> {
    let rule_type = match plural_type {
        PluralType::Cardinal => PluralRuleType::Cardinal,
        PluralType::Ordinal => PluralRuleType::Ordinal,
    };
    PluralRules::try_new(locale.clone().into(), rule_type.into())
        .map_err(|e| FormatterError::new(format!("no plural rules for '{locale}': {e}")))
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a finite number.
///
/// Integers use the integer operands; other values are categorized with
/// their visible fraction digits, so `1.5` is "other" in English.
pub(crate) fn plural_category(
    locale: &Locale,
    n: f64,
    plural_type: PluralType,
) -> Result<&'static str, FormatterError> {
    let integral = n.fract() == 0.0 && n.abs() < 9.0e15;
    let decimal = if integral {
        None
    } else {
        Some(
            Decimal::try_from_f64(n, FloatPrecision::RoundTrip)
                .map_err(|_| FormatterError::new(format!("cannot categorize {n}")))?,
        )
    };
    with_cached(
        &PLURAL_RULES_CACHE,
        (locale.clone(), plural_type),
        build_rules,
        |rules| match &decimal {
            None => category_str(rules.category_for(n as i64)),
            Some(decimal) => category_str(rules.category_for(decimal)),
        },
    )
}
