//! Format kinds and their option bags.
//!
//! Option structs mirror ECMA-402 option names (`camelCase` in JSON) so a
//! glossary written for `Intl` formatters reads the same here. Unknown option
//! names are ignored.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The formatting applied to a template parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatKind {
    DateTime,
    List,
    Number,
    Plural,
    RelativeTime,
}

impl FormatKind {
    /// All supported kinds, in tag order.
    pub const ALL: [FormatKind; 5] = [
        FormatKind::DateTime,
        FormatKind::List,
        FormatKind::Number,
        FormatKind::Plural,
        FormatKind::RelativeTime,
    ];

    /// The `$format` tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatKind::DateTime => "date-time",
            FormatKind::List => "list",
            FormatKind::Number => "number",
            FormatKind::Plural => "plural",
            FormatKind::RelativeTime => "relative-time",
        }
    }

    /// Look up a kind by its `$format` tag.
    pub fn from_tag(tag: &str) -> Option<FormatKind> {
        FormatKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A parameter's formatting, with kind-specific options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    DateTime(DateTimeOptions),
    List(ListOptions),
    Number(NumberOptions),
    Plural {
        options: PluralOptions,
        /// Plural category name (`one`, `other`, ...) to message variant.
        categories: Option<BTreeMap<String, String>>,
    },
    RelativeTime(RelativeTimeOptions),
}

impl FormatSpec {
    pub fn kind(&self) -> FormatKind {
        match self {
            FormatSpec::DateTime(_) => FormatKind::DateTime,
            FormatSpec::List(_) => FormatKind::List,
            FormatSpec::Number(_) => FormatKind::Number,
            FormatSpec::Plural { .. } => FormatKind::Plural,
            FormatSpec::RelativeTime(_) => FormatKind::RelativeTime,
        }
    }
}

/// Length of a date or time rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeStyle {
    Full,
    Long,
    Medium,
    Short,
}

/// Options for `date-time` parameters.
///
/// With neither style set, a short numeric date is produced. Only the `UTC`
/// time zone is supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateTimeOptions {
    pub date_style: Option<DateTimeStyle>,
    pub time_style: Option<DateTimeStyle>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Conjunction,
    Disjunction,
    Unit,
}

/// Width of list and relative-time renderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

/// Options for `list` parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub style: ListStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
    Currency,
}

/// Options for `number` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOptions {
    pub style: NumberStyle,
    /// ISO 4217 currency code, required when `style` is `currency`.
    pub currency: Option<String>,
    pub minimum_integer_digits: Option<u8>,
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
    pub use_grouping: Option<bool>,
}

impl NumberOptions {
    /// Checks option combinations that `Intl.NumberFormat` rejects.
    pub fn check(&self) -> Result<(), String> {
        if self.style == NumberStyle::Currency {
            match &self.currency {
                None => return Err("currency style requires a currency code".to_string()),
                Some(code) if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) => {
                    return Err(format!("invalid currency code '{code}'"));
                }
                Some(_) => {}
            }
        }
        if let Some(min) = self.minimum_integer_digits {
            if !(1..=21).contains(&min) {
                return Err(format!("minimumIntegerDigits {min} is out of range 1..=21"));
            }
        }
        for (name, digits) in [
            ("minimumFractionDigits", self.minimum_fraction_digits),
            ("maximumFractionDigits", self.maximum_fraction_digits),
        ] {
            if let Some(digits) = digits {
                if digits > 20 {
                    return Err(format!("{name} {digits} is out of range 0..=20"));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.minimum_fraction_digits, self.maximum_fraction_digits)
        {
            if min > max {
                return Err(format!(
                    "minimumFractionDigits {min} exceeds maximumFractionDigits {max}"
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralType {
    #[default]
    Cardinal,
    Ordinal,
}

/// Options for `plural` parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct PluralOptions {
    #[serde(rename = "type")]
    pub plural_type: PluralType,
}

/// Whether relative times may use phrases like "yesterday".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numeric {
    #[default]
    Always,
    Auto,
}

/// Options for `relative-time` parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct RelativeTimeOptions {
    pub numeric: Numeric,
    pub style: ListStyle,
}
