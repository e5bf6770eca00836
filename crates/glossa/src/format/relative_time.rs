//! Relative time phrases ("in 3 days", "2 hours ago").
//!
//! ICU4X 2 has no stable relative time formatter, so phrases come from
//! built-in CLDR-derived tables for English, German, French and Spanish.
//! Other languages use the English table. Amounts are formatted with the
//! locale's decimal digits and unit names agree with the locale's plural
//! rules.

use icu_locale_core::Locale;

use super::FormatterError;
use super::number::format_number;
use super::plural::plural_category;
use crate::schema::input::{NumberInput, RelativeTimeInput, RelativeTimeUnit};
use crate::types::{ListStyle, NumberOptions, Numeric, PluralType, RelativeTimeOptions};

/// Unit names in `[singular, plural]` form, in [`RelativeTimeUnit::ALL`] order.
type UnitNames = [[&'static str; 2]; 8];

struct Phrases {
    /// Pattern for future times; `{0}` is the amount with its unit.
    future: &'static str,
    /// Pattern for past times.
    past: &'static str,
    long: UnitNames,
    short: UnitNames,
    /// Replacements for -1, 0 and 1 when `numeric` is `auto`.
    auto: fn(RelativeTimeUnit, i8) -> Option<&'static str>,
}

const EN: Phrases = Phrases {
    future: "in {0}",
    past: "{0} ago",
    long: [
        ["year", "years"],
        ["quarter", "quarters"],
        ["month", "months"],
        ["week", "weeks"],
        ["day", "days"],
        ["hour", "hours"],
        ["minute", "minutes"],
        ["second", "seconds"],
    ],
    short: [
        ["yr.", "yr."],
        ["qtr.", "qtrs."],
        ["mo.", "mo."],
        ["wk.", "wk."],
        ["day", "days"],
        ["hr.", "hr."],
        ["min.", "min."],
        ["sec.", "sec."],
    ],
    auto: en_auto,
};

const DE: Phrases = Phrases {
    future: "in {0}",
    past: "vor {0}",
    long: [
        ["Jahr", "Jahren"],
        ["Quartal", "Quartalen"],
        ["Monat", "Monaten"],
        ["Woche", "Wochen"],
        ["Tag", "Tagen"],
        ["Stunde", "Stunden"],
        ["Minute", "Minuten"],
        ["Sekunde", "Sekunden"],
    ],
    short: [
        ["Jahr", "Jahren"],
        ["Quart.", "Quart."],
        ["Monat", "Monaten"],
        ["Woche", "Wochen"],
        ["Tag", "Tagen"],
        ["Std.", "Std."],
        ["Min.", "Min."],
        ["Sek.", "Sek."],
    ],
    auto: de_auto,
};

const FR: Phrases = Phrases {
    future: "dans {0}",
    past: "il y a {0}",
    long: [
        ["an", "ans"],
        ["trimestre", "trimestres"],
        ["mois", "mois"],
        ["semaine", "semaines"],
        ["jour", "jours"],
        ["heure", "heures"],
        ["minute", "minutes"],
        ["seconde", "secondes"],
    ],
    short: [
        ["a", "a"],
        ["trim.", "trim."],
        ["m.", "m."],
        ["sem.", "sem."],
        ["j", "j"],
        ["h", "h"],
        ["min", "min"],
        ["s", "s"],
    ],
    auto: fr_auto,
};

const ES: Phrases = Phrases {
    future: "dentro de {0}",
    past: "hace {0}",
    long: [
        ["año", "años"],
        ["trimestre", "trimestres"],
        ["mes", "meses"],
        ["semana", "semanas"],
        ["día", "días"],
        ["hora", "horas"],
        ["minuto", "minutos"],
        ["segundo", "segundos"],
    ],
    short: [
        ["a", "a"],
        ["trim.", "trim."],
        ["m.", "m."],
        ["sem.", "sem."],
        ["d", "d"],
        ["h", "h"],
        ["min", "min"],
        ["s", "s"],
    ],
    auto: es_auto,
};

fn en_auto(unit: RelativeTimeUnit, offset: i8) -> Option<&'static str> {
    use RelativeTimeUnit::{Day, Hour, Minute, Month, Quarter, Second, Week, Year};
    Some(match (unit, offset) {
        (Day, -1) => "yesterday",
        (Day, 0) => "today",
        (Day, 1) => "tomorrow",
        (Year, -1) => "last year",
        (Year, 0) => "this year",
        (Year, 1) => "next year",
        (Quarter, -1) => "last quarter",
        (Quarter, 0) => "this quarter",
        (Quarter, 1) => "next quarter",
        (Month, -1) => "last month",
        (Month, 0) => "this month",
        (Month, 1) => "next month",
        (Week, -1) => "last week",
        (Week, 0) => "this week",
        (Week, 1) => "next week",
        (Hour, 0) => "this hour",
        (Minute, 0) => "this minute",
        (Second, 0) => "now",
        _ => return None,
    })
}

fn de_auto(unit: RelativeTimeUnit, offset: i8) -> Option<&'static str> {
    use RelativeTimeUnit::{Day, Second};
    Some(match (unit, offset) {
        (Day, -1) => "gestern",
        (Day, 0) => "heute",
        (Day, 1) => "morgen",
        (Second, 0) => "jetzt",
        _ => return None,
    })
}

fn fr_auto(unit: RelativeTimeUnit, offset: i8) -> Option<&'static str> {
    use RelativeTimeUnit::{Day, Second};
    Some(match (unit, offset) {
        (Day, -1) => "hier",
        (Day, 0) => "aujourd’hui",
        (Day, 1) => "demain",
        (Second, 0) => "maintenant",
        _ => return None,
    })
}

fn es_auto(unit: RelativeTimeUnit, offset: i8) -> Option<&'static str> {
    use RelativeTimeUnit::{Day, Second};
    Some(match (unit, offset) {
        (Day, -1) => "ayer",
        (Day, 0) => "hoy",
        (Day, 1) => "mañana",
        (Second, 0) => "ahora",
        _ => return None,
    })
}

fn phrases(language: &str) -> &'static Phrases {
    match language {
        "de" => &DE,
        "fr" => &FR,
        "es" => &ES,
        _ => &EN,
    }
}

fn unit_index(unit: RelativeTimeUnit) -> usize {
    RelativeTimeUnit::ALL
        .iter()
        .position(|u| *u == unit)
        .unwrap_or_default()
}

/// Format a signed amount of a unit relative to now.
///
/// Negative amounts (including `-0`) are in the past.
pub(crate) fn format_relative_time(
    locale: &Locale,
    input: RelativeTimeInput,
    options: &RelativeTimeOptions,
) -> Result<String, FormatterError> {
    let table = phrases(locale.id.language.as_str());
    let RelativeTimeInput { value, unit } = input;

    if options.numeric == Numeric::Auto && value.fract() == 0.0 && value.abs() <= 1.0 {
        let offset = if value > 0.0 {
            1
        } else if value < 0.0 {
            -1
        } else {
            0
        };
        if let Some(phrase) = (table.auto)(unit, offset) {
            return Ok(phrase.to_string());
        }
    }

    let amount = value.abs();
    let digits = format_number(locale, NumberInput::Finite(amount), &NumberOptions::default())?;
    let category = plural_category(locale, amount, PluralType::Cardinal)?;
    let names = match options.style {
        ListStyle::Long => &table.long,
        ListStyle::Short | ListStyle::Narrow => &table.short,
    };
    let [singular, plural] = names[unit_index(unit)];
    let name = if category == "one" { singular } else { plural };
    let pattern = if value.is_sign_negative() { table.past } else { table.future };
    Ok(pattern.replace("{0}", &format!("{digits} {name}")))
}
