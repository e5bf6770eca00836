//! Date and time formatting through ICU field sets.
//!
//! `dateStyle` and `timeStyle` pick ICU lengths; ICU4X has no separate
//! "full" length, so `full` renders like `long`. With neither style, a
//! short numeric date with a four-digit year is produced, matching
//! `Intl.DateTimeFormat` defaults. All values are rendered in UTC.
//!
//! Arguments may span the whole `Date` range of ±8.64e15 ms, but only years
//! -9999 through 9999 can be rendered. Dates outside that window fail with a
//! formatter error.

use std::cell::RefCell;
use std::ops::RangeInclusive;

use chrono::{DateTime as ChronoDateTime, Datelike, Timelike, Utc};
use icu_calendar::{Date, Iso};
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets::{
    self,
    enums::{DateAndTimeFieldSet, DateFieldSet, TimeFieldSet},
};
use icu_datetime::input::{DateTime, Time};
use icu_datetime::options::{Length, YearStyle};
use icu_locale_core::Locale;

use super::FormatterError;
use super::cache::{Cache, with_cached};
use crate::types::{DateTimeOptions, DateTimeStyle};

/// A formatter for one of the three field set shapes.
enum StyledFormatter {
    Date(DateTimeFormatter<DateFieldSet>),
    Time(DateTimeFormatter<TimeFieldSet>),
    DateAndTime(DateTimeFormatter<DateAndTimeFieldSet>),
}

impl StyledFormatter {
    fn format(&self, value: &DateTime<Iso>) -> String {
        match self {
            StyledFormatter::Date(f) => f.format(value).to_string(),
            StyledFormatter::Time(f) => f.format(value).to_string(),
            StyledFormatter::DateAndTime(f) => f.format(value).to_string(),
        }
    }
}

/// Years the ICU calendar accepts.
const FORMATTABLE_YEARS: RangeInclusive<i32> = -9999..=9999;

type StyleKey = (Locale, Option<DateTimeStyle>, Option<DateTimeStyle>);

thread_local! {
    static DATE_TIME_FORMATTER_CACHE: Cache<StyleKey, StyledFormatter> =
        const { RefCell::new(Vec::new()) };
}

fn length(style: DateTimeStyle) -> Length {
    match style {
        DateTimeStyle::Full | DateTimeStyle::Long => Length::Long,
        DateTimeStyle::Medium => Length::Medium,
        DateTimeStyle::Short => Length::Short,
    }
}

fn build_formatter(
    (locale, date_style, time_style): &StyleKey,
) -> Result<StyledFormatter, FormatterError> {
    let prefs = locale.clone().into();
    let formatter = match (date_style, time_style) {
        (None, None) => {
            let ymd = fieldsets::YMD::short().with_year_style(YearStyle::Full);
            DateTimeFormatter::try_new(prefs, DateFieldSet::YMD(ymd)).map(StyledFormatter::Date)
        }
        (Some(date), None) => {
            let ymd = fieldsets::YMD::for_length(length(*date));
            DateTimeFormatter::try_new(prefs, DateFieldSet::YMD(ymd)).map(StyledFormatter::Date)
        }
        (None, Some(time)) => {
            let t = match time {
                DateTimeStyle::Short => fieldsets::T::hm(),
                DateTimeStyle::Medium | DateTimeStyle::Long | DateTimeStyle::Full => {
                    fieldsets::T::hms()
                }
            };
            DateTimeFormatter::try_new(prefs, TimeFieldSet::T(t.with_length(length(*time))))
                .map(StyledFormatter::Time)
        }
        (Some(date), Some(time)) => {
            let ymd = fieldsets::YMD::for_length(length(*date));
            let ymdt = match time {
                DateTimeStyle::Short => ymd.with_time_hm(),
                DateTimeStyle::Medium | DateTimeStyle::Long | DateTimeStyle::Full => {
                    ymd.with_time_hms()
                }
            };
            DateTimeFormatter::try_new(prefs, DateAndTimeFieldSet::YMDT(ymdt))
                .map(StyledFormatter::DateAndTime)
        }
    };
    formatter.map_err(|e| FormatterError::new(format!("no date-time data for '{locale}': {e}")))
}

/// Convert a UTC timestamp to an ISO calendar date-time.
fn to_icu(value: &ChronoDateTime<Utc>) -> Result<DateTime<Iso>, FormatterError> {
    if !FORMATTABLE_YEARS.contains(&value.year()) {
        return Err(FormatterError::new(format!(
            "date {value} is outside the formattable years {}..={}",
            FORMATTABLE_YEARS.start(),
            FORMATTABLE_YEARS.end()
        )));
    }
    let out_of_range = || FormatterError::new(format!("date {value} is out of range"));
    let month = u8::try_from(value.month()).map_err(|_| out_of_range())?;
    let day = u8::try_from(value.day()).map_err(|_| out_of_range())?;
    let date = Date::try_new_iso(value.year(), month, day).map_err(|_| out_of_range())?;

    let hour = u8::try_from(value.hour()).map_err(|_| out_of_range())?;
    let minute = u8::try_from(value.minute()).map_err(|_| out_of_range())?;
    let second = u8::try_from(value.second()).map_err(|_| out_of_range())?;
    let nanos = value.timestamp_subsec_nanos().min(999_999_999);
    let time = Time::try_new(hour, minute, second, nanos).map_err(|_| out_of_range())?;

    Ok(DateTime { date, time })
}

/// Format a UTC timestamp for a locale.
pub(crate) fn format_date_time(
    locale: &Locale,
    value: &ChronoDateTime<Utc>,
    options: &DateTimeOptions,
) -> Result<String, FormatterError> {
    let input = to_icu(value)?;
    with_cached(
        &DATE_TIME_FORMATTER_CACHE,
        (locale.clone(), options.date_style, options.time_style),
        build_formatter,
        |formatter| formatter.format(&input),
    )
}

#[cfg(test)]
mod tests {
    use icu_locale_core::locale;

    use super::*;

    fn at(millis: i64) -> ChronoDateTime<Utc> {
        ChronoDateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn default_is_numeric_date() {
        let en = locale!("en-US");
        let out = format_date_time(&en, &at(1_705_276_800_000), &DateTimeOptions::default());
        assert_eq!(out.unwrap(), "1/15/2024");
    }

    #[test]
    fn long_date_names_the_month() {
        let en = locale!("en-US");
        let options = DateTimeOptions {
            date_style: Some(DateTimeStyle::Long),
            ..DateTimeOptions::default()
        };
        let out = format_date_time(&en, &at(1_705_276_800_000), &options).unwrap();
        assert!(out.contains("January"), "{out}");
        assert!(out.contains("2024"), "{out}");
    }

    #[test]
    fn time_only_uses_utc() {
        let en = locale!("en-US");
        let options = DateTimeOptions {
            time_style: Some(DateTimeStyle::Short),
            ..DateTimeOptions::default()
        };
        // 2024-01-15T13:45:00Z
        let out = format_date_time(&en, &at(1_705_326_300_000), &options).unwrap();
        assert!(out.starts_with("1:45"), "{out}");
    }
}
