//! Validators for runtime arguments of formatted parameters.
//!
//! Each validator checks one argument against the shape its format expects
//! and converts it to the input type of the matching formatter primitive.

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};

use super::{SchemaError, field_path, index_path};
use crate::parser::parse_js_number;
use crate::types::Value;

const ROOT: &str = "value";

/// Largest distance from the epoch, in milliseconds, that a date may have.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

fn invalid(path: impl Into<String>, expected: &str, value: &Value) -> SchemaError {
    SchemaError::new(
        path,
        format!("expected {expected}, received {}", value.type_name()),
    )
}

/// Validate a `date-time` argument: a date, or epoch milliseconds.
///
/// The accepted range is the JavaScript `Date` range of ±8.64e15 ms. The
/// formatter renders a narrower window of years; see `format::date_time`.
pub fn validate_date_time(value: &Value) -> Result<DateTime<Utc>, SchemaError> {
    match value {
        Value::DateTime(dt) => Ok(*dt),
        Value::Number(_) | Value::Float(_) => {
            let millis = value.as_float().unwrap_or(f64::NAN);
            if !millis.is_finite() {
                return Err(SchemaError::new(ROOT, "expected a finite timestamp"));
            }
            if millis.abs() > MAX_EPOCH_MILLIS {
                return Err(SchemaError::new(ROOT, "timestamp is out of range"));
            }
            DateTime::from_timestamp_millis(millis.trunc() as i64)
                .ok_or_else(|| SchemaError::new(ROOT, "timestamp is out of range"))
        }
        other => Err(invalid(ROOT, "date or number", other)),
    }
}

/// Validate a `list` argument: a list of strings.
pub fn validate_list(value: &Value) -> Result<Vec<String>, SchemaError> {
    let items = value
        .as_list()
        .ok_or_else(|| invalid(ROOT, "array", value))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(invalid(index_path(ROOT, i), "string", other)),
        })
        .collect()
}

/// A validated `number` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    Finite(f64),
    Infinite { negative: bool },
}

impl NumberInput {
    pub fn as_f64(self) -> f64 {
        match self {
            NumberInput::Finite(n) => n,
            NumberInput::Infinite { negative: false } => f64::INFINITY,
            NumberInput::Infinite { negative: true } => f64::NEG_INFINITY,
        }
    }
}

/// JavaScript `Number(value)`, or `None` where it would be `NaN`.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        Value::String(s) => parse_js_number(s),
        Value::DateTime(dt) => Some(dt.timestamp_millis() as f64),
        Value::List(items) => match items.as_slice() {
            [] => Some(0.0),
            [Value::Null] => Some(0.0),
            [Value::List(_) | Value::Map(_)] => None,
            [single] => coerce_number(single),
            _ => None,
        },
        Value::Map(_) => None,
    }
}

/// Validate a `number` argument.
///
/// Anything JavaScript's `Number()` turns into a finite number is accepted.
/// Infinity is accepted only when spelled exactly `Infinity`, `+Infinity` or
/// `-Infinity`.
///
/// ```
/// use glossa::Value;
/// use glossa::schema::input::{NumberInput, validate_number};
///
/// assert_eq!(validate_number(&Value::from(" 42 ")), Ok(NumberInput::Finite(42.0)));
/// assert_eq!(validate_number(&Value::from(true)), Ok(NumberInput::Finite(1.0)));
/// assert_eq!(
///     validate_number(&Value::from("-Infinity")),
///     Ok(NumberInput::Infinite { negative: true })
/// );
/// assert!(validate_number(&Value::from("abc")).is_err());
/// ```
pub fn validate_number(value: &Value) -> Result<NumberInput, SchemaError> {
    if let Value::String(s) = value {
        match s.as_str() {
            "Infinity" | "+Infinity" => return Ok(NumberInput::Infinite { negative: false }),
            "-Infinity" => return Ok(NumberInput::Infinite { negative: true }),
            _ => {}
        }
    }
    match coerce_number(value) {
        Some(n) if n.is_finite() => Ok(NumberInput::Finite(n)),
        Some(_) => Err(SchemaError::new(ROOT, "expected a finite number")),
        None => Err(SchemaError::new(
            ROOT,
            format!("expected number, received {} '{value}'", value.type_name()),
        )),
    }
}

/// Validate a `plural` argument: a finite number, without coercion.
pub fn validate_plural(value: &Value) -> Result<f64, SchemaError> {
    match value.as_float() {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(SchemaError::new(ROOT, "expected a finite number")),
        None => Err(invalid(ROOT, "number", value)),
    }
}

/// Unit of a relative time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTimeUnit {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl RelativeTimeUnit {
    pub const ALL: [RelativeTimeUnit; 8] = [
        RelativeTimeUnit::Year,
        RelativeTimeUnit::Quarter,
        RelativeTimeUnit::Month,
        RelativeTimeUnit::Week,
        RelativeTimeUnit::Day,
        RelativeTimeUnit::Hour,
        RelativeTimeUnit::Minute,
        RelativeTimeUnit::Second,
    ];

    /// The singular unit name.
    pub fn as_str(self) -> &'static str {
        match self {
            RelativeTimeUnit::Year => "year",
            RelativeTimeUnit::Quarter => "quarter",
            RelativeTimeUnit::Month => "month",
            RelativeTimeUnit::Week => "week",
            RelativeTimeUnit::Day => "day",
            RelativeTimeUnit::Hour => "hour",
            RelativeTimeUnit::Minute => "minute",
            RelativeTimeUnit::Second => "second",
        }
    }

    /// Parse a unit name in singular or plural form.
    pub fn parse(name: &str) -> Option<RelativeTimeUnit> {
        let singular = name.strip_suffix('s').unwrap_or(name);
        RelativeTimeUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == singular)
    }
}

impl Display for RelativeTimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A validated `relative-time` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeTimeInput {
    pub value: f64,
    pub unit: RelativeTimeUnit,
}

/// Validate a `relative-time` argument: `{ value: number, unit: string }`.
///
/// ```
/// use glossa::Value;
/// use glossa::schema::input::{RelativeTimeUnit, validate_relative_time};
///
/// let raw = Value::from(serde_json::json!({ "value": -1, "unit": "days" }));
/// let input = validate_relative_time(&raw).unwrap();
/// assert_eq!(input.value, -1.0);
/// assert_eq!(input.unit, RelativeTimeUnit::Day);
/// ```
pub fn validate_relative_time(value: &Value) -> Result<RelativeTimeInput, SchemaError> {
    let map = value
        .as_map()
        .ok_or_else(|| invalid(ROOT, "object", value))?;

    let value_path = field_path(ROOT, "value");
    let amount = match map.get("value") {
        None => return Err(SchemaError::new(value_path, "required field is missing")),
        Some(raw) => match raw.as_float() {
            Some(n) if n.is_finite() => n,
            Some(_) => return Err(SchemaError::new(value_path, "expected a finite number")),
            None => return Err(invalid(value_path, "number", raw)),
        },
    };

    let unit_path = field_path(ROOT, "unit");
    let unit = match map.get("unit") {
        None => return Err(SchemaError::new(unit_path, "required field is missing")),
        Some(Value::String(name)) => RelativeTimeUnit::parse(name).ok_or_else(|| {
            SchemaError::new(&unit_path, format!("unknown relative time unit '{name}'"))
        })?,
        Some(other) => return Err(invalid(unit_path, "string", other)),
    };

    Ok(RelativeTimeInput {
        value: amount,
        unit,
    })
}
