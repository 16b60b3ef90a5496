//! Field-level decode policies for loosely-typed server rows.
//!
//! Used through `#[serde(deserialize_with = ...)]` on the record types:
//!
//! * [`lenient_f64`]: anything that is not a finite number becomes `0.0`.
//! * [`strict_f64`]: anything that is not a finite number is a decode error.
//! * [`lenient_date`]: unparsable dates become `None`.
//! * [`lenient_label`]: null becomes `None`, scalars become their text form.
//!
//! Lenient fields must also carry `#[serde(default)]` so a missing key takes
//! the same path as a null one.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// Interpret a JSON value as a finite number.
///
/// Numbers pass through, booleans map to `1`/`0`, strings are trimmed and
/// parsed (an empty string is `0`, unsigned `0x`/`0o`/`0b` prefixes are read
/// as hex, octal and binary integers). Everything else is `None`.
///
/// Infinite and NaN results are `None` as well, including the literal
/// strings `"Infinity"` and `"NaN"`, so lenient fields store them as `0`.
pub fn number_from(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_numeric(s.trim()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    n.filter(|n| n.is_finite())
}

fn parse_numeric(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return s.parse::<f64>().ok(),
    };
    u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64)
}

/// Interpret a JSON value as a calendar date.
///
/// Strings may be `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps or naive
/// `YYYY-MM-DD[T ]HH:MM:SS[.fff]` timestamps. Numbers are milliseconds since
/// the Unix epoch, taken in UTC.
pub fn date_from(value: &Value) -> Option<NaiveDate> {
    if let Value::Number(n) = value {
        let millis = n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?;
        return DateTime::from_timestamp_millis(millis).map(|ts| ts.date_naive());
    }

    let s = value.as_str()?.trim();
    if let Some(date) = ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|ts| ts.date())
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value).unwrap_or_else(|| {
        tracing::trace!(?value, "non-numeric value decoded as zero");
        0.0
    }))
}

pub fn strict_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    number_from(&value).ok_or_else(|| D::Error::custom(format!("expected a number, found {value}")))
}

pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(date_from(&value))
}

pub fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
