//! Lenient field readers applied once while a candidate record is ingested.
//!
//! Analysis records arrive from an untyped store: numbers may be strings, blocks may be
//! JSON-encoded text, and any field may be `null` or missing. Every reader here degrades a
//! malformed value to the neutral default instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn parse_f64(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Reads ratios such as `0.42`, `"0.42"`, `"42%"` or `"약 42%"`; percent forms are scaled to 0-1.
pub(crate) fn parse_ratio(raw: &str) -> Option<f64> {
    if let Some(value) = parse_f64(raw) {
        return Some(value);
    }

    let value = first_number(raw)?;
    if raw.contains('%') {
        Some(value / 100.0)
    } else {
        Some(value)
    }
}

pub(crate) fn parse_count(raw: &str) -> Option<u64> {
    parse_f64(raw).map(count_from_f64)
}

pub(crate) fn count_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

fn first_number(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let token: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    token
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn f64_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(raw) => parse_f64(raw),
        _ => None,
    }
}

fn ratio_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
        Value::String(raw) => parse_ratio(raw),
        _ => None,
    }
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_i64().map(|_| 0))
            .or_else(|| number.as_f64().map(count_from_f64)),
        Value::String(raw) => parse_count(raw),
        _ => None,
    }
}

fn string_from_value(value: Value) -> String {
    match value {
        Value::String(raw) => raw,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(f64_from_value(&value).unwrap_or(0.0))
}

pub(crate) fn lenient_optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(f64_from_value(&value))
}

pub(crate) fn lenient_ratio<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ratio_from_value(&value).unwrap_or(0.0))
}

pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value).unwrap_or(0))
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_from_value(value))
}

pub(crate) fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = string_from_value(value);
    Ok(Some(text).filter(|text| !text.trim().is_empty()))
}

/// Decodes a nested analysis block, accepting either an object or its JSON-encoded text.
pub(crate) fn lenient_block<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    let block = match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        Value::String(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        _ => T::default(),
    };
    Ok(block)
}
