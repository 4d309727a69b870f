//! Deserializers that accept whatever the analysis service sends for a number.
//!
//! Numbers pass through, numeric strings are parsed, everything else is `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

pub fn option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value))
}

pub fn option_f64_vec<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(number).collect(),
        _ => Vec::new(),
    })
}

/// Whole years, one slot per input position. Integral floats such as
/// `2024.0` count; anything else leaves a `None` so later entries stay aligned.
pub fn option_i32_vec<'de, D>(deserializer: D) -> Result<Vec<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().map(whole_number).collect(),
        _ => Vec::new(),
    })
}

#[allow(clippy::cast_possible_truncation)]
fn whole_number(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|v| v.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(v))
        .map(|v| v as i32)
}
