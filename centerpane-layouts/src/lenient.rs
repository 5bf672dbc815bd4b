//! Field deserializers that degrade instead of failing.
//!
//! Hosts hand us loosely typed objects; a wrong type in a single field turns
//! into "absent" (or zero for coordinates) so that one bad value never aborts
//! a whole layout pass.

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

use crate::Window;
use crate::WindowId;
use crate::rect::round_half_up;

pub fn coordinate<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .map_or(0, round_half_up))
}

pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite()))
}

pub fn ratio<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    number(deserializer)
}

pub fn window_id<'de, D>(deserializer: D) -> Result<Option<WindowId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

pub fn windows<'de, D>(deserializer: D) -> Result<Option<Vec<Window>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| match serde_json::from_value(v) {
        Ok(windows) => Some(windows),
        Err(error) => {
            tracing::debug!("ignoring undecodable window list: {}", error);
            None
        }
    }))
}

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
    }))
}
