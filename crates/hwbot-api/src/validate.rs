//! Shape validation for the review API payload.
//!
//! The API is not under our control, so the payload arrives as raw JSON and
//! every assumption is checked before use.

use hwbot_core::error::HwbotError;
use serde_json::Value;

/// The validated view over one API response.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Homework records, newest first. May be empty.
    pub homeworks: &'a [Value],
    /// Server-side timestamp to use as the next poll cursor.
    pub current_date: i64,
}

/// Check the decoded payload against the expected shape.
///
/// Only the envelope is validated here; individual records are checked by
/// [`parse_status`](crate::parse_status) when consumed.
pub fn check_response(response: &Value) -> Result<Snapshot<'_>, HwbotError> {
    let map = response
        .as_object()
        .ok_or_else(|| HwbotError::Payload(format!("expected object, got {}", kind(response))))?;

    let homeworks = map
        .get("homeworks")
        .ok_or_else(|| HwbotError::Payload("missing key \"homeworks\"".to_string()))?;

    let homeworks = homeworks.as_array().ok_or_else(|| {
        HwbotError::Payload(format!(
            "expected \"homeworks\" to be an array, got {}",
            kind(homeworks)
        ))
    })?;

    let current_date = map
        .get("current_date")
        .ok_or_else(|| HwbotError::Payload("missing key \"current_date\"".to_string()))?;

    let current_date = current_date.as_i64().ok_or_else(|| {
        HwbotError::Payload(format!(
            "expected \"current_date\" to be an integer, got {}",
            kind(current_date)
        ))
    })?;

    Ok(Snapshot {
        homeworks,
        current_date,
    })
}

/// JSON type name for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
