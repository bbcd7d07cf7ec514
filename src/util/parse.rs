use serde_json::Value;

use crate::error::{internal::InternalError, Error};

/// Looks up a required key in a Discord payload.
///
/// # Arguments
/// - `payload` - The decoded JSON payload object
/// - `field` - The key that must be present
///
/// # Returns
/// - `Ok(&Value)` - The value stored under the key
/// - `Err(Error::MissingField)` - The key is absent from the payload
pub(crate) fn require_field<'a>(payload: &'a Value, field: &'static str) -> Result<&'a Value, Error> {
    payload.get(field).ok_or(Error::MissingField { field })
}

/// Parses a snowflake ID from a payload value.
///
/// Discord serializes IDs either as JSON numbers or as numeric strings;
/// both coerce to `u64` here. A null or otherwise non-numeric value is
/// treated as an absent field.
///
/// # Arguments
/// - `value` - The payload value holding the ID
/// - `field` - The payload key the value came from, for error reporting
///
/// # Returns
/// - `Ok(u64)` - Successfully coerced ID
/// - `Err(Error::MissingField)` - Value is neither a number nor a string
/// - `Err(Error::InternalErr(ParseSnowflake))` - Value is not a valid u64
pub(crate) fn parse_snowflake(value: &Value, field: &'static str) -> Result<u64, Error> {
    let raw = match value {
        Value::Number(number) => number.to_string(),
        Value::String(string) => string.clone(),
        _ => return Err(Error::MissingField { field }),
    };

    let id = raw
        .parse::<u64>()
        .map_err(|e| InternalError::ParseSnowflake {
            value: raw,
            source: e,
        })?;

    Ok(id)
}

/// Reads an optional unsigned integer that Discord may serialize as either
/// a number or a numeric string (e.g. guild permissions).
pub(crate) fn optional_u64(value: Option<&Value>) -> Option<u64> {
    match value {
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(string)) => string.parse::<u64>().ok(),
        _ => None,
    }
}

/// Reads an optional string field, treating null as absent.
pub(crate) fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}
