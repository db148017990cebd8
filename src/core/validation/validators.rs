//! Reusable field validators
//!
//! Payloads arrive as loose JSON, so each validator looks at a raw
//! [`Value`] and either hands back the typed value or reports the rule
//! the field broke. Entities chain them with `?`, which gives the
//! fail-fast ordering for free.

use crate::core::error::ValidationError;
use serde_json::{Number, Value};

/// Whether a field counts as supplied
///
/// `null`, `false`, `0` and `""` are treated the same as an absent field.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

/// Validator: field is a non-empty string
pub fn required_text<'a>(
    data: &'a Value,
    entity: &'static str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingField { entity, field })
}

/// Read a JSON number strictly greater than 0
///
/// The number comes back as sent, so `3` stays `3` and `2.5` stays `2.5`.
pub fn positive_number(value: Option<&Value>) -> Option<&Number> {
    match value {
        Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n > 0.0) => Some(number),
        _ => None,
    }
}

/// Validator: field is a number strictly greater than 0
pub fn required_positive_number(
    data: &Value,
    entity: &'static str,
    field: &'static str,
) -> Result<Number, ValidationError> {
    positive_number(data.get(field))
        .cloned()
        .ok_or(ValidationError::NotPositiveNumber { entity, field })
}

/// Validator: field is present and holds a non-empty list
///
/// A missing field reports `MissingField` with `item` as the field name,
/// anything else that is not a non-empty array reports `EmptyList`.
pub fn required_list<'a>(
    data: &'a Value,
    entity: &'static str,
    field: &'static str,
    item: &'static str,
) -> Result<&'a [Value], ValidationError> {
    let value = data.get(field);
    if !is_present(value) {
        return Err(ValidationError::MissingField {
            entity,
            field: item,
        });
    }
    value
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .map(Vec::as_slice)
        .ok_or(ValidationError::EmptyList { entity, item })
}

/// Validator: an id carried in the body agrees with the route id
///
/// An absent or empty body id is accepted. Route ids are strings, so any
/// other present value never matches.
pub fn matching_id(
    data: &Value,
    entity: &'static str,
    route_id: &str,
) -> Result<(), ValidationError> {
    let body_id = data.get("id");
    if !is_present(body_id) {
        return Ok(());
    }
    match body_id {
        Some(Value::String(s)) if s == route_id => Ok(()),
        Some(Value::String(s)) => Err(mismatch(entity, s.clone(), route_id)),
        Some(other) => Err(mismatch(entity, other.to_string(), route_id)),
        None => Ok(()),
    }
}

fn mismatch(entity: &'static str, body_id: String, route_id: &str) -> ValidationError {
    ValidationError::IdMismatch {
        entity,
        body_id,
        route_id: route_id.to_string(),
    }
}
