//! Total coercions from untrusted JSON into plain Rust values.
//!
//! Every function here accepts any [`Value`] and never fails: a value of
//! the wrong shape collapses to an empty or fallback value. These are the
//! only way backend payloads enter the typed model.

use serde_json::{Map, Value};

/// Borrow `value` as a JSON object, or an empty object for anything else.
///
/// # Examples
/// ```
/// use meow_client::domain::as_record;
/// use serde_json::json;
///
/// assert_eq!(as_record(&json!({ "a": 1 })).len(), 1);
/// assert!(as_record(&json!([1, 2])).is_empty());
/// assert!(as_record(&json!(null)).is_empty());
/// ```
#[must_use]
pub fn as_record(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

/// Borrow `value` as a JSON array, or an empty slice for anything else.
#[must_use]
pub fn as_array(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}

/// Return `value` when it is a JSON string, otherwise `fallback`.
#[must_use]
pub fn as_string(value: &Value, fallback: &str) -> String {
    value.as_str().unwrap_or(fallback).to_owned()
}

/// Return `value` when it is a JSON number, otherwise `fallback`.
///
/// JSON numbers are always finite, so the result is finite whenever the
/// fallback is.
#[must_use]
pub fn as_number(value: &Value, fallback: f64) -> f64 {
    value.as_f64().filter(|number| number.is_finite()).unwrap_or(fallback)
}

/// Return `value` as a non-negative integer count, or `0`.
///
/// Negative and fractional numbers are treated as malformed.
#[must_use]
pub fn as_count(value: &Value) -> u64 {
    value.as_u64().unwrap_or(0)
}

/// `i64::MIN` as a float (-2^63).
const I64_FLOAT_MIN: f64 = -9_223_372_036_854_775_808.0;
/// Exclusive upper bound of `i64` as a float (2^63).
const I64_FLOAT_END: f64 = 9_223_372_036_854_775_808.0;

/// Return `value` as an integral code when it is a JSON number with no
/// fractional part that fits in `i64`.
///
/// Integers written with a decimal point, such as `200.0`, are accepted.
///
/// # Examples
/// ```
/// use meow_client::domain::as_code;
/// use serde_json::json;
///
/// assert_eq!(as_code(&json!(200)), Some(200));
/// assert_eq!(as_code(&json!(200.0)), Some(200));
/// assert_eq!(as_code(&json!(1.5)), None);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the float is integral and inside the i64 range"
)]
pub fn as_code(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|number| number.fract() == 0.0)
            .filter(|number| (I64_FLOAT_MIN..I64_FLOAT_END).contains(number))
            .map(|number| number as i64)
    })
}

/// Return `value` as a non-empty string, treating `""` like an absent field.
#[must_use]
pub fn as_non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|text| !text.is_empty())
}
