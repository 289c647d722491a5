//! Backend response envelopes.
//!
//! The mock backend wraps payloads as `{ code, msg | message, data }` but
//! any of those fields may be missing or mistyped. [`normalize_api_envelope`]
//! turns whatever arrived into an [`ApiResult`] without ever failing.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::coerce::{as_code, as_record};

/// Normalised view of one successful backend response.
///
/// ## Invariants
/// - `message` is empty when the envelope carried no usable message.
/// - `raw` is the exact payload received, kept for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// Envelope `data`, or `None` when absent or `null`.
    pub data: Option<T>,
    /// Envelope `code` when it is an integral number.
    pub code: Option<i64>,
    /// `msg`, else `message`, else the empty string.
    pub message: String,
    /// Untouched response payload.
    pub raw: Value,
}

impl ApiResult<Value> {
    /// Convert `data` into a typed model.
    ///
    /// A payload that does not match `T` degrades to `data = None`; the
    /// untyped payload is still available through `raw`.
    ///
    /// # Examples
    /// ```
    /// use meow_client::domain::normalize_api_envelope;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Counter { value: u32 }
    ///
    /// let typed = normalize_api_envelope(json!({ "data": { "value": 1 } })).decode::<Counter>();
    /// assert_eq!(typed.data.map(|c| c.value), Some(1));
    ///
    /// let mismatched = normalize_api_envelope(json!({ "data": "oops" })).decode::<Counter>();
    /// assert!(mismatched.data.is_none());
    /// ```
    #[must_use]
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        let Self {
            data,
            code,
            message,
            raw,
        } = self;
        let typed = data.and_then(|value| match serde_json::from_value::<T>(value) {
            Ok(typed) => Some(typed),
            Err(error) => {
                debug!(%error, "response data did not match the expected shape");
                None
            }
        });
        ApiResult {
            data: typed,
            code,
            message,
            raw,
        }
    }
}

/// Normalise an arbitrary backend payload.
///
/// Non-object payloads yield `data = None`, `code = None`, and an empty
/// message. The function is total.
///
/// # Examples
/// ```
/// use meow_client::domain::normalize_api_envelope;
/// use serde_json::json;
///
/// let result = normalize_api_envelope(json!({ "code": 200, "msg": "ok", "data": { "v": 1 } }));
/// assert_eq!(result.code, Some(200));
/// assert_eq!(result.message, "ok");
/// assert_eq!(result.data, Some(json!({ "v": 1 })));
/// ```
#[must_use]
pub fn normalize_api_envelope(payload: Value) -> ApiResult<Value> {
    let envelope = as_record(&payload);

    let data = envelope.get("data").filter(|data| !data.is_null()).cloned();
    let code = envelope.get("code").and_then(as_code);
    let message = envelope
        .get("msg")
        .and_then(Value::as_str)
        .or_else(|| envelope.get("message").and_then(Value::as_str))
        .unwrap_or_default()
        .to_owned();

    ApiResult {
        data,
        code,
        message,
        raw: payload,
    }
}
