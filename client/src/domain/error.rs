//! Typed failures for backend calls.
//!
//! Transport adapters report what went wrong as a [`TransportFailure`];
//! [`to_api_error`] classifies it into exactly one [`ApiError`]. The only
//! branch is on HTTP status: a 404 means "this route is not implemented by
//! the mock backend yet" and becomes [`ApiError::NotFound`], everything else
//! (including network failures and timeouts) becomes [`ApiError::Request`].

use serde_json::Value;
use thiserror::Error;

use super::coerce::{as_code, as_non_empty_str};

/// Message used when neither the response nor the transport explained the
/// failure.
pub const NETWORK_FAILURE_MESSAGE: &str = "Network request failed. Please retry.";

/// Fixed message carried by [`ApiError::NotFound`].
pub const ENDPOINT_UNAVAILABLE_MESSAGE: &str =
    "Endpoint is not available in current mock environment.";

/// Generic message for failures that are not [`ApiError`]s.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please retry.";

const UNKNOWN_PATH: &str = "unknown";
const DEFAULT_METHOD: &str = "GET";

/// Raw description of a failed call, as observed by a transport adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportFailure {
    /// HTTP status when a response arrived.
    pub status: Option<u16>,
    /// Response body when a response arrived.
    pub body: Option<Value>,
    /// Request path or URL.
    pub url: Option<String>,
    /// Request method in any case.
    pub method: Option<String>,
    /// Transport-level description (connection refused, timeout, ...).
    pub message: Option<String>,
    /// Whether the request hit the client timeout.
    pub timed_out: bool,
}

impl TransportFailure {
    /// Failure where no HTTP response was received.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Failure where the client gave up waiting.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            timed_out: true,
            ..Self::default()
        }
    }

    /// Failure where the backend answered with a non-success status.
    #[must_use]
    pub fn http(status: u16, body: Value) -> Self {
        Self {
            status: Some(status),
            body: Some(body),
            message: Some(format!("Request failed with status code {status}")),
            ..Self::default()
        }
    }

    /// Record which request failed.
    #[must_use]
    pub fn with_request(mut self, method: impl Into<String>, url: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self.url = Some(url.into());
        self
    }
}

/// Diagnostic context attached to every [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorShape {
    /// HTTP status, or `None` for network failures and timeouts.
    pub http_status: Option<u16>,
    /// Backend business code from the error body, if any.
    pub biz_code: Option<i64>,
    /// Request path, `"unknown"` when not reported.
    pub path: String,
    /// Upper-case request method, `"GET"` when not reported.
    pub method: String,
}

/// Failure of a backend call, ready to present to UI code.
///
/// Both variants are API errors; [`ApiError::NotFound`] is the
/// specialisation callers branch on to show a "not available yet"
/// placeholder instead of an error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Any failure other than HTTP 404.
    #[error("{message}")]
    Request {
        /// User-presentable description.
        message: String,
        /// Diagnostic context.
        shape: ApiErrorShape,
    },
    /// HTTP 404: the mock backend does not implement this route.
    #[error("{}", ENDPOINT_UNAVAILABLE_MESSAGE)]
    NotFound {
        /// Diagnostic context.
        shape: ApiErrorShape,
    },
}

/// How UI code should surface an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailurePresentation {
    /// Render a soft "feature not available yet" placeholder.
    Unavailable,
    /// Show the message with a retry affordance.
    Retry {
        /// Message to display.
        message: String,
    },
}

impl ApiError {
    /// User-presentable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Request { message, .. } => message.as_str(),
            Self::NotFound { .. } => ENDPOINT_UNAVAILABLE_MESSAGE,
        }
    }

    /// Diagnostic context for logs.
    #[must_use]
    pub const fn shape(&self) -> &ApiErrorShape {
        match self {
            Self::Request { shape, .. } | Self::NotFound { shape } => shape,
        }
    }

    /// Whether this is the "endpoint not implemented" specialisation.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Choose the UI affordance for this failure.
    #[must_use]
    pub fn presentation(&self) -> FailurePresentation {
        match self {
            Self::NotFound { .. } => FailurePresentation::Unavailable,
            Self::Request { message, .. } => FailurePresentation::Retry {
                message: message.clone(),
            },
        }
    }
}

/// Classify a failed call.
///
/// The message is the first non-empty of: body `message`, body `msg`, the
/// transport message, [`NETWORK_FAILURE_MESSAGE`].
///
/// # Examples
/// ```
/// use meow_client::domain::{ApiError, TransportFailure, to_api_error};
/// use serde_json::json;
///
/// let missing = to_api_error(&TransportFailure::http(404, json!({ "msg": "nope" })));
/// assert!(missing.is_not_found());
///
/// let broken = to_api_error(&TransportFailure::http(500, json!({ "message": "boom" })));
/// assert!(matches!(broken, ApiError::Request { .. }));
/// assert_eq!(broken.message(), "boom");
/// ```
#[must_use]
pub fn to_api_error(failure: &TransportFailure) -> ApiError {
    let body = failure.body.as_ref().unwrap_or(&Value::Null);
    let body_field = |name: &str| body.get(name).and_then(as_non_empty_str);

    let message = body_field("message")
        .or_else(|| body_field("msg"))
        .or_else(|| failure.message.as_deref().filter(|text| !text.is_empty()))
        .unwrap_or(NETWORK_FAILURE_MESSAGE)
        .to_owned();

    let shape = ApiErrorShape {
        http_status: failure.status,
        biz_code: body.get("code").and_then(as_code),
        path: failure
            .url
            .clone()
            .unwrap_or_else(|| UNKNOWN_PATH.to_owned()),
        method: failure
            .method
            .as_deref()
            .unwrap_or(DEFAULT_METHOD)
            .to_uppercase(),
    };

    if failure.status == Some(404) {
        ApiError::NotFound { shape }
    } else {
        ApiError::Request { message, shape }
    }
}

/// Display message for any failure a UI action can produce.
#[must_use]
pub fn describe_failure(error: &(dyn std::error::Error + 'static)) -> String {
    if let Some(api_error) = error.downcast_ref::<ApiError>() {
        return api_error.message().to_owned();
    }
    let text = error.to_string();
    if text.is_empty() {
        GENERIC_FAILURE_MESSAGE.to_owned()
    } else {
        text
    }
}
