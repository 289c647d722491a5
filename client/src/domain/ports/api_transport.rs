//! Driven port for executing HTTP calls against the backend.
//!
//! The domain owns the request and response shapes so the classification
//! rules in [`crate::domain::error`] stay independent of the HTTP library.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error::TransportFailure;

/// HTTP verbs used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request to the backend, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Path relative to the API base, e.g. `/cats/42`.
    pub path: String,
    /// Query string pairs in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
}

impl HttpRequest {
    /// Request without query, body, or token.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    /// Shorthand for a `GET`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Shorthand for a `POST`.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Shorthand for a `PUT`.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Shorthand for a `DELETE`.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append query pairs.
    #[must_use]
    pub fn with_query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Successful (2xx) response as seen by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status.
    pub status: u16,
    /// Body parsed as JSON; text bodies arrive as a JSON string, empty
    /// bodies as `null`.
    pub body: Value,
}

/// Port for performing HTTP calls.
///
/// Implementations return `Err` for every non-2xx status as well as for
/// network failures and timeouts, filling in as much of
/// [`TransportFailure`] as they observed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Execute one request.
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// Source of the bearer token attached to outgoing requests.
#[cfg_attr(test, mockall::automock)]
pub trait TokenSource: Send + Sync {
    /// Current token, or `None` for anonymous requests.
    fn bearer_token(&self) -> Option<String>;
}

/// Token source for clients that never authenticate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Anonymous;

impl TokenSource for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_request_parts() {
        let request = HttpRequest::get("/cats")
            .with_query([("campus", "SOFTWARE_PARK"), ("page", "1")])
            .with_bearer("token");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.query,
            vec![
                ("campus".to_owned(), "SOFTWARE_PARK".to_owned()),
                ("page".to_owned(), "1".to_owned()),
            ]
        );
        assert_eq!(request.bearer.as_deref(), Some("token"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn methods_render_upper_case() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(
            HttpRequest::post("/sos").with_body(json!({})).method.as_str(),
            "POST"
        );
    }

    #[test]
    fn anonymous_source_has_no_token() {
        assert_eq!(Anonymous.bearer_token(), None);
    }
}
