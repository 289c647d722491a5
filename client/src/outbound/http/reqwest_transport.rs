//! Reqwest-backed API transport.
//!
//! This adapter owns transport details only: URL assembly, the bearer
//! header, one fixed timeout, body decoding, and translating reqwest
//! failures into [`TransportFailure`]. Classification happens in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::domain::TransportFailure;
use crate::domain::ports::{ApiTransport, HttpMethod, HttpRequest, HttpResponse};

/// Timeout applied uniformly to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

const USER_AGENT: &str = concat!("meow-client/", env!("CARGO_PKG_VERSION"));

/// Transport that sends requests to one backend base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport with an explicit request timeout.
    ///
    /// ```rust,no_run
    /// use meow_client::outbound::http::{DEFAULT_TIMEOUT, ReqwestTransport};
    ///
    /// let base = "http://localhost:4523/m1".parse().expect("valid URL");
    /// let transport = ReqwestTransport::new(base, DEFAULT_TIMEOUT).expect("client builds");
    /// # drop(transport);
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportFailure> {
        join_url(&self.base_url, path)
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let describe = |failure: TransportFailure| {
            failure.with_request(request.method.as_str(), request.path.as_str())
        };

        let url = self.endpoint(&request.path).map_err(describe)?;
        let mut builder = self.client.request(to_reqwest_method(request.method), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| describe(map_transport_error(&error)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|error| describe(map_transport_error(&error)))?;
        let body = parse_body(bytes.as_ref());

        if !status.is_success() {
            return Err(describe(TransportFailure::http(status.as_u16(), body)));
        }
        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

fn join_url(base: &str, path: &str) -> Result<Url, TransportFailure> {
    let joined = format!("{base}/{}", path.trim_start_matches('/'));
    Url::parse(&joined)
        .map_err(|error| TransportFailure::network(format!("invalid request URL {joined}: {error}")))
}

const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn map_transport_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::timeout(error.to_string())
    } else {
        TransportFailure::network(error.to_string())
    }
}
