//! Request pipeline shared by every endpoint.
//!
//! Each call attaches the current bearer token, executes through the
//! [`ApiTransport`] port, and funnels the outcome through the response
//! adapter: successes become [`ApiResult`] values, failures become
//! [`ApiError`] values.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::ports::{ApiTransport, HttpRequest, TokenSource};
use crate::domain::{ApiError, ApiResult, normalize_api_envelope, to_api_error};

/// Client for the mock backend.
///
/// Endpoint helpers live in the sibling modules as `impl ApiClient`
/// blocks, so every call goes through [`ApiClient::request`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    /// Create a client over the given transport and token source.
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>, tokens: Arc<dyn TokenSource>) -> Self {
        Self { transport, tokens }
    }

    /// Execute a request and normalise the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for HTTP 404 and
    /// [`ApiError::Request`] for every other failure.
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResult<Value>, ApiError> {
        let request = self.authorise(request);
        match self.transport.execute(&request).await {
            Ok(response) => {
                let result = normalize_api_envelope(response.body);
                debug!(
                    method = %request.method,
                    path = %request.path,
                    status = response.status,
                    code = ?result.code,
                    "api request succeeded"
                );
                Ok(result)
            }
            Err(failure) => {
                let error = to_api_error(&failure);
                warn!(
                    method = %error.shape().method,
                    path = %error.shape().path,
                    http_status = ?error.shape().http_status,
                    biz_code = ?error.shape().biz_code,
                    message = %error.message(),
                    "api request failed"
                );
                Err(error)
            }
        }
    }

    /// Execute a request and decode `data` as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`]. A `data` payload that does not match
    /// `T` is not an error; it yields `data = None`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<ApiResult<T>, ApiError> {
        self.request(request).await.map(ApiResult::decode)
    }

    fn authorise(&self, request: HttpRequest) -> HttpRequest {
        if request.bearer.is_some() {
            return request;
        }
        match self.tokens.bearer_token() {
            Some(token) if !token.is_empty() => request.with_bearer(token),
            _ => request,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
