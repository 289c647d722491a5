//! Community moments feed.

use serde_json::Value;

use super::ApiClient;
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /moments`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn moments(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/moments")).await
    }

    /// `POST /moments`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn publish_moment(&self, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/moments").with_body(body))
            .await
    }

    /// `POST /moments/{id}/like`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn like_moment(&self, id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/moments/{id}/like")))
            .await
    }
}
