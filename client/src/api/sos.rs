//! Rescue (SOS) endpoints.

use serde_json::Value;

use super::ApiClient;
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `POST /sos`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn create_sos(&self, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/sos").with_body(body)).await
    }

    /// `GET /sos/tags`: the selectable tag labels.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn sos_tags(&self) -> Result<ApiResult<Vec<String>>, ApiError> {
        self.request_as(HttpRequest::get("/sos/tags")).await
    }

    /// `GET /sos/my`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn my_sos(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/sos/my")).await
    }

    /// `GET /admin/sos`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_sos(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/sos")).await
    }

    /// `POST /admin/sos/{id}/resolve`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn resolve_sos(&self, id: &str, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/admin/sos/{id}/resolve")).with_body(body))
            .await
    }
}
