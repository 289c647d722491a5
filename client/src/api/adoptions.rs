//! Adoption application endpoints.

use serde_json::Value;

use super::ApiClient;
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `POST /adoptions`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn create_adoption(&self, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/adoptions").with_body(body))
            .await
    }

    /// `GET /adoptions/my`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn my_adoptions(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/adoptions/my")).await
    }

    /// `GET /admin/adoptions`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_adoptions(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/adoptions")).await
    }

    /// `POST /admin/adoptions/{id}/audit`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn audit_adoption(
        &self,
        id: &str,
        body: Value,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/admin/adoptions/{id}/audit")).with_body(body))
            .await
    }

    /// `POST /admin/adoptions/{id}/schedule`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn schedule_adoption(
        &self,
        id: &str,
        body: Value,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/admin/adoptions/{id}/schedule")).with_body(body))
            .await
    }
}
