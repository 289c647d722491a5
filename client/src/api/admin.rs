//! Administrative console endpoints.

use serde_json::Value;

use super::{ApiClient, upsert};
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /admin/dashboard/stats`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_dashboard_stats(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/dashboard/stats"))
            .await
    }

    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_users(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/users")).await
    }

    /// `GET /admin/users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_user_detail(&self, id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get(format!("/admin/users/{id}")))
            .await
    }

    /// `POST /admin/users/{id}/ban`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn ban_admin_user(
        &self,
        id: &str,
        body: Value,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/admin/users/{id}/ban")).with_body(body))
            .await
    }

    /// `GET /admin/audit`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_audit(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/audit")).await
    }

    /// `POST /admin/audit/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn run_admin_audit(
        &self,
        id: &str,
        body: Value,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/admin/audit/{id}")).with_body(body))
            .await
    }

    /// `GET /admin/cats`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_cats(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/cats")).await
    }

    /// Create or replace an archive entry.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn upsert_admin_cat(
        &self,
        body: Value,
        id: Option<&str>,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(upsert("/admin/cats", id).with_body(body)).await
    }
}
