//! Announcements, public and administrative.

use serde_json::Value;

use super::{ApiClient, upsert};
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /announcements`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn announcements(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/announcements")).await
    }

    /// `GET /announcements/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn announcement_detail(&self, id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get(format!("/announcements/{id}")))
            .await
    }

    /// `GET /admin/announcements`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_announcements(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/announcements")).await
    }

    /// Create or replace an announcement.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn upsert_admin_announcement(
        &self,
        body: Value,
        id: Option<&str>,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(upsert("/admin/announcements", id).with_body(body))
            .await
    }

    /// `DELETE /admin/announcements/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn delete_admin_announcement(
        &self,
        id: &str,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::delete(format!("/admin/announcements/{id}")))
            .await
    }
}
