//! Knowledge-base articles.

use serde_json::Value;

use super::{ApiClient, upsert};
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /articles`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn articles(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/articles")).await
    }

    /// `GET /articles/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn article_detail(&self, id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get(format!("/articles/{id}"))).await
    }

    /// `GET /admin/articles`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn admin_articles(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/admin/articles")).await
    }

    /// Create (`POST /admin/articles`) or replace
    /// (`PUT /admin/articles/{id}`) an article.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn upsert_admin_article(
        &self,
        body: Value,
        id: Option<&str>,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(upsert("/admin/articles", id).with_body(body))
            .await
    }
}
