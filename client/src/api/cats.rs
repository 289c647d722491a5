//! Cat archive endpoints.

use serde_json::Value;

use super::ApiClient;
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /cats`, forwarding filter and paging parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn cats<K, V>(
        &self,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<ApiResult<Value>, ApiError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.request(HttpRequest::get("/cats").with_query(params))
            .await
    }

    /// `GET /cats/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn cat_detail(&self, cat_id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get(format!("/cats/{cat_id}"))).await
    }

    /// `POST /cats/{id}/feed`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn feed_cat(&self, cat_id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/cats/{cat_id}/feed")))
            .await
    }

    /// `POST /cats/{id}/follow`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn follow_cat(&self, cat_id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post(format!("/cats/{cat_id}/follow")))
            .await
    }

    /// `DELETE /cats/{id}/follow`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn unfollow_cat(&self, cat_id: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::delete(format!("/cats/{cat_id}/follow")))
            .await
    }

    /// `POST /new-cats`: report a cat that is not in the archive yet.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn report_new_cat(&self, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/new-cats").with_body(body))
            .await
    }
}
