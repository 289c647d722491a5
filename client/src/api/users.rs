//! Endpoints for the signed-in user (`/users/me`).

use serde_json::Value;

use super::ApiClient;
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn me(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/users/me")).await
    }

    /// `PUT /users/me`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn update_me(&self, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::put("/users/me").with_body(body))
            .await
    }

    /// `POST /users/me/checkin`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn checkin(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/users/me/checkin")).await
    }

    /// `GET /users/me/checkin/history`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn checkin_history(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/users/me/checkin/history"))
            .await
    }

    /// `GET /users/me/badges`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn badges(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/users/me/badges")).await
    }

    /// `GET /users/me/settings`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn settings(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/users/me/settings")).await
    }

    /// `PUT /users/me/settings`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn update_settings(&self, body: Value) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::put("/users/me/settings").with_body(body))
            .await
    }

    /// `GET /users/me/followed-cats`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn followed_cats(&self) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get("/users/me/followed-cats"))
            .await
    }
}
