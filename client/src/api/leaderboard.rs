//! Leaderboards.

use serde_json::Value;

use super::ApiClient;
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult};

impl ApiClient {
    /// `GET /leaderboard/{kind}`, e.g. `feed` or `checkin`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn leaderboard(&self, kind: &str) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::get(format!("/leaderboard/{kind}")))
            .await
    }
}
