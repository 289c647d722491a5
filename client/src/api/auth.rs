//! Account endpoints: login, registration, and password management.

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, payload};
use crate::domain::ports::HttpRequest;
use crate::domain::{ApiError, ApiResult, AuthLoginData, LoginCredentials};

/// Body of `POST /users/login`.
///
/// Borrows its fields so the password stays in the caller's zeroized
/// buffer until serialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthLoginPayload<'a> {
    /// Account email.
    pub email: &'a str,
    /// Plain password.
    pub password: &'a str,
}

impl<'a> From<&'a LoginCredentials> for AuthLoginPayload<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
        }
    }
}

/// Body of `POST /users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthRegisterPayload {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Emailed verification code.
    pub code: String,
}

/// Body of `POST /users/send-verification-code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendVerificationCodePayload {
    /// Address that receives the code.
    pub email: String,
}

/// Password change for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordPayload {
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
    /// Replacement password, repeated.
    pub confirm_password: String,
}

/// Password reset via emailed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordPayload {
    /// Account email.
    pub email: String,
    /// Emailed verification code.
    pub code: String,
    /// Replacement password.
    pub new_password: String,
    /// Replacement password, repeated.
    pub confirm_password: String,
}

impl ApiClient {
    /// `POST /users/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn login(
        &self,
        body: &AuthLoginPayload<'_>,
    ) -> Result<ApiResult<AuthLoginData>, ApiError> {
        self.request_as(HttpRequest::post("/users/login").with_body(payload(body)))
            .await
    }

    /// `POST /users/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn register(
        &self,
        body: &AuthRegisterPayload,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/users/register").with_body(payload(body)))
            .await
    }

    /// `POST /users/send-verification-code`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn send_verification_code(
        &self,
        body: &SendVerificationCodePayload,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/users/send-verification-code").with_body(payload(body)))
            .await
    }

    /// `POST /users/change-password` for a signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn change_password(
        &self,
        body: &ChangePasswordPayload,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/users/change-password").with_body(payload(body)))
            .await
    }

    /// Password reset. The mock backend serves it from the same route as
    /// [`ApiClient::change_password`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the call fails.
    pub async fn forgot_password(
        &self,
        body: &ForgotPasswordPayload,
    ) -> Result<ApiResult<Value>, ApiError> {
        self.request(HttpRequest::post("/users/change-password").with_body(payload(body)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn password_payloads_use_camel_case() {
        let body = payload(&ForgotPasswordPayload {
            email: "a@mail.sdu.edu.cn".into(),
            code: "123456".into(),
            new_password: "n".into(),
            confirm_password: "n".into(),
        });
        assert_eq!(
            body,
            json!({
                "email": "a@mail.sdu.edu.cn",
                "code": "123456",
                "newPassword": "n",
                "confirmPassword": "n",
            })
        );
    }

    #[test]
    fn login_payload_borrows_the_credentials() {
        let credentials =
            LoginCredentials::try_from_parts("a@mail.sdu.edu.cn", "s3cret").expect("valid");

        let body = AuthLoginPayload::from(&credentials);

        assert!(std::ptr::eq(body.password, credentials.password()));
        assert_eq!(
            payload(&body),
            json!({ "email": "a@mail.sdu.edu.cn", "password": "s3cret" })
        );
    }
}
