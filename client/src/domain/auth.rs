//! Login flow helpers.
//!
//! Validation of raw form input, completion of campus mail addresses, and
//! the step that turns a login response into a session transition.

use serde::Deserialize;
use thiserror::Error;
use zeroize::Zeroizing;

use super::envelope::ApiResult;
use super::session::{LoginPayload, Role, UserProfile};

/// Campus mail domain appended to bare student ids.
pub const SDU_MAIL_DOMAIN: &str = "mail.sdu.edu.cn";

/// Error returned when login form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email is not shaped `local@domain.tld`.
    #[error("email must look like local@domain.tld")]
    MalformedEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and shaped `local@domain.tld`.
/// - `password` is non-empty and keeps caller-provided whitespace; it is
///   wiped from memory on drop.
///
/// # Examples
/// ```
/// use meow_client::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" 202300001234@mail.sdu.edu.cn ", "pw").unwrap();
/// assert_eq!(creds.email(), "202300001234@mail.sdu.edu.cn");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginValidationError`] naming the first invalid field.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if !looks_like_email(normalized) {
            return Err(LoginValidationError::MalformedEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Trimmed email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

fn is_student_id(value: &str) -> bool {
    value.len() == 12 && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Complete a partially typed campus mail address.
///
/// A bare 12-digit student id gains the campus domain, as does
/// `local@` followed by any prefix of [`SDU_MAIL_DOMAIN`]. Anything else
/// is only trimmed.
///
/// # Examples
/// ```
/// use meow_client::domain::complete_sdu_mail;
///
/// assert_eq!(complete_sdu_mail("202300001234"), "202300001234@mail.sdu.edu.cn");
/// assert_eq!(complete_sdu_mail("meow@mail.s"), "meow@mail.sdu.edu.cn");
/// assert_eq!(complete_sdu_mail("meow@gmail.com"), "meow@gmail.com");
/// ```
#[must_use]
pub fn complete_sdu_mail(raw: &str) -> String {
    let value = raw.trim();
    if is_student_id(value) {
        return format!("{value}@{SDU_MAIL_DOMAIN}");
    }

    let Some((local, domain)) = value.split_once('@') else {
        return value.to_owned();
    };
    if domain.contains('@') || local.is_empty() {
        return value.to_owned();
    }

    if SDU_MAIL_DOMAIN.starts_with(domain.to_lowercase().as_str()) {
        format!("{local}@{SDU_MAIL_DOMAIN}")
    } else {
        value.to_owned()
    }
}

/// Guess the account role from its address.
///
/// The mock backend issues no role claim, so administrator accounts are
/// recognised by `admin` appearing anywhere in the address.
#[must_use]
pub fn infer_role_from_email(email: &str) -> Role {
    if email.to_lowercase().contains("admin") {
        Role::Admin
    } else {
        Role::User
    }
}

/// `data` of a successful login call. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthLoginData {
    /// Bearer token for later requests.
    pub access_token: Option<String>,
    /// Refresh token; unused by the client today.
    pub refresh_token: Option<String>,
    /// Email echoed by the backend.
    pub email: Option<String>,
}

/// Failure turning a login response into a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginFlowError {
    /// The response carried no usable access token.
    #[error("login response did not include an access token")]
    MissingAccessToken,
}

/// Build the session transition for a successful login call.
///
/// # Errors
///
/// Returns [`LoginFlowError::MissingAccessToken`] when `accessToken` is
/// absent or blank.
///
/// # Examples
/// ```
/// use meow_client::domain::{ApiResult, AuthLoginData, Role, session_from_login};
/// use serde_json::Value;
///
/// let result = ApiResult {
///     data: Some(AuthLoginData { access_token: Some(" tok ".into()), ..Default::default() }),
///     code: Some(200),
///     message: String::new(),
///     raw: Value::Null,
/// };
/// let payload = session_from_login(&result, "admin@mail.sdu.edu.cn").unwrap();
/// assert_eq!(payload.token.as_deref(), Some("tok"));
/// assert_eq!(payload.role, Role::Admin);
/// ```
pub fn session_from_login(
    result: &ApiResult<AuthLoginData>,
    email: &str,
) -> Result<LoginPayload, LoginFlowError> {
    let token = result
        .data
        .as_ref()
        .and_then(|data| data.access_token.as_deref())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(LoginFlowError::MissingAccessToken)?;

    let role = infer_role_from_email(email);
    Ok(LoginPayload {
        token: Some(token.to_owned()),
        role,
        profile: Some(UserProfile {
            nickname: Some(email.to_owned()),
            role: Some(role),
            ..UserProfile::default()
        }),
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("meow", "pw", LoginValidationError::MalformedEmail)]
    #[case("meow@mail", "pw", LoginValidationError::MalformedEmail)]
    #[case("a@b@c.cn", "pw", LoginValidationError::MalformedEmail)]
    #[case("@mail.sdu.edu.cn", "pw", LoginValidationError::MalformedEmail)]
    #[case("me ow@mail.sdu.edu.cn", "pw", LoginValidationError::MalformedEmail)]
    #[case("meow@mail.sdu.edu.cn", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  meow@mail.sdu.edu.cn  ", "secret")]
    #[case("admin@example.org", " spaced password ")]
    fn valid_credentials_trim_email(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(email, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.email(), email.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    #[case("202300001234", "202300001234@mail.sdu.edu.cn")]
    #[case(" 202300001234 ", "202300001234@mail.sdu.edu.cn")]
    #[case("meow@", "meow@mail.sdu.edu.cn")]
    #[case("meow@MAIL.SDU", "meow@mail.sdu.edu.cn")]
    #[case("meow@mail.sdu.edu.cn", "meow@mail.sdu.edu.cn")]
    #[case("meow@gmail.com", "meow@gmail.com")]
    #[case("@mail", "@mail")]
    #[case("a@b@c", "a@b@c")]
    #[case("2023000012345", "2023000012345")]
    #[case("meow", "meow")]
    fn campus_mail_completion(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(complete_sdu_mail(raw), expected);
    }

    #[rstest]
    #[case("admin@mail.sdu.edu.cn", Role::Admin)]
    #[case("SuperAdmin01@example.org", Role::Admin)]
    #[case("meow@mail.sdu.edu.cn", Role::User)]
    fn role_inference(#[case] email: &str, #[case] expected: Role) {
        assert_eq!(infer_role_from_email(email), expected);
    }

    fn login_result(token: Option<&str>) -> ApiResult<AuthLoginData> {
        ApiResult {
            data: Some(AuthLoginData {
                access_token: token.map(str::to_owned),
                ..AuthLoginData::default()
            }),
            code: Some(200),
            message: String::new(),
            raw: Value::Null,
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_tokens_are_rejected(#[case] token: Option<&str>) {
        let err = session_from_login(&login_result(token), "meow@mail.sdu.edu.cn")
            .expect_err("blank token");
        assert_eq!(err, LoginFlowError::MissingAccessToken);
    }

    #[test]
    fn login_data_tolerates_missing_fields() {
        let data: AuthLoginData =
            serde_json::from_value(serde_json::json!({ "accessToken": "t" })).expect("decodes");
        assert_eq!(data.access_token.as_deref(), Some("t"));
        assert_eq!(data.refresh_token, None);
    }

    #[test]
    fn successful_login_builds_profile() {
        let payload = session_from_login(&login_result(Some("  abc  ")), "meow@mail.sdu.edu.cn")
            .expect("token present");

        assert_eq!(payload.token.as_deref(), Some("abc"));
        assert_eq!(payload.role, Role::User);
        let profile = payload.profile.expect("profile");
        assert_eq!(profile.nickname.as_deref(), Some("meow@mail.sdu.edu.cn"));
        assert_eq!(profile.role, Some(Role::User));
    }
}
