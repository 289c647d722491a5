//! Session data: who is using the client and with what privilege.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::coerce::as_record;

/// Privilege level of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Signed-in student account.
    User,
    /// Signed-in moderator account.
    Admin,
    /// Anonymous visitor browsing public pages.
    Guest,
}

impl Role {
    /// Wire name as stored and sent by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Guest => "guest",
        }
    }

    /// Parse a wire name; unknown names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            "guest" => Some(Self::Guest),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile details cached alongside the session.
///
/// Every field is optional; fields this type does not know about are kept
/// in `extra` so they survive a persist/restore cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend user id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// University student number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    /// Home campus code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<String>,
    /// Contribution level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Role the profile was created for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Read a stored profile object one key at a time.
    ///
    /// A modelled key whose value has the wrong type is kept verbatim in
    /// `extra`, so it neither discards the other fields nor is lost on the
    /// next persist.
    ///
    /// # Examples
    /// ```
    /// use meow_client::domain::UserProfile;
    /// use serde_json::json;
    ///
    /// let stored = json!({ "nickname": "mimi", "id": 42 });
    /// let profile = UserProfile::from_record(stored.as_object().unwrap());
    /// assert_eq!(profile.nickname.as_deref(), Some("mimi"));
    /// assert_eq!(profile.id, None);
    /// assert_eq!(profile.extra.get("id"), Some(&json!(42)));
    /// ```
    #[must_use]
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let mut profile = Self::default();
        for (key, value) in record {
            let decoded = match key.as_str() {
                "id" => decode_into(&mut profile.id, value),
                "nickname" => decode_into(&mut profile.nickname, value),
                "avatar" => decode_into(&mut profile.avatar, value),
                "studentId" => decode_into(&mut profile.student_id, value),
                "campus" => decode_into(&mut profile.campus, value),
                "level" => decode_into(&mut profile.level, value),
                "role" => decode_into(&mut profile.role, value),
                _ => false,
            };
            if !decoded {
                profile.extra.insert(key.clone(), value.clone());
            }
        }
        profile
    }
}

fn decode_into<T: DeserializeOwned>(slot: &mut Option<T>, value: &Value) -> bool {
    *slot = serde_json::from_value(value.clone()).ok();
    slot.is_some()
}

/// Snapshot of the session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token; always `None` for guests.
    pub token: Option<String>,
    /// Current role; `None` when nobody is signed in.
    pub role: Option<Role>,
    /// Cached profile.
    pub profile: Option<UserProfile>,
    /// Whether persisted state has been read back since startup.
    pub hydrated: bool,
}

impl Session {
    /// Someone (user, admin, or guest) is using the client.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// The visitor chose guest mode.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.role == Some(Role::Guest)
    }

    /// A moderator is signed in.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// A student account is signed in.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Some(Role::User)
    }
}

/// Arguments of the login transition.
///
/// The caller derives `role` and checks the token before building this;
/// the store applies it as given.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginPayload {
    /// Bearer token issued by the backend.
    pub token: Option<String>,
    /// Role the caller determined for this account.
    pub role: Role,
    /// Profile to cache, if known.
    pub profile: Option<UserProfile>,
}

/// The persisted subset of [`Session`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersistedSession {
    /// See [`Session::token`].
    pub token: Option<String>,
    /// See [`Session::role`].
    pub role: Option<Role>,
    /// See [`Session::profile`].
    pub profile: Option<UserProfile>,
}

impl PersistedSession {
    /// Read a stored document field by field.
    ///
    /// Returns `None` when the text is not a JSON object. Inside an object,
    /// any field that is missing or unusable reads as `None` without
    /// affecting the others.
    ///
    /// # Examples
    /// ```
    /// use meow_client::domain::{PersistedSession, Role};
    ///
    /// let restored = PersistedSession::from_stored(r#"{"token":"t","role":"wizard"}"#)
    ///     .expect("object documents are readable");
    /// assert_eq!(restored.token.as_deref(), Some("t"));
    /// assert_eq!(restored.role, None);
    ///
    /// assert!(PersistedSession::from_stored("not json").is_none());
    /// ```
    #[must_use]
    pub fn from_stored(text: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(text).ok()?;
        if !value.is_object() {
            return None;
        }
        let record = as_record(&value);

        let token = record
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let role = record.get("role").and_then(Value::as_str).and_then(Role::parse);
        let profile = record
            .get("profile")
            .and_then(Value::as_object)
            .map(UserProfile::from_record);

        Some(Self {
            token,
            role,
            profile,
        })
    }

    /// Whether nothing worth restoring was stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token.is_none() && self.role.is_none() && self.profile.is_none()
    }
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            role: session.role,
            profile: session.profile.clone(),
        }
    }
}
