//! Client core: response adaptation, session state, and routing policy.
//!
//! Purpose: turn an unreliable backend contract into strongly typed values
//! and keep the "who is using the client" state consistent across restarts.
//! Nothing here performs I/O directly; HTTP and storage go through [`ports`].
//!
//! Public surface:
//! - Coercion helpers (`as_record`, `as_string`, ...) for untrusted JSON.
//! - [`ApiResult`] and [`normalize_api_envelope`] for successful responses.
//! - [`ApiError`] and [`to_api_error`] for failed ones.
//! - [`SessionStore`] and [`CampusStore`] for persisted client state.
//! - [`require_role`] and [`landing_redirect`] for navigation decisions.
//! - Login helpers such as [`LoginCredentials`] and [`session_from_login`].

pub mod auth;
pub mod campus;
pub mod coerce;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod paged;
pub mod ports;
pub mod session;
pub mod session_store;

pub use self::auth::{
    AuthLoginData, LoginCredentials, LoginFlowError, LoginValidationError, SDU_MAIL_DOMAIN,
    complete_sdu_mail, infer_role_from_email, session_from_login,
};
pub use self::campus::{CAMPUS_STORAGE_KEY, CampusStore, DEFAULT_CAMPUS};
pub use self::coerce::{
    as_array, as_code, as_count, as_non_empty_str, as_number, as_record, as_string,
};
pub use self::envelope::{ApiResult, normalize_api_envelope};
pub use self::error::{
    ApiError, ApiErrorShape, ENDPOINT_UNAVAILABLE_MESSAGE, FailurePresentation,
    GENERIC_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE, TransportFailure, describe_failure,
    to_api_error,
};
pub use self::guard::{
    ADMIN_HOME_PATH, ADMIN_ROLES, GuardDecision, LOGIN_PATH, LandingDecision, USER_AREA_ROLES,
    USER_HOME_PATH, USER_PRIVATE_ROLES, landing_redirect, require_role,
};
pub use self::paged::{Paged, to_paged};
pub use self::session::{LoginPayload, PersistedSession, Role, Session, UserProfile};
pub use self::session_store::{HydrationOutcome, SESSION_STORAGE_KEY, SessionStore};
