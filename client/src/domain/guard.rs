//! Role-based navigation guards.
//!
//! Both guards are pure functions of the session snapshot. Nothing is
//! decided until the session has been hydrated, so a restored login never
//! flashes through the login page.

use super::session::{Role, Session};

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Landing page for moderators.
pub const ADMIN_HOME_PATH: &str = "/admin/home";
/// Landing page for students and guests.
pub const USER_HOME_PATH: &str = "/user/home";

/// Roles admitted to the browsing area under `/user`.
pub const USER_AREA_ROLES: &[Role] = &[Role::User, Role::Guest];
/// Roles admitted to pages that act on behalf of an account.
pub const USER_PRIVATE_ROLES: &[Role] = &[Role::User];
/// Roles admitted to the console under `/admin`.
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];

/// Outcome of [`require_role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render nothing yet; persisted state is still loading.
    Suspend,
    /// Send the visitor to [`LOGIN_PATH`].
    RedirectToLogin {
        /// Page to return to after login; only set when nobody is signed in.
        from: Option<String>,
    },
    /// Show the protected content.
    Render,
}

/// Gate a page on the current role.
///
/// A signed-in role outside `allow` is sent to the login page as well;
/// there is no separate "forbidden" outcome.
///
/// # Examples
/// ```
/// use meow_client::domain::{GuardDecision, Role, Session, USER_PRIVATE_ROLES, require_role};
///
/// let guest = Session { role: Some(Role::Guest), hydrated: true, ..Session::default() };
/// assert_eq!(
///     require_role(USER_PRIVATE_ROLES, &guest, "/user/publish"),
///     GuardDecision::RedirectToLogin { from: None },
/// );
/// ```
#[must_use]
pub fn require_role(allow: &[Role], session: &Session, attempted_path: &str) -> GuardDecision {
    if !session.hydrated {
        return GuardDecision::Suspend;
    }
    match session.role {
        None => GuardDecision::RedirectToLogin {
            from: Some(attempted_path.to_owned()),
        },
        Some(role) if allow.contains(&role) => GuardDecision::Render,
        Some(_) => GuardDecision::RedirectToLogin { from: None },
    }
}

/// Outcome of [`landing_redirect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingDecision {
    /// Persisted state is still loading.
    Suspend,
    /// Navigate to this path.
    Redirect(&'static str),
}

/// Where the root path sends the visitor.
#[must_use]
pub fn landing_redirect(session: &Session) -> LandingDecision {
    if !session.hydrated {
        return LandingDecision::Suspend;
    }
    LandingDecision::Redirect(match session.role {
        Some(Role::Admin) => ADMIN_HOME_PATH,
        Some(Role::User | Role::Guest) => USER_HOME_PATH,
        None => LOGIN_PATH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn session(role: Option<Role>, hydrated: bool) -> Session {
        Session {
            token: None,
            role,
            profile: None,
            hydrated,
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Role::User))]
    #[case(Some(Role::Admin))]
    #[case(Some(Role::Guest))]
    fn suspends_until_hydrated(#[case] role: Option<Role>) {
        assert_eq!(
            require_role(ADMIN_ROLES, &session(role, false), "/admin/home"),
            GuardDecision::Suspend
        );
        assert_eq!(landing_redirect(&session(role, false)), LandingDecision::Suspend);
    }

    #[test]
    fn anonymous_visitors_keep_the_attempted_path() {
        assert_eq!(
            require_role(USER_AREA_ROLES, &session(None, true), "/user/cats/7"),
            GuardDecision::RedirectToLogin {
                from: Some("/user/cats/7".to_owned())
            }
        );
    }

    #[rstest]
    #[case(USER_PRIVATE_ROLES, Role::Guest)]
    #[case(ADMIN_ROLES, Role::User)]
    #[case(USER_AREA_ROLES, Role::Admin)]
    fn disallowed_roles_go_to_login_without_return_path(
        #[case] allow: &[Role],
        #[case] role: Role,
    ) {
        assert_eq!(
            require_role(allow, &session(Some(role), true), "/somewhere"),
            GuardDecision::RedirectToLogin { from: None }
        );
    }

    #[rstest]
    #[case(USER_AREA_ROLES, Role::Guest)]
    #[case(USER_AREA_ROLES, Role::User)]
    #[case(USER_PRIVATE_ROLES, Role::User)]
    #[case(ADMIN_ROLES, Role::Admin)]
    fn allowed_roles_render(#[case] allow: &[Role], #[case] role: Role) {
        assert_eq!(
            require_role(allow, &session(Some(role), true), "/somewhere"),
            GuardDecision::Render
        );
    }

    #[rstest]
    #[case(Some(Role::Admin), ADMIN_HOME_PATH)]
    #[case(Some(Role::User), USER_HOME_PATH)]
    #[case(Some(Role::Guest), USER_HOME_PATH)]
    #[case(None, LOGIN_PATH)]
    fn landing_depends_on_role(#[case] role: Option<Role>, #[case] expected: &'static str) {
        assert_eq!(
            landing_redirect(&session(role, true)),
            LandingDecision::Redirect(expected)
        );
    }
}
