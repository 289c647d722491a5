//! Behaviour tests for the session lifecycle and role guards.
//!
//! Scenarios drive a `SessionStore` over in-memory storage and check both
//! the in-memory state and what was persisted, then ask the guards where a
//! visitor would end up.

use std::cell::RefCell;
use std::sync::Arc;

use meow_client::domain::{
    GuardDecision, HydrationOutcome, LandingDecision, LoginPayload, PersistedSession, Role,
    SESSION_STORAGE_KEY, SessionStore, USER_PRIVATE_ROLES, UserProfile, landing_redirect,
    require_role,
};
use meow_client::outbound::storage::MemoryStateStorage;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

struct SessionRoutingWorld {
    storage: Arc<MemoryStateStorage>,
    store: SessionStore,
    outcome: RefCell<Option<HydrationOutcome>>,
}

impl SessionRoutingWorld {
    fn new() -> Self {
        let storage = Arc::new(MemoryStateStorage::default());
        let store = SessionStore::new(storage.clone());
        Self {
            storage,
            store,
            outcome: RefCell::new(None),
        }
    }

    fn sign_in(&self, role: Role, token: &str) {
        self.store.login(LoginPayload {
            token: Some(token.to_owned()),
            role,
            profile: Some(UserProfile {
                nickname: Some(format!("{role}@mail.sdu.edu.cn")),
                role: Some(role),
                ..UserProfile::default()
            }),
        });
    }

    fn stored(&self) -> Option<PersistedSession> {
        self.storage
            .get(SESSION_STORAGE_KEY)
            .and_then(|text| PersistedSession::from_stored(&text))
    }

    fn decision_for(&self, path: &str) -> GuardDecision {
        require_role(USER_PRIVATE_ROLES, &self.store.snapshot(), path)
    }
}

fn parse_role(raw: &str) -> Role {
    Role::parse(raw).expect("feature files use known role names")
}

#[fixture]
fn world() -> SessionRoutingWorld {
    SessionRoutingWorld::new()
}

#[given("a signed-in user with token \"{token}\"")]
fn a_signed_in_user(world: &SessionRoutingWorld, token: String) {
    world.sign_in(Role::User, &token);
}

#[given("a signed-in admin with token \"{token}\"")]
fn a_signed_in_admin(world: &SessionRoutingWorld, token: String) {
    world.sign_in(Role::Admin, &token);
}

#[given("a stored session for role \"{role}\" with token \"{token}\"")]
fn a_stored_session(world: &SessionRoutingWorld, role: String, token: String) {
    let record = serde_json::json!({
        "token": token,
        "role": role,
        "profile": { "nickname": "stored" },
    });
    world
        .storage
        .insert(SESSION_STORAGE_KEY, &record.to_string());
}

#[given("a stored user session whose profile has nickname \"{nickname}\" and a numeric id")]
fn a_stored_profile_with_numeric_id(world: &SessionRoutingWorld, nickname: String) {
    let record = serde_json::json!({
        "token": "t",
        "role": "user",
        "profile": { "nickname": nickname, "id": 42 },
    });
    world
        .storage
        .insert(SESSION_STORAGE_KEY, &record.to_string());
}

#[given("the stored session text is \"{text}\"")]
fn the_stored_session_text(world: &SessionRoutingWorld, text: String) {
    world.storage.insert(SESSION_STORAGE_KEY, &text);
}

#[given("the session store has hydrated")]
fn the_session_store_has_hydrated(world: &SessionRoutingWorld) {
    assert_ne!(world.store.hydrate(), HydrationOutcome::AlreadyHydrated);
}

#[when("the visitor enters guest mode")]
fn the_visitor_enters_guest_mode(world: &SessionRoutingWorld) {
    world.store.enter_guest();
}

#[when("the visitor logs out")]
fn the_visitor_logs_out(world: &SessionRoutingWorld) {
    world.store.logout();
}

#[when("the session store hydrates")]
fn the_session_store_hydrates(world: &SessionRoutingWorld) {
    *world.outcome.borrow_mut() = Some(world.store.hydrate());
}

#[then("the session role is \"{role}\"")]
fn the_session_role_is(world: &SessionRoutingWorld, role: String) {
    assert_eq!(world.store.role(), Some(parse_role(&role)));
}

#[then("the session has no token")]
fn the_session_has_no_token(world: &SessionRoutingWorld) {
    assert_eq!(world.store.token(), None);
    assert_eq!(world.store.snapshot().profile, None);
}

#[then("the session token is \"{token}\"")]
fn the_session_token_is(world: &SessionRoutingWorld, token: String) {
    assert_eq!(world.store.token(), Some(token));
}

#[then("the stored session role is \"{role}\"")]
fn the_stored_session_role_is(world: &SessionRoutingWorld, role: String) {
    let stored = world.stored().expect("a session should be stored");
    assert_eq!(stored.role, Some(parse_role(&role)));
    assert_eq!(stored.token, None);
}

#[then("the profile nickname is \"{nickname}\"")]
fn the_profile_nickname_is(world: &SessionRoutingWorld, nickname: String) {
    let profile = world
        .store
        .snapshot()
        .profile
        .expect("the profile should be restored");
    assert_eq!(profile.nickname, Some(nickname));
}

#[then("the session is signed out")]
fn the_session_is_signed_out(world: &SessionRoutingWorld) {
    let session = world.store.snapshot();
    assert_eq!(session.role, None);
    assert_eq!(session.token, None);
    assert_eq!(session.profile, None);
    assert!(!session.is_authenticated());
}

#[then("no session is stored")]
fn no_session_is_stored(world: &SessionRoutingWorld) {
    assert_eq!(world.storage.get(SESSION_STORAGE_KEY), None);
}

#[then("hydration reports \"{outcome}\"")]
fn hydration_reports(world: &SessionRoutingWorld, outcome: String) {
    let expected = match outcome.as_str() {
        "restored" => HydrationOutcome::Restored,
        "empty" => HydrationOutcome::Empty,
        "unreadable" => HydrationOutcome::Unreadable,
        other => panic!("unknown hydration outcome {other}"),
    };
    assert_eq!(*world.outcome.borrow(), Some(expected));
    assert!(world.store.is_hydrated());
}

#[then("the landing page is \"{path}\"")]
fn the_landing_page_is(world: &SessionRoutingWorld, path: String) {
    match landing_redirect(&world.store.snapshot()) {
        LandingDecision::Redirect(actual) => assert_eq!(actual, path),
        LandingDecision::Suspend => panic!("landing should be decided after hydration"),
    }
}

#[then("visiting \"{path}\" is suspended")]
fn visiting_is_suspended(world: &SessionRoutingWorld, path: String) {
    assert_eq!(world.decision_for(&path), GuardDecision::Suspend);
}

#[then("visiting \"{path}\" renders")]
fn visiting_renders(world: &SessionRoutingWorld, path: String) {
    assert_eq!(world.decision_for(&path), GuardDecision::Render);
}

#[then("visiting \"{path}\" redirects to login without a return path")]
fn visiting_redirects_without_return(world: &SessionRoutingWorld, path: String) {
    assert_eq!(
        world.decision_for(&path),
        GuardDecision::RedirectToLogin { from: None }
    );
}

#[then("visiting \"{path}\" redirects to login from \"{from}\"")]
fn visiting_redirects_from(world: &SessionRoutingWorld, path: String, from: String) {
    assert_eq!(
        world.decision_for(&path),
        GuardDecision::RedirectToLogin { from: Some(from) }
    );
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "Entering guest mode discards the previous login"
)]
fn guest_mode_discards_login(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "Logging out twice leaves the session signed out"
)]
fn logout_is_idempotent(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "A stored session is restored on startup"
)]
fn stored_session_is_restored(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "A stored profile with a mistyped id keeps its nickname"
)]
fn mistyped_profile_field_is_tolerated(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "A corrupted stored session is ignored"
)]
fn corrupted_session_is_ignored(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "Navigation waits for hydration"
)]
fn navigation_waits_for_hydration(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "Guests cannot reach account pages"
)]
fn guests_cannot_reach_account_pages(world: SessionRoutingWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_routing.feature",
    name = "Anonymous visitors are sent to login with a return path"
)]
fn anonymous_visitors_keep_return_path(world: SessionRoutingWorld) {
    drop(world);
}
