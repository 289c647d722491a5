//! The session state machine and its persistence.
//!
//! States: signed out (`role = None`), signed in as user or admin, and
//! guest (`role = Guest`, no token). Transitions overwrite the persisted
//! subset wholesale. `hydrated` starts `false`, flips once when the stored
//! record has been read back, and never resets.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::ports::{StateStorage, TokenSource};
use super::session::{LoginPayload, PersistedSession, Role, Session};

/// Storage key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "sdu_meow_auth";

/// Result of [`SessionStore::hydrate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// A stored session was restored.
    Restored,
    /// Nothing was stored; the session stays signed out.
    Empty,
    /// The stored record could not be read or was not an object; the
    /// session stays signed out.
    Unreadable,
    /// Hydration already ran; nothing changed.
    AlreadyHydrated,
}

/// Single source of truth for the current session.
///
/// Construct one per application and share it by [`Arc`]; it also serves as
/// the [`TokenSource`] for outgoing requests. Transitions never fail:
/// persistence problems are logged and the in-memory state still changes.
pub struct SessionStore {
    storage: Arc<dyn StateStorage>,
    state: Mutex<Session>,
}

impl SessionStore {
    /// Empty, not yet hydrated store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(Session::default()),
        }
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// Current token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    /// Current role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.lock().role
    }

    /// Whether persisted state has been read back.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.lock().hydrated
    }

    /// Read the persisted session back and mark the store hydrated.
    ///
    /// Runs once; later calls return [`HydrationOutcome::AlreadyHydrated`].
    /// A storage failure or malformed record still completes hydration with
    /// a signed-out session so role-gated screens can proceed.
    #[must_use = "the outcome reports whether a stored session was restored"]
    pub fn hydrate(&self) -> HydrationOutcome {
        if self.is_hydrated() {
            return HydrationOutcome::AlreadyHydrated;
        }

        let (restored, outcome) = match self.storage.read(SESSION_STORAGE_KEY) {
            Ok(None) => (None, HydrationOutcome::Empty),
            Ok(Some(text)) => match PersistedSession::from_stored(&text) {
                Some(record) if record.is_empty() => (None, HydrationOutcome::Empty),
                Some(record) => (Some(record), HydrationOutcome::Restored),
                None => {
                    warn!(key = SESSION_STORAGE_KEY, "stored session is not an object; ignoring");
                    (None, HydrationOutcome::Unreadable)
                }
            },
            Err(error) => {
                warn!(key = SESSION_STORAGE_KEY, %error, "failed to read stored session");
                (None, HydrationOutcome::Unreadable)
            }
        };

        let mut state = self.lock();
        if state.hydrated {
            return HydrationOutcome::AlreadyHydrated;
        }
        if let Some(record) = restored {
            state.token = record.token;
            state.role = record.role;
            state.profile = record.profile;
        }
        state.hydrated = true;
        info!(
            outcome = ?outcome,
            role = state.role.map(Role::as_str),
            "session hydrated"
        );
        outcome
    }

    /// Sign in with a role and token the caller has already validated.
    pub fn login(&self, payload: LoginPayload) {
        let LoginPayload {
            token,
            role,
            profile,
        } = payload;
        self.transition("login", |state| {
            state.token = token;
            state.role = Some(role);
            state.profile = profile;
        });
    }

    /// Enter guest mode. Any token or profile is discarded.
    pub fn enter_guest(&self) {
        self.transition("enter_guest", |state| {
            state.token = None;
            state.role = Some(Role::Guest);
            state.profile = None;
        });
    }

    /// Sign out and delete the persisted record. Idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.lock();
            state.token = None;
            state.role = None;
            state.profile = None;
        }
        if let Err(error) = self.storage.remove(SESSION_STORAGE_KEY) {
            warn!(key = SESSION_STORAGE_KEY, %error, "failed to clear stored session");
        }
        debug!(transition = "logout", "session updated");
    }

    fn transition(&self, name: &'static str, apply: impl FnOnce(&mut Session)) {
        let record = {
            let mut state = self.lock();
            apply(&mut state);
            PersistedSession::from(&*state)
        };
        self.persist(name, &record);
        debug!(transition = name, role = record.role.map(Role::as_str), "session updated");
    }

    fn persist(&self, transition: &'static str, record: &PersistedSession) {
        let text = match serde_json::to_string(record) {
            Ok(text) => text,
            Err(error) => {
                warn!(transition, %error, "failed to encode session");
                return;
            }
        };
        if let Err(error) = self.storage.write(SESSION_STORAGE_KEY, &text) {
            warn!(transition, key = SESSION_STORAGE_KEY, %error, "failed to persist session");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Transitions cannot leave the state half-written, so a poisoned lock
        // still holds a consistent session.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenSource for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("SessionStore")
            .field("role", &state.role)
            .field("has_token", &state.token.is_some())
            .field("hydrated", &state.hydrated)
            .finish_non_exhaustive()
    }
}
