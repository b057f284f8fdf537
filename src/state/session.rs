//! Auth-session state: the single source of truth for "who is logged in"
//! within one browser tab.
//!
//! DESIGN
//! ======
//! `SessionState` is plain data held in a `RwSignal` provided via context.
//! The transitions that also touch token storage are free functions generic
//! over `TokenStore`, so native tests drive independent sessions against an
//! in-memory store while the browser wiring uses `localStorage`. Three
//! states are reachable: unauthenticated (no token/user), loading (initial
//! mount or an auth call in flight), and authenticated (token and user both
//! present) — `user` and `token` are only ever set or cleared together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiClient;
use crate::net::types::{AuthSession, Role, User};
use crate::util::storage::{BrowserTokenStore, TokenStore};

/// Session state for the current browser tab.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// The authenticated user, if any.
    pub user: Option<User>,
    /// The bearer token backing the session, if any.
    pub token: Option<String>,
    /// Whether the initial storage check or an auth call is in flight.
    pub loading: bool,
}

impl SessionState {
    /// State at application mount, before the stored token has been checked.
    #[must_use]
    pub fn booting() -> Self {
        Self { user: None, token: None, loading: true }
    }

    /// True iff both `user` and `token` are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Rename the in-memory user. Valid only while authenticated; returns
    /// whether the rename applied. No backend write-through exists.
    pub fn set_user_name(&mut self, name: &str) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        if let Some(user) = &mut self.user {
            user.name = Some(name.to_owned());
        }
        true
    }

    fn set_session(&mut self, token: String, user: User) {
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }

    fn clear_session(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
    }
}

/// Commit a successful sign-in/sign-up: persist the token, then populate the
/// in-memory session.
pub fn commit_sign_in<S: TokenStore>(state: &mut SessionState, tokens: &S, session: AuthSession) {
    tokens.store(&session.token);
    state.set_session(session.token, session.user);
}

/// Commit a sign-out: drop the stored token and clear the in-memory session.
/// No server call is made; the token is simply forgotten.
pub fn commit_sign_out<S: TokenStore>(state: &mut SessionState, tokens: &S) {
    tokens.clear();
    state.clear_session();
}

/// Commit a successful session restore from a previously stored token.
pub fn commit_restore_success(state: &mut SessionState, token: String, user: User) {
    state.set_session(token, user);
}

/// Commit a failed session restore: the stored token is invalid, so remove
/// it and revert to unauthenticated.
pub fn commit_restore_failure<S: TokenStore>(state: &mut SessionState, tokens: &S) {
    tokens.clear();
    state.clear_session();
}

/// The session signal provided by the application root.
///
/// # Panics
///
/// Panics when called outside the provider's subtree, so a missing provider
/// fails fast instead of yielding a silent default.
#[must_use]
pub fn use_session() -> RwSignal<SessionState> {
    leptos::prelude::expect_context()
}

/// Restore the session from a stored token at application start.
///
/// Absent token: clears the loading flag and stays unauthenticated. Present
/// token: fetches the current user; on failure the token is removed and the
/// failure is logged, never surfaced to the UI.
pub async fn restore_session(session: RwSignal<SessionState>) {
    let tokens = BrowserTokenStore;
    let Some(token) = tokens.token() else {
        session.update(SessionState::clear_session);
        return;
    };

    session.update(|s| s.loading = true);
    match ApiClient::new().current_user().await {
        Ok(user) => session.update(|s| commit_restore_success(s, token, user)),
        Err(e) => {
            leptos::logging::warn!("session restore failed: {e}");
            session.update(|s| commit_restore_failure(s, &tokens));
        }
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Auth failures come back as a message value for inline rendering; the
/// session is left unauthenticated. On success the returned user is taken
/// straight from the API response, never from reactive state.
pub async fn sign_in(session: RwSignal<SessionState>, email: &str, password: &str) -> Result<User, String> {
    session.update(|s| s.loading = true);
    let result = ApiClient::new().sign_in(email, password).await;
    finish_auth_call(session, result)
}

/// Create an account with email, password, and a role.
///
/// # Errors
///
/// Same contract as [`sign_in`].
pub async fn sign_up(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    role: Role,
) -> Result<User, String> {
    session.update(|s| s.loading = true);
    let result = ApiClient::new().sign_up(email, password, role).await;
    finish_auth_call(session, result)
}

/// Sign out: clear the in-memory session and remove the stored token. No
/// network call is made.
pub fn sign_out(session: RwSignal<SessionState>) {
    session.update(|s| commit_sign_out(s, &BrowserTokenStore));
}

/// Rename the in-memory user; returns whether the rename applied.
pub fn update_user_name(session: RwSignal<SessionState>, name: &str) -> bool {
    let mut applied = false;
    session.update(|s| applied = s.set_user_name(name));
    applied
}

fn finish_auth_call(
    session: RwSignal<SessionState>,
    result: Result<AuthSession, crate::net::api::ApiError>,
) -> Result<User, String> {
    match result {
        Ok(auth) => {
            let user = auth.user.clone();
            session.update(|s| commit_sign_in(s, &BrowserTokenStore, auth));
            Ok(user)
        }
        Err(e) => {
            session.update(|s| s.loading = false);
            Err(e.to_string())
        }
    }
}
