//! Session / identity state.
//!
//! `AuthState` is provided once at the root. Only the functions in this
//! module write it; everything else reads a [`SessionState`] snapshot.

use dioxus::prelude::*;
use shared_types::{AppError, Identity, Role, SessionState, HOME_PATH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    session: Signal<SessionState>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionState::resolving()),
        }
    }

    /// Current snapshot. Reading subscribes the calling component.
    pub fn snapshot(&self) -> SessionState {
        self.session.read().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    pub fn user(&self) -> Option<Identity> {
        self.session.read().user.clone()
    }

    fn set(&self, next: SessionState) {
        let mut session = self.session;
        session.set(next);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Resolve the session once on the client.
///
/// Until the call returns the state stays `loading`, so guards render a
/// loading view instead of redirecting.
pub fn use_session_bootstrap(auth: AuthState) {
    use_future(move || async move {
        let next = match server::api::get_current_user().await {
            Ok(Some(user)) => SessionState::signed_in(user),
            Ok(None) => SessionState::anonymous(),
            Err(e) => {
                tracing::error!(error = %AppError::recover(&e), "Session lookup failed");
                SessionState::anonymous()
            }
        };
        auth.set(next);
    });
}

/// Record a successful login.
pub fn sign_in(auth: AuthState, user: Identity) {
    auth.set(SessionState::signed_in(user));
}

/// Drop the session locally, ask the server to clear the cookie, go home.
pub fn sign_out(auth: AuthState) {
    auth.set(SessionState::anonymous());
    spawn(async move {
        if let Err(e) = server::api::logout().await {
            tracing::error!(error = %AppError::recover(&e), "Logout failed");
        }
    });
    navigator().replace(HOME_PATH.to_string());
}
