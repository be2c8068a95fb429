//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal this client replaces kept the signed-in user in a
//! service-global reactive holder. Here the state lives in an explicit
//! `SessionContext` provided once at the app root; `RwSignal` is the
//! subscription mechanism, so route guards and user-aware components react
//! to session changes without an ambient singleton.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::AuthClient;

/// The signed-in identity as displayed by the UI.
///
/// Informational only; authorization is carried by the bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

/// Authentication state tracking the current user and restore progress.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
}

impl AuthState {
    /// State after a successful login or session restore.
    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// State after logout or a failed restore.
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }
}

/// Everything session-aware components need, provided via Leptos context.
#[derive(Clone)]
pub struct SessionContext {
    pub auth: RwSignal<AuthState>,
    pub client: AuthClient,
}

impl SessionContext {
    pub fn new(client: AuthClient) -> Self {
        Self { auth: RwSignal::new(AuthState::default()), client }
    }
}
