//! Route-guard helpers shared by protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Unauthenticated visits to protected routes bounce to the login view,
//! carrying the attempted URL as a `returnUrl` hint so login can resume
//! where the user was headed. The login and register views themselves are
//! open and are never redirect sources.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Routes reachable without a session.
const OPEN_ROUTES: [&str; 2] = ["/login", "/register"];

/// Route users land on after login when no `returnUrl` hint is present.
pub const DEFAULT_AUTHED_ROUTE: &str = "/dashboard";

/// Whether an unauthenticated redirect should fire for `state`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Login URL carrying the attempted route as a `returnUrl` hint.
///
/// Open routes get a bare login URL so the guard cannot bounce the login
/// and register views onto themselves.
pub fn login_redirect_target(attempted: &str) -> String {
    if attempted.is_empty() || OPEN_ROUTES.contains(&attempted) {
        return "/login".to_owned();
    }
    format!("/login?returnUrl={}", urlencoding::encode(attempted))
}

/// Post-login destination derived from the `returnUrl` query value.
///
/// Only local paths are honored; anything else falls back to the dashboard.
pub fn return_url_or_default(value: Option<&str>) -> String {
    match value {
        Some(v) if v.starts_with('/') => v.to_owned(),
        _ => DEFAULT_AUTHED_ROUTE.to_owned(),
    }
}

/// Install the unauthenticated-redirect effect for a protected route.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, attempted: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(&login_redirect_target(attempted), NavigateOptions::default());
        }
    });
}
