use super::*;
use crate::state::auth::CurrentUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(CurrentUser { username: "alice".to_owned() }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn redirect_target_carries_the_attempted_url() {
    assert_eq!(login_redirect_target("/dashboard"), "/login?returnUrl=%2Fdashboard");
}

#[test]
fn redirect_target_is_bare_for_open_routes() {
    assert_eq!(login_redirect_target("/login"), "/login");
    assert_eq!(login_redirect_target("/register"), "/login");
    assert_eq!(login_redirect_target(""), "/login");
}

#[test]
fn return_url_defaults_to_dashboard() {
    assert_eq!(return_url_or_default(None), "/dashboard");
    assert_eq!(return_url_or_default(Some("")), "/dashboard");
}

#[test]
fn return_url_accepts_local_paths_only() {
    assert_eq!(return_url_or_default(Some("/dashboard")), "/dashboard");
    assert_eq!(return_url_or_default(Some("https://evil.example")), "/dashboard");
}
