//! Login page: username/password form, in-place messages, and the
//! post-login redirect honoring the guard's `returnUrl` hint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::SessionContext;

/// Delay before leaving the login view so the success message is visible.
#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u64 = 1_000;

/// First validation problem with the login form, if any. The username is
/// expected pre-trimmed.
fn login_form_error(username: &str, password: &str) -> Option<&'static str> {
    if username.chars().count() < 3 {
        Some("username must be at least 3 characters")
    } else if password.chars().count() < 6 {
        Some("password must be at least 6 characters")
    } else {
        None
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "csr")]
    let query = leptos_router::hooks::use_query_map();

    // Typing clears stale feedback, matching the original portal.
    let clear_messages = move || {
        if !error.get_untracked().is_empty() {
            error.set(String::new());
        }
        if !success.get_untracked().is_empty() {
            success.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if let Some(problem) = login_form_error(&username_value, &password_value) {
            error.set(problem.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        success.set(String::new());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            let target = crate::util::guard::return_url_or_default(
                query.get_untracked().get("returnUrl").as_deref(),
            );
            leptos::task::spawn_local(async move {
                let credentials = crate::net::types::Credentials {
                    username: username_value,
                    password: password_value,
                };
                match session.client.login(&credentials).await {
                    Ok(user) => {
                        session.auth.set(crate::state::auth::AuthState::signed_in(user));
                        success.set("login successful, redirecting...".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            REDIRECT_DELAY_MS,
                        ))
                        .await;
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username_value, password_value, &session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Bank Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            clear_messages();
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            clear_messages();
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "signing in..." } else { "sign in" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="login-message login-message--success">{move || success.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"No account yet?"</p>
                <a href="/register" class="login-button login-button--secondary">
                    "Create a free account"
                </a>
            </div>
        </div>
    }
}
