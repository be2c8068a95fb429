//! Registration page: username/password/confirm form posting to the
//! register endpoint, then a delayed hand-off to the login view.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::SessionContext;

/// Delay before returning to login so the success message is readable.
#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u64 = 2_000;

/// First validation problem with the register form, if any. The username
/// is expected pre-trimmed.
fn register_form_error(username: &str, password: &str, confirm: &str) -> Option<&'static str> {
    let name_len = username.chars().count();
    if name_len < 3 {
        Some("username must be at least 3 characters")
    } else if name_len > 20 {
        Some("username must be at most 20 characters")
    } else if password.chars().count() < 6 {
        Some("password must be at least 6 characters")
    } else if password != confirm {
        Some("passwords do not match")
    } else {
        None
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

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
        let confirm_value = confirm.get();
        if let Some(problem) = register_form_error(&username_value, &password_value, &confirm_value)
        {
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
            leptos::task::spawn_local(async move {
                let request = crate::net::types::RegisterRequest {
                    username: username_value,
                    password: password_value,
                };
                match session.client.register(&request).await {
                    Ok(result) => {
                        success.set(result.message);
                        busy.set(false);
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            REDIRECT_DELAY_MS,
                        ))
                        .await;
                        navigate("/login", leptos_router::NavigateOptions::default());
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
                <h1>"Create account"</h1>
                <p class="login-card__subtitle">"Create your free Bank Portal account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        maxlength="20"
                        placeholder="choose a username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            clear_messages();
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="choose a password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            clear_messages();
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="repeat the password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| {
                            confirm.set(event_target_value(&ev));
                            clear_messages();
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "creating account..." } else { "create account" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="login-message login-message--success">{move || success.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Already registered?"</p>
                <a href="/login" class="login-button login-button--secondary">
                    "Back to login"
                </a>
            </div>
        </div>
    }
}
