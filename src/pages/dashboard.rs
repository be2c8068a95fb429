//! Dashboard page: guarded account overview with a transfer form.
//!
//! The guard redirects unauthenticated visits to the login view; the
//! account list and the transfer call both go out with the bearer header
//! attached by the interceptor policy.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::AccountCard;
use crate::net::types::TransferRequest;
use crate::state::auth::{AuthState, SessionContext};
use crate::util::guard;

/// Validate the transfer form and build the wire payload.
fn parse_transfer(from: &str, to: &str, amount: &str) -> Result<TransferRequest, &'static str> {
    let from_account_id = from
        .trim()
        .parse::<i64>()
        .map_err(|_| "enter a valid source account number")?;
    let to_account_id = to
        .trim()
        .parse::<i64>()
        .map_err(|_| "enter a valid target account number")?;
    if from_account_id == to_account_id {
        return Err("source and target accounts must differ");
    }
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|_| "enter a valid amount")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("amount must be greater than zero");
    }
    Ok(TransferRequest { from_account_id, to_account_id, amount })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = session.auth;
    let navigate = use_navigate();

    // Re-check the stored token on entry so an expired session cannot ride
    // in on stale in-memory state.
    if !session.client.is_logged_in() {
        auth.set(AuthState::signed_out());
    }
    guard::install_unauth_redirect(auth, "/dashboard", navigate.clone());

    // Account list — fetched on mount, refetched after a transfer.
    let accounts = LocalResource::new({
        let client = session.client.clone();
        move || {
            let client = client.clone();
            async move { client.fetch_accounts().await }
        }
    });

    // Transfer form state.
    let from_account = RwSignal::new(String::new());
    let to_account = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let transfer_note = RwSignal::new(String::new());
    let transfer_busy = RwSignal::new(false);

    let on_logout = {
        let client = session.client.clone();
        let navigate = navigate.clone();
        move |_| {
            client.logout();
            auth.set(AuthState::signed_out());
            navigate("/login", NavigateOptions::default());
        }
    };

    let on_transfer = {
        let client = session.client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if transfer_busy.get() {
                return;
            }
            let request =
                match parse_transfer(&from_account.get(), &to_account.get(), &amount.get()) {
                    Ok(request) => request,
                    Err(problem) => {
                        transfer_note.set(problem.to_owned());
                        return;
                    }
                };
            transfer_busy.set(true);
            transfer_note.set(String::new());

            #[cfg(feature = "csr")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    match client.transfer(&request).await {
                        Ok(message) => {
                            transfer_note.set(message);
                            amount.set(String::new());
                            accounts.refetch();
                        }
                        Err(message) => transfer_note.set(message),
                    }
                    transfer_busy.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (request, &client);
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Bank Portal"</h1>
                <div class="dashboard-page__user">
                    <span class="dashboard-page__username">
                        {move || auth.get().user.map(|u| u.username).unwrap_or_default()}
                    </span>
                    <button class="btn" on:click=on_logout>
                        "log out"
                    </button>
                </div>
            </header>

            <section class="dashboard-page__accounts">
                <h2>"Accounts"</h2>
                <Suspense fallback=move || {
                    view! { <p class="dashboard-page__status">"loading accounts..."</p> }
                }>
                    {move || {
                        accounts
                            .get()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="dashboard-page__status">"no accounts yet"</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="dashboard-page__cards">
                                                {list
                                                    .into_iter()
                                                    .map(|account| {
                                                        view! { <AccountCard account=account/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(message) => {
                                    view! {
                                        <p class="dashboard-page__status dashboard-page__status--error">
                                            {message}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="dashboard-page__transfer">
                <h2>"Transfer"</h2>
                <form class="transfer-form" on:submit=on_transfer>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="from account"
                        prop:value=move || from_account.get()
                        on:input=move |ev| from_account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="to account"
                        prop:value=move || to_account.get()
                        on:input=move |ev| to_account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="amount"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || transfer_busy.get()>
                        {move || if transfer_busy.get() { "transferring..." } else { "transfer" }}
                    </button>
                </form>
                <Show when=move || !transfer_note.get().is_empty()>
                    <p class="dashboard-page__status">{move || transfer_note.get()}</p>
                </Show>
            </section>
        </div>
    }
}
