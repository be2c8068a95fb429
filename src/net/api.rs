//! REST client for the portal's remote auth and account APIs.
//!
//! ERROR HANDLING
//! ==============
//! Every remote failure is caught at this boundary and collapsed to a
//! single user-facing message string; callers never see status codes or
//! transport errors, and nothing is retried. The completion helpers take a
//! raw `(status, body)` outcome so the full mapping is unit tested without
//! a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use crate::net::types::{
    Account, AuthFailure, AuthResult, Credentials, LoginResponse, RegisterRequest,
    TransferRequest,
};
use crate::state::auth::CurrentUser;
use crate::util::config;
use crate::util::session;
use crate::util::token_store::TokenStore;

/// Message shown when a failure has no more specific mapping.
pub const GENERIC_ERROR: &str = "an unexpected error occurred";
/// Message for HTTP 401 on login.
pub const INVALID_CREDENTIALS: &str = "invalid credentials";
/// Message for HTTP 409 on registration.
pub const USERNAME_TAKEN: &str = "username already taken";
/// Registration success message when the server body is empty.
pub const REGISTERED: &str = "registration successful";
/// Transfer success message when the server body is empty.
pub const TRANSFERRED: &str = "transfer successful";

/// Raw outcome of an HTTP exchange: `(status, body text)` for any response
/// the server produced, `AuthFailure` when no response arrived.
type HttpOutcome = Result<(u16, String), AuthFailure>;

/// Thin client around the two auth endpoints plus the authorized account
/// API. Clones share the same token store.
#[derive(Clone)]
pub struct AuthClient {
    base_url: String,
    store: Rc<dyn TokenStore>,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, store: Rc<dyn TokenStore>) -> Self {
        Self { base_url: base_url.into(), store }
    }

    /// POST credentials to the login endpoint; on success persist the
    /// session and return the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for any transport or HTTP failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<CurrentUser, String> {
        let outcome = self
            .post_json(&config::login_url(&self.base_url), credentials)
            .await;
        self.complete_login(credentials, outcome)
    }

    fn complete_login(
        &self,
        credentials: &Credentials,
        outcome: HttpOutcome,
    ) -> Result<CurrentUser, String> {
        match outcome {
            Ok((status, body)) if is_success(status) => {
                let response: LoginResponse =
                    serde_json::from_str(&body).map_err(|_| GENERIC_ERROR.to_owned())?;
                let username = display_username(&response.token, &credentials.username);
                self.store.save(&response.token, &username);
                Ok(CurrentUser { username })
            }
            Ok((status, body)) => Err(failure_message(&AuthFailure::Http { status, body })),
            Err(failure) => Err(failure_message(&failure)),
        }
    }

    /// POST a trimmed-username payload to the register endpoint and
    /// normalize the response.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for any transport or HTTP failure
    /// other than the 200/201 success statuses.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResult, String> {
        let request = RegisterRequest {
            username: request.username.trim().to_owned(),
            password: request.password.clone(),
        };
        let outcome = self
            .post_json(&config::register_url(&self.base_url), &request)
            .await;
        complete_register(outcome)
    }

    /// Clear the persisted session. The in-memory user is reset by the
    /// session context holding this client; no network call is made.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Whether a token is stored and has not expired.
    pub fn is_logged_in(&self) -> bool {
        session::is_valid(self.store.token().as_deref())
    }

    /// Re-establish the session from storage on startup.
    ///
    /// Both keys must be present and the token still valid; anything else
    /// clears storage so a half-written session cannot linger.
    pub fn restore(&self) -> Option<CurrentUser> {
        match self.store.read() {
            Some(stored) if session::is_valid(Some(&stored.token)) => {
                Some(CurrentUser { username: stored.username })
            }
            _ => {
                self.logout();
                None
            }
        }
    }

    /// Fetch the account list with the bearer header attached.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for any transport or HTTP failure.
    pub async fn fetch_accounts(&self) -> Result<Vec<Account>, String> {
        let outcome = self.get(&config::accounts_url(&self.base_url)).await;
        complete_accounts(outcome)
    }

    /// Submit a transfer and return the server's plain-text outcome.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for any transport or HTTP failure.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<String, String> {
        let outcome = self
            .post_json(&config::transfer_url(&self.base_url), request)
            .await;
        complete_transfer(outcome)
    }

    /// POST `body` as JSON and return `(status, text)` for any HTTP
    /// response. The bearer header is attached per the interceptor policy.
    async fn post_json<T: serde::Serialize>(&self, url: &str, body: &T) -> HttpOutcome {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::post(url);
            if let Some(header) = crate::net::interceptor::authorization_header(
                url,
                self.store.token().as_deref(),
            ) {
                request = request.header("Authorization", &header);
            }
            let response = request
                .json(body)
                .map_err(|e| AuthFailure::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    leptos::logging::warn!("request to {url} failed: {e}");
                    AuthFailure::Transport(e.to_string())
                })?;
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body, &self.store);
            Err(AuthFailure::Transport("no http stack off-browser".to_owned()))
        }
    }

    /// GET `url` and return `(status, text)`, bearer header per policy.
    async fn get(&self, url: &str) -> HttpOutcome {
        #[cfg(feature = "csr")]
        {
            let mut request = gloo_net::http::Request::get(url);
            if let Some(header) = crate::net::interceptor::authorization_header(
                url,
                self.store.token().as_deref(),
            ) {
                request = request.header("Authorization", &header);
            }
            let response = request.send().await.map_err(|e| {
                leptos::logging::warn!("request to {url} failed: {e}");
                AuthFailure::Transport(e.to_string())
            })?;
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, &self.store);
            Err(AuthFailure::Transport("no http stack off-browser".to_owned()))
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Displayed identity: the token's `sub` claim when present and non-empty,
/// else the username the user submitted.
fn display_username(token: &str, submitted: &str) -> String {
    session::decode_claims(token)
        .and_then(|claims| claims.sub)
        .filter(|sub| !sub.trim().is_empty())
        .unwrap_or_else(|| submitted.to_owned())
}

/// Normalize the register response. The remote API has been observed
/// delivering its 201 through the failure channel of some HTTP stacks, so
/// both channels are folded before matching on the status.
fn complete_register(outcome: HttpOutcome) -> Result<AuthResult, String> {
    let (status, body) = match outcome {
        Ok(pair) => pair,
        Err(AuthFailure::Http { status, body }) => (status, body),
        Err(failure @ AuthFailure::Transport(_)) => return Err(failure_message(&failure)),
    };
    match status {
        200 | 201 => Ok(AuthResult { success: true, message: non_empty_or(body, REGISTERED) }),
        _ => Err(failure_message(&AuthFailure::Http { status, body })),
    }
}

fn complete_accounts(outcome: HttpOutcome) -> Result<Vec<Account>, String> {
    match outcome {
        Ok((status, body)) if is_success(status) => {
            serde_json::from_str(&body).map_err(|_| GENERIC_ERROR.to_owned())
        }
        Ok((status, body)) => Err(failure_message(&AuthFailure::Http { status, body })),
        Err(failure) => Err(failure_message(&failure)),
    }
}

fn complete_transfer(outcome: HttpOutcome) -> Result<String, String> {
    match outcome {
        Ok((status, body)) if is_success(status) => Ok(non_empty_or(body, TRANSFERRED)),
        Ok((status, body)) => Err(failure_message(&AuthFailure::Http { status, body })),
        Err(failure) => Err(failure_message(&failure)),
    }
}

/// Collapse a failure to the single message shown to the user.
///
/// Precedence: transport failures get the generic message; 401 and 409 get
/// fixed texts; a JSON object body contributes its `error` field; any other
/// non-empty body is surfaced verbatim; the rest become a status message.
pub fn failure_message(failure: &AuthFailure) -> String {
    match failure {
        AuthFailure::Transport(_) => GENERIC_ERROR.to_owned(),
        AuthFailure::Http { status: 401, .. } => INVALID_CREDENTIALS.to_owned(),
        AuthFailure::Http { status: 409, .. } => USERNAME_TAKEN.to_owned(),
        AuthFailure::Http { status, body } => message_from_body(*status, body),
    }
}

fn message_from_body(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map
            .get("error")
            .and_then(|v| v.as_str())
            .map_or_else(|| format!("server error: {status}"), ToOwned::to_owned),
        _ if !body.trim().is_empty() => body.to_owned(),
        _ => format!("server error: {status}"),
    }
}

fn non_empty_or(body: String, fallback: &str) -> String {
    if body.trim().is_empty() { fallback.to_owned() } else { body }
}
