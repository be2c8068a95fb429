//! API endpoint configuration.
//!
//! The original portal hard-coded its API host; deployments want to point
//! the static bundle elsewhere, so the hosting page may inject a
//! `window.__BANK_PORTAL_API__` global that overrides the default base.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when the hosting page injects no override.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Resolve the API base URL, preferring the page-injected override.
pub fn api_base_url() -> String {
    #[cfg(feature = "csr")]
    {
        if let Ok(value) = js_sys::eval("window.__BANK_PORTAL_API__") {
            if let Some(url) = value.as_string() {
                if !url.trim().is_empty() {
                    return normalize_base(&url);
                }
            }
        }
    }
    DEFAULT_BASE_URL.to_owned()
}

/// Trim whitespace and any trailing slash so path joins stay single-slash.
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

pub fn login_url(base: &str) -> String {
    format!("{base}/api/auth/login")
}

pub fn register_url(base: &str) -> String {
    format!("{base}/api/auth/register")
}

pub fn accounts_url(base: &str) -> String {
    format!("{base}/api/accounts")
}

pub fn transfer_url(base: &str) -> String {
    format!("{base}/api/accounts/transfer")
}
