//! Bearer-token attachment policy for outbound requests.
//!
//! DESIGN
//! ======
//! A pure function of `(url, stored token)`: the login and register calls
//! must never carry a token (the server rejects pre-authorized auth
//! requests), every other request carries one whenever it exists. There is
//! no retry and no refresh-on-401 here.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

/// URL substrings identifying the endpoints that never carry a token.
pub const AUTH_ENDPOINT_MARKERS: [&str; 2] = ["/auth/login", "/auth/register"];

/// Whether `url` addresses one of the auth endpoints themselves.
pub fn is_auth_endpoint(url: &str) -> bool {
    AUTH_ENDPOINT_MARKERS.iter().any(|marker| url.contains(marker))
}

/// `Authorization` header value for a request to `url`, given the stored
/// token.
///
/// `None` means the request goes out unmodified — either the URL is an
/// auth endpoint or no token is stored.
pub fn authorization_header(url: &str, token: Option<&str>) -> Option<String> {
    if is_auth_endpoint(url) {
        return None;
    }
    token.map(|t| format!("Bearer {t}"))
}
