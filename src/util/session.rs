//! JWT-style token inspection for session validity.
//!
//! DESIGN
//! ======
//! The token is trusted at face value: only the payload claims are decoded,
//! the signature is never verified. The check can therefore reject an
//! expired or malformed token, not a forged one. That limitation is part of
//! the contract — the server re-validates every authorized request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::Deserialize;

/// Claims this client reads from the token payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenClaims {
    /// Expiry in seconds since the Unix epoch.
    pub exp: Option<i64>,
    /// Subject the token was issued to, usually the username.
    pub sub: Option<String>,
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// Returns `None` for anything that is not three dot-separated segments
/// with a base64-decodable JSON object in the middle. Tokens in the wild
/// arrive both unpadded base64url and `atob`-style standard-alphabet, so
/// both are accepted.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether `token` is still valid at `now` (seconds since epoch).
///
/// Valid means `exp` is present and strictly greater than `now`; a token
/// with no parseable `exp` claim is never valid.
pub fn is_valid_at(token: &str, now: i64) -> bool {
    decode_claims(token)
        .and_then(|claims| claims.exp)
        .is_some_and(|exp| exp > now)
}

/// Whether the (optionally) stored token is valid right now.
pub fn is_valid(token: Option<&str>) -> bool {
    token.is_some_and(|t| is_valid_at(t, current_unix_seconds()))
}

/// Current wall-clock time in whole seconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn current_unix_seconds() -> i64 {
    #[cfg(feature = "csr")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() as i64)
    }
}
