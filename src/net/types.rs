//! Wire DTOs for the auth and account APIs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form payload. Built per submit, never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration payload; the username is trimmed before send.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Success body of the login endpoint. Extra fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Normalized outcome of the registration flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
}

/// An account row as served by the account API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub owner: String,
    pub balance: f64,
}

/// Transfer form payload for the account API.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: i64,
    pub to_account_id: i64,
    pub amount: f64,
}

/// A failed remote call, before collapsing to a display message.
///
/// This never crosses into the view layer; pages only ever see the mapped
/// message string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// The request never produced an HTTP response.
    Transport(String),
    /// The server answered with a non-success status.
    Http { status: u16, body: String },
}
