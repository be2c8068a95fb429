use super::*;
use crate::util::token_store::MemoryTokenStore;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.sig")
}

/// Token expiring far in the future (year 2100).
fn valid_token() -> String {
    token_with_payload(r#"{"exp":4102444800}"#)
}

fn expired_token() -> String {
    token_with_payload(r#"{"exp":1000}"#)
}

fn client() -> (AuthClient, MemoryTokenStore) {
    let store = MemoryTokenStore::default();
    let client = AuthClient::new("http://localhost:8081", Rc::new(store.clone()));
    (client, store)
}

fn credentials() -> Credentials {
    Credentials { username: "a".to_owned(), password: "b".to_owned() }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_stores_session_and_signs_in() {
    let (client, store) = client();
    let token = valid_token();
    let body = format!(r#"{{"token":"{token}"}}"#);

    let user = client
        .complete_login(&credentials(), Ok((200, body)))
        .expect("login");

    assert_eq!(user.username, "a");
    assert_eq!(store.token().as_deref(), Some(token.as_str()));
    assert_eq!(store.username().as_deref(), Some("a"));
    assert!(client.is_logged_in());
}

#[test]
fn login_prefers_token_subject_for_display() {
    let (client, store) = client();
    let token = token_with_payload(r#"{"exp":4102444800,"sub":"alice"}"#);
    let body = format!(r#"{{"token":"{token}"}}"#);

    let user = client
        .complete_login(&credentials(), Ok((200, body)))
        .expect("login");

    assert_eq!(user.username, "alice");
    assert_eq!(store.username().as_deref(), Some("alice"));
}

#[test]
fn login_401_maps_to_invalid_credentials_without_store_write() {
    let (client, store) = client();

    let err = client
        .complete_login(&credentials(), Ok((401, String::new())))
        .expect_err("must fail");

    assert_eq!(err, INVALID_CREDENTIALS);
    assert_eq!(store.read(), None);
    assert!(!client.is_logged_in());
}

#[test]
fn login_transport_error_maps_to_generic_message() {
    let (client, store) = client();

    let err = client
        .complete_login(
            &credentials(),
            Err(AuthFailure::Transport("connection refused".to_owned())),
        )
        .expect_err("must fail");

    assert_eq!(err, GENERIC_ERROR);
    assert_eq!(store.read(), None);
}

#[test]
fn login_success_without_token_field_is_generic_failure() {
    let (client, store) = client();

    let err = client
        .complete_login(&credentials(), Ok((200, r#"{"ok":true}"#.to_owned())))
        .expect_err("must fail");

    assert_eq!(err, GENERIC_ERROR);
    assert_eq!(store.read(), None);
}

// =============================================================
// Failure-message precedence
// =============================================================

#[test]
fn plain_text_error_body_is_surfaced_verbatim() {
    let failure = AuthFailure::Http { status: 500, body: "backend down".to_owned() };
    assert_eq!(failure_message(&failure), "backend down");
}

#[test]
fn json_error_field_is_surfaced() {
    let failure =
        AuthFailure::Http { status: 500, body: r#"{"error":"db unavailable"}"#.to_owned() };
    assert_eq!(failure_message(&failure), "db unavailable");
}

#[test]
fn json_object_without_error_field_is_generic_status_message() {
    let failure = AuthFailure::Http { status: 503, body: r#"{"detail":"nope"}"#.to_owned() };
    assert_eq!(failure_message(&failure), "server error: 503");
}

#[test]
fn empty_body_is_generic_status_message() {
    let failure = AuthFailure::Http { status: 500, body: "  ".to_owned() };
    assert_eq!(failure_message(&failure), "server error: 500");
}

#[test]
fn status_401_and_409_win_over_body_content() {
    let unauthorized =
        AuthFailure::Http { status: 401, body: r#"{"error":"whatever"}"#.to_owned() };
    assert_eq!(failure_message(&unauthorized), INVALID_CREDENTIALS);

    let conflict = AuthFailure::Http { status: 409, body: "taken".to_owned() };
    assert_eq!(failure_message(&conflict), USERNAME_TAKEN);
}

// =============================================================
// Register — both delivery channels of the 201 quirk
// =============================================================

#[test]
fn register_200_is_success_with_body_message() {
    let result = complete_register(Ok((200, "welcome aboard".to_owned()))).expect("success");
    assert_eq!(result, AuthResult { success: true, message: "welcome aboard".to_owned() });
}

#[test]
fn register_201_via_success_channel_is_success() {
    let result = complete_register(Ok((201, "created".to_owned()))).expect("success");
    assert!(result.success);
    assert_eq!(result.message, "created");
}

#[test]
fn register_201_via_failure_channel_is_success_too() {
    let outcome = Err(AuthFailure::Http { status: 201, body: "created".to_owned() });
    let result = complete_register(outcome).expect("success");
    assert!(result.success);
    assert_eq!(result.message, "created");
}

#[test]
fn register_empty_body_gets_default_message() {
    let result = complete_register(Ok((201, String::new()))).expect("success");
    assert_eq!(result.message, REGISTERED);
}

#[test]
fn register_409_maps_to_username_taken() {
    let err = complete_register(Ok((409, String::new()))).expect_err("must fail");
    assert_eq!(err, USERNAME_TAKEN);
}

#[test]
fn register_transport_error_maps_to_generic_message() {
    let err = complete_register(Err(AuthFailure::Transport("offline".to_owned())))
        .expect_err("must fail");
    assert_eq!(err, GENERIC_ERROR);
}

// =============================================================
// Logout / restore
// =============================================================

#[test]
fn logout_clears_store_and_signs_out() {
    let (client, store) = client();
    store.save(&valid_token(), "alice");
    assert!(client.is_logged_in());

    client.logout();

    assert_eq!(store.read(), None);
    assert!(!client.is_logged_in());
}

#[test]
fn is_logged_in_is_false_with_empty_store() {
    let (client, _store) = client();
    assert!(!client.is_logged_in());
}

#[test]
fn restore_adopts_a_valid_stored_session() {
    let (client, store) = client();
    store.save(&valid_token(), "alice");

    let user = client.restore().expect("restored");
    assert_eq!(user.username, "alice");
    assert_eq!(store.username().as_deref(), Some("alice"));
}

#[test]
fn restore_clears_an_expired_session() {
    let (client, store) = client();
    store.save(&expired_token(), "alice");

    assert_eq!(client.restore(), None);
    assert_eq!(store.read(), None);
}

#[test]
fn restore_clears_a_malformed_token() {
    let (client, store) = client();
    store.save("not-a-jwt", "alice");

    assert_eq!(client.restore(), None);
    assert_eq!(store.read(), None);
}

// =============================================================
// Accounts / transfer
// =============================================================

#[test]
fn accounts_parse_from_success_body() {
    let body = r#"[{"id":1,"owner":"alice","balance":100.0}]"#.to_owned();
    let accounts = complete_accounts(Ok((200, body))).expect("accounts");
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].owner, "alice");
}

#[test]
fn accounts_failure_maps_to_message() {
    let err = complete_accounts(Ok((500, "storage offline".to_owned()))).expect_err("fail");
    assert_eq!(err, "storage offline");
}

#[test]
fn transfer_passes_the_server_text_through() {
    let text = complete_transfer(Ok((200, "transfer booked".to_owned()))).expect("ok");
    assert_eq!(text, "transfer booked");
}

#[test]
fn transfer_empty_body_gets_default_message() {
    let text = complete_transfer(Ok((200, String::new()))).expect("ok");
    assert_eq!(text, TRANSFERRED);
}

#[test]
fn transfer_400_surfaces_the_body() {
    let err = complete_transfer(Ok((400, "insufficient funds".to_owned()))).expect_err("fail");
    assert_eq!(err, "insufficient funds");
}
