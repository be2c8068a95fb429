use super::*;

#[test]
fn short_username_is_rejected() {
    assert_eq!(
        login_form_error("ab", "longenough"),
        Some("username must be at least 3 characters")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        login_form_error("alice", "12345"),
        Some("password must be at least 6 characters")
    );
}

#[test]
fn valid_form_passes() {
    assert_eq!(login_form_error("alice", "123456"), None);
}

#[test]
fn username_length_counts_characters_not_bytes() {
    // Three umlauts are three characters even though they are six bytes.
    assert_eq!(login_form_error("äöü", "123456"), None);
}
