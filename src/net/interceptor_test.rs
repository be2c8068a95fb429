use super::*;

#[test]
fn login_url_never_gets_a_header() {
    assert_eq!(
        authorization_header("http://localhost:8081/api/auth/login", Some("tok")),
        None
    );
}

#[test]
fn register_url_never_gets_a_header() {
    assert_eq!(
        authorization_header("http://localhost:8081/api/auth/register", Some("tok")),
        None
    );
}

#[test]
fn other_urls_get_a_header_iff_token_is_stored() {
    assert_eq!(
        authorization_header("http://localhost:8081/api/accounts", Some("tok")),
        Some("Bearer tok".to_owned())
    );
    assert_eq!(authorization_header("http://localhost:8081/api/accounts", None), None);
}

#[test]
fn marker_matches_anywhere_in_the_url() {
    assert!(is_auth_endpoint("https://proxy.example/upstream/auth/login?x=1"));
    assert!(!is_auth_endpoint("https://proxy.example/upstream/authenticate"));
}
