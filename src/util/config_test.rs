use super::*;

#[test]
fn endpoint_urls_join_single_slash() {
    assert_eq!(login_url("http://localhost:8081"), "http://localhost:8081/api/auth/login");
    assert_eq!(register_url("http://localhost:8081"), "http://localhost:8081/api/auth/register");
    assert_eq!(accounts_url("http://localhost:8081"), "http://localhost:8081/api/accounts");
    assert_eq!(
        transfer_url("http://localhost:8081"),
        "http://localhost:8081/api/accounts/transfer"
    );
}

#[test]
fn normalize_base_strips_trailing_slash_and_whitespace() {
    assert_eq!(normalize_base(" http://host:9000/ "), "http://host:9000");
    assert_eq!(normalize_base("http://host:9000"), "http://host:9000");
}

#[test]
fn base_url_defaults_off_browser() {
    assert_eq!(api_base_url(), DEFAULT_BASE_URL);
}
