use super::*;

#[test]
fn override_takes_precedence_over_localhost() {
    let config = ApiConfig::resolve(Some("https://api.example.edu/v2"), "localhost");
    assert_eq!(config.base_url(), "https://api.example.edu/v2");
}

#[test]
fn override_trailing_slash_is_trimmed() {
    let config = ApiConfig::resolve(Some("https://api.example.edu/"), "school.example.edu");
    assert_eq!(config.base_url(), "https://api.example.edu");
}

#[test]
fn empty_override_is_ignored() {
    let config = ApiConfig::resolve(Some("  "), "localhost");
    assert_eq!(config.base_url(), LOCALHOST_API_BASE);
}

#[test]
fn localhost_host_uses_local_default() {
    assert_eq!(ApiConfig::resolve(None, "localhost").base_url(), "http://localhost:5000/api");
}

#[test]
fn loopback_ip_is_not_treated_as_localhost() {
    assert_eq!(ApiConfig::resolve(None, "127.0.0.1").base_url(), "/api");
}

#[test]
fn other_hosts_use_relative_prefix() {
    assert_eq!(ApiConfig::resolve(None, "learn.example.edu").base_url(), "/api");
}

#[test]
fn default_config_is_relative() {
    assert_eq!(ApiConfig::default().base_url(), RELATIVE_API_BASE);
}

#[test]
fn endpoints_join_without_double_slash() {
    let config = ApiConfig::resolve(None, "example.edu");
    assert_eq!(config.my_certificates_url(), "/api/certificates/my-certificates");
    assert_eq!(config.public_courses_url(), "/api/evaluations/public/courses");
    assert_eq!(config.evaluation_export_url("abc123"), "/api/evaluations/export/abc123");
    assert_eq!(config.endpoint("/x"), "/api/x");
}

#[test]
fn absolute_url_prefixes_relative_paths() {
    assert_eq!(
        absolute_url("https://learn.example.edu", "/api/evaluations/export/1"),
        "https://learn.example.edu/api/evaluations/export/1"
    );
}

#[test]
fn absolute_url_keeps_absolute_urls() {
    assert_eq!(
        absolute_url("https://learn.example.edu", "http://localhost:5000/api/x"),
        "http://localhost:5000/api/x"
    );
}

#[test]
fn absolute_url_without_origin_is_unchanged() {
    assert_eq!(absolute_url("", "/api/x"), "/api/x");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_host_is_empty_outside_browser() {
    assert!(current_host().is_empty());
    assert!(current_origin().is_empty());
}
