use super::*;

// Unique env var names avoid races with parallel tests.

#[test]
fn default_matches_constants() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.latency, Duration::from_millis(500));
    assert_eq!(cfg.token_ttl, Duration::from_secs(24 * 3600));
}

#[test]
fn env_parse_reads_value() {
    let key = "__TEST_AUTH_ENV_PARSE_OK_113__";
    unsafe { std::env::set_var(key, " 42 ") };
    assert_eq!(env_parse(key, 7_u64), 42);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_AUTH_ENV_PARSE_BAD_114__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse(key, 7_u64), 7);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_unset_uses_default() {
    assert_eq!(env_parse("__TEST_AUTH_SURELY_UNSET_115__", 9_u64), 9);
}
