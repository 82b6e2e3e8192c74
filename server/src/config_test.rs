use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_blank_values_use_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6_host() {
    let cfg = ServerConfig::from_vars(Some("::1"), Some("9000")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:9000");
}

#[test]
fn from_vars_rejects_bad_host() {
    assert_eq!(
        ServerConfig::from_vars(Some("localhost"), None),
        Err(ConfigError::InvalidHost("localhost".into()))
    );
}

#[test]
fn from_vars_rejects_bad_port() {
    assert_eq!(ServerConfig::from_vars(None, Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(ServerConfig::from_vars(None, Some("http")), Err(ConfigError::InvalidPort("http".into())));
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(
        ConfigError::InvalidPort("x".into()).to_string(),
        "invalid PORT 'x': expected an integer in 0..=65535"
    );
}

#[test]
fn from_env_reads_process_environment() {
    // HOST and PORT are not set by the test harness; defaults apply unless a developer exported them.
    if std::env::var_os("HOST").is_none() && std::env::var_os("PORT").is_none() {
        assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig::default());
    }
}
