use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.assets_dir.ends_with("client/style"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("127.0.0.1"), Some("/srv/assets")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_vars_accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_vars(None, Some("::1"), None).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn from_vars_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some(""), None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(Some("http"), None, None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert!(err.to_string().contains("invalid PORT"));

    let err = ServerConfig::from_vars(Some("70000"), None, None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
}

#[test]
fn from_vars_rejects_bad_bind_addr() {
    let err = ServerConfig::from_vars(None, Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
}

/// The only test that touches process env; keep it that way to avoid races.
#[test]
fn from_env_reads_port() {
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("BIND_ADDR");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);

    unsafe { std::env::remove_var("PORT") };
}
