use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_host_and_port() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_bad_ports() {
    for raw in ["", "zero", "0", "70000", "-1"] {
        assert_eq!(
            ServerConfig::from_values(None, Some(raw)),
            Err(ConfigError::InvalidPort { value: raw.to_owned() }),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn rejects_blank_host() {
    assert_eq!(ServerConfig::from_values(Some("  "), None), Err(ConfigError::EmptyHost));
}
