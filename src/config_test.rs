use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.api_url, "http://localhost:8000");
    assert_eq!(cfg.proxy_timeout_secs, 30);
    assert_eq!(cfg.connect_timeout_secs, 5);
    assert_eq!(cfg.port, None);
}

#[test]
fn from_vars_reads_overrides() {
    let cfg = ServerConfig::from_vars(vars(&[
        ("NEXOPS_API_URL", "https://ops.example.com/"),
        ("NEXOPS_PROXY_TIMEOUT_SECS", "12"),
        ("NEXOPS_CONNECT_TIMEOUT_SECS", "2"),
        ("PORT", "8080"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_url, "https://ops.example.com");
    assert_eq!(cfg.proxy_timeout_secs, 12);
    assert_eq!(cfg.connect_timeout_secs, 2);
    assert_eq!(cfg.port, Some(8080));
}

#[test]
fn from_vars_ignores_unparseable_timeouts() {
    let cfg = ServerConfig::from_vars(vars(&[
        ("NEXOPS_PROXY_TIMEOUT_SECS", "soon"),
        ("NEXOPS_CONNECT_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(cfg.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn from_vars_rejects_non_http_url() {
    let err = ServerConfig::from_vars(vars(&[("NEXOPS_API_URL", "localhost:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl("localhost:8000".into()));
}

#[test]
fn blank_api_url_uses_default() {
    let cfg = ServerConfig::from_vars(vars(&[("NEXOPS_API_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn from_vars_rejects_bad_port() {
    for bad in ["0", "70000", "http"] {
        let err = ServerConfig::from_vars(vars(&[("PORT", bad)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(bad.into()));
    }
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.upstream_url("services", None), "http://localhost:8000/api/v1/services");
    assert_eq!(
        cfg.upstream_url("infrastructure/vms", Some("node_id=n1")),
        "http://localhost:8000/api/v1/infrastructure/vms?node_id=n1"
    );
    assert_eq!(cfg.upstream_url("/alerts", Some("")), "http://localhost:8000/api/v1/alerts");
}

#[test]
fn listen_addr_applies_port_override() {
    let site: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(ServerConfig::default().listen_addr(site), site);
    let cfg = ServerConfig { port: Some(9000), ..ServerConfig::default() };
    assert_eq!(cfg.listen_addr(site), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
}
