//! Configuration loading at startup

use std::io::Write;

use variants_server::args::ServerOverrides;
use variants_server::init::load_config;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_overrides_win_over_file() {
    let file = config_file("[server]\nhost = \"127.0.0.1\"\nport = 2500\n");
    let overrides = ServerOverrides {
        host: Some("0.0.0.0".to_string()),
        port: Some(9000),
    };

    let config = load_config(Some(file.path()), &overrides).expect("config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_file_values_kept_without_overrides() {
    let file = config_file("[server]\nport = 2500\n\n[cache]\nwrite_policy = \"invalidate\"\n");

    let config = load_config(Some(file.path()), &ServerOverrides::default()).expect("config");

    assert_eq!(config.server.port, 2500);
    assert_eq!(config.cache.write_policy.as_str(), "invalidate");
}

#[test]
fn test_zero_port_override_rejected() {
    let file = config_file("[server]\nport = 2500\n");
    let overrides = ServerOverrides {
        host: None,
        port: Some(0),
    };

    assert!(load_config(Some(file.path()), &overrides).is_err());
}
