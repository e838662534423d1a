//! Logging helper tests

use tracing::Level;
use variants_infrastructure::logging::parse_log_level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("chatty").unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_init_logging_rejects_unknown_level_before_installing() {
    let config = variants_infrastructure::config::LoggingConfig {
        level: "chatty".to_string(),
        ..Default::default()
    };
    let err = variants_infrastructure::logging::init_logging(&config).unwrap_err();
    assert!(matches!(err, variants_domain::error::Error::Configuration { .. }));
}
