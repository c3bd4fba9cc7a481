//! Logging Tests

use typedkv_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    assert!(parse_log_level("loud").is_err());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_only_once() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = LoggingConfig {
        file_output: Some(temp_dir.path().join("typedkv.log")),
        ..LoggingConfig::default()
    };

    // The first call in this process may succeed; a second never does
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
