//! Logging Tests

use tyreg_infrastructure::config::LoggingConfig;
use tyreg_infrastructure::logging::init_logging;

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        json_format: false,
    };

    let err = init_logging(&config).unwrap_err();

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
    };

    init_logging(&config).unwrap();
    let second = init_logging(&config).unwrap_err();

    assert!(second.to_string().contains("Failed to initialize logging"));
}
