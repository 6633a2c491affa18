//! Integration tests for loading settings and building loggers from them.
//!
//! Run with: `cargo test --test config_integration`

use std::fs;

use tempfile::TempDir;

use logfacade::config::{build_logger, Backend, ConfigError, LoggingSettings};
use logfacade::log::{Level, Logger};
use logfacade::log_error;

#[test]
fn test_ini_file_to_stream_logger() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("app.log");
    let ini_path = dir.path().join("app.ini");
    fs::write(
        &ini_path,
        format!(
            "[logging]\nbackend = stream\nlevel = error\npath = {}\ncreate = true\n",
            log_path.display()
        ),
    )
    .unwrap();

    let settings = LoggingSettings::load_from(&ini_path).unwrap();
    assert_eq!(settings.backend, Backend::Stream);
    assert_eq!(settings.effective_level(), Level::Error);

    let logger = build_logger(&settings).unwrap();
    logger.warn("below threshold");
    log_error!(logger, "disk {} failed", "sda");

    assert_eq!(fs::read_to_string(&log_path).unwrap(), "disk sda failed\n");
}

#[test]
fn test_ini_file_to_structured_logger() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("app.json");
    let settings = LoggingSettings::from_ini_str(&format!(
        "[logging]\nbackend = structured\nlevel = debug\npaths = {}\n",
        json_path.display()
    ))
    .unwrap();

    let logger = build_logger(&settings).unwrap();
    logger.debug("engine up");

    let output = fs::read_to_string(&json_path).unwrap();
    assert!(output.contains(r#""level":"DEBUG""#));
    assert!(output.contains(r#""message":"engine up""#));
}

#[test]
fn test_invalid_level_is_reported() {
    let err = LoggingSettings::from_ini_str("[logging]\nlevel = verbose\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "level"));
}
