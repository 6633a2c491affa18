//! Loading logging settings from INI files.

use ini::Ini;
use std::path::Path;
use thiserror::Error;

use super::settings::LoggingSettings;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to parse config text
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] ini::ParseError),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl LoggingSettings {
    /// Load settings from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no logging config, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Parse settings from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content)?;
        super::parser::parse_ini(&ini)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Backend;
    use crate::log::Level;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = LoggingSettings::load_from(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(settings, LoggingSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logging.ini");
        fs::write(&path, "[logging]\nbackend = null\nlevel = error\n").unwrap();

        let settings = LoggingSettings::load_from(&path).unwrap();

        assert_eq!(settings.backend, Backend::Null);
        assert_eq!(settings.level, Some(Level::Error));
    }

    #[test]
    fn test_from_ini_str() {
        let settings = LoggingSettings::from_ini_str("[logging]\nsugared = on\n").unwrap();
        assert!(settings.sugared);
    }

    #[test]
    fn test_malformed_text_is_parse_error() {
        let err = LoggingSettings::from_ini_str("[logging\nlevel = info\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            section: "logging".to_string(),
            key: "level".to_string(),
            value: "loud".to_string(),
            reason: "must be one of: debug, info, warn, error, none".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: logging.level = 'loud' - must be one of: debug, info, warn, error, none"
        );
    }
}
