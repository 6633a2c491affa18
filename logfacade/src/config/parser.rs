//! INI parsing logic for converting `Ini` → `LoggingSettings`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigError;
use super::settings::{Backend, LoggingSettings};
use crate::log::Level;

/// Section holding all logging keys.
pub const SECTION: &str = "logging";

/// Parse an `Ini` object into `LoggingSettings`.
///
/// Starts from `LoggingSettings::default()` and overlays any values found in
/// the `[logging]` section. Unknown keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggingSettings, ConfigError> {
    let mut settings = LoggingSettings::default();

    let Some(section) = ini.section(Some(SECTION)) else {
        return Ok(settings);
    };

    if let Some(v) = section.get("backend") {
        settings.backend = v
            .parse::<Backend>()
            .map_err(|_| invalid("backend", v, "must be one of: null, stream, structured"))?;
    }
    if let Some(v) = section.get("level") {
        let level = v.parse::<Level>().map_err(|_| {
            invalid("level", v, "must be one of: debug, info, warn, error, none")
        })?;
        settings.level = Some(level);
    }
    if let Some(v) = section.get("path") {
        settings.path = PathBuf::from(v.trim());
    }
    if let Some(v) = section.get("create") {
        settings.create = parse_bool(v);
    }
    if let Some(v) = section.get("paths") {
        settings.paths = parse_list(v);
    }
    if let Some(v) = section.get("sugared") {
        settings.sugared = parse_bool(v);
    }

    Ok(settings)
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: SECTION.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Split a comma-separated list, dropping blank entries.
pub(super) fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
