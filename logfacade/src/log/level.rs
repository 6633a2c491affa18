//! Severity levels and the threshold rule shared by every backend.

use std::fmt;
use std::str::FromStr;

/// Severity of a log message, or the threshold a logger filters on.
///
/// Levels are ordered from most to least verbose. A logger configured with
/// threshold `T` emits a message at level `L` only when `L >= T`, so
/// [`Level::None`] as a threshold suppresses everything. `None` is never the
/// level of an emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Debugging information
    #[default]
    Debug = 0,
    /// General information
    Info = 1,
    /// Warning messages
    Warn = 2,
    /// Error messages
    Error = 3,
    /// Threshold that disables all output
    None = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::None,
    ];

    /// Returns true if a message at `self` passes the given threshold.
    #[inline]
    pub fn permits(self, threshold: Level) -> bool {
        self != Level::None && self >= threshold
    }

    /// Ordinal value of this level (`Debug` = 0 through `None` = 4).
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::None => "none",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string or ordinal does not name a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}': expected debug, info, warn, error or none")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "none" | "off" => Ok(Level::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        Level::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| ParseLevelError(value.to_string()))
    }
}
