//! Settings for the `[logging]` section.
//!
//! Pure data: parsing lives in [`super::parser`], construction of the logger
//! in [`super::build`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::log::Level;

/// Which backend a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Discard all output
    Null,
    /// Plain lines to stderr or a file
    #[default]
    Stream,
    /// JSON lines through the structured engine
    Structured,
}

impl Backend {
    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Null => "null",
            Backend::Stream => "stream",
            Backend::Structured => "structured",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Backend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend '{0}': expected null, stream or structured")]
pub struct ParseBackendError(String);

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "null" | "none" | "off" => Ok(Backend::Null),
            "stream" | "simple" => Ok(Backend::Stream),
            "structured" | "json" => Ok(Backend::Structured),
            _ => Err(ParseBackendError(s.to_string())),
        }
    }
}

/// Logging configuration.
///
/// # Example
///
/// ```
/// use logfacade::config::{Backend, LoggingSettings};
/// use logfacade::log::Level;
///
/// let settings = LoggingSettings::new()
///     .with_backend(Backend::Structured)
///     .with_level(Level::Warn)
///     .with_paths(["stderr"]);
/// assert_eq!(settings.effective_level(), Level::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoggingSettings {
    /// Selected backend
    pub backend: Backend,
    /// Threshold; `None` uses the backend's default
    pub level: Option<Level>,
    /// Stream backend destination; empty means stderr
    pub path: PathBuf,
    /// Stream backend: create the file if it is missing
    pub create: bool,
    /// Structured backend output paths; empty means stderr
    pub paths: Vec<String>,
    /// Structured backend: use the sugared calling convention
    pub sugared: bool,
}

impl LoggingSettings {
    /// Settings for a stream logger on stderr with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sugared(mut self, sugared: bool) -> Self {
        self.sugared = sugared;
        self
    }

    /// Threshold that will actually apply to the selected backend.
    ///
    /// Stream loggers default to `Debug`. The structured engine defaults to
    /// `Debug` when output paths are set and `Info` on plain stderr.
    pub fn effective_level(&self) -> Level {
        self.level.unwrap_or(match self.backend {
            Backend::Structured if self.paths.is_empty() => Level::Info,
            Backend::Null | Backend::Stream | Backend::Structured => Level::Debug,
        })
    }
}
