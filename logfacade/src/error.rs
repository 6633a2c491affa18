//! Error types for logger initialization.
//!
//! Only `init` can fail. Leveled calls swallow their own write failures, so
//! nothing here describes an emission error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while a backend resolves its destination.
#[derive(Debug, Error)]
pub enum InitError {
    /// The destination file could not be opened for appending.
    #[error("Failed to open log destination {}: {source}", path.display())]
    OpenDestination { path: PathBuf, source: io::Error },

    /// A test-harness logger was initialized without a bound test context.
    #[error("Missing test context: bind a TestContext before calling init")]
    MissingTestContext,

    /// The structured engine rejected its configuration.
    #[error("Failed to build structured logging engine: {0}")]
    EngineBuild(String),
}

impl InitError {
    /// Wrap an I/O error raised while opening `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        InitError::OpenDestination {
            path: path.into(),
            source,
        }
    }
}
