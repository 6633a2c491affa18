//! Turning settings into an initialized logger.

use super::settings::{Backend, LoggingSettings};
use crate::error::InitError;
use crate::log::{Logger, NullLogger, StreamLogger, StructuredLogger};

/// Construct and initialize the backend `settings` select.
///
/// The test-harness backend is not reachable from here; it needs a live
/// test context and is built with `TestHarnessLogger::new`.
pub fn build_logger(settings: &LoggingSettings) -> Result<Box<dyn Logger>, InitError> {
    let level = settings.effective_level();
    let mut logger: Box<dyn Logger> = match settings.backend {
        Backend::Null => Box::new(NullLogger),
        Backend::Stream => Box::new(
            StreamLogger::to_path(settings.path.clone())
                .with_threshold(level)
                .with_create(settings.create),
        ),
        Backend::Structured => Box::new(
            StructuredLogger::new()
                .with_paths(settings.paths.iter().cloned())
                .with_threshold(level)
                .with_sugared(settings.sugared),
        ),
    };
    logger.init()?;
    tracing::debug!(backend = %settings.backend, %level, "logger initialized");
    Ok(logger)
}
