//! No-operation logger implementation.

use crate::error::InitError;
use crate::log::Logger;

/// A logger that discards all messages.
///
/// Swap it in to turn logging off without touching call sites.
///
/// # Example
///
/// ```
/// use logfacade::log::{Logger, NullLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NullLogger);
/// logger.info("This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn init(&mut self) -> Result<(), InitError> {
        Ok(())
    }

    #[inline]
    fn debug(&self, _message: &str) {}

    #[inline]
    fn info(&self, _message: &str) {}

    #[inline]
    fn warn(&self, _message: &str) {}

    #[inline]
    fn error(&self, _message: &str) {}
}
