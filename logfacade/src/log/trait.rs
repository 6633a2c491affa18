//! Logger trait definition.

use crate::error::InitError;

/// Logging interface shared by every backend.
///
/// A logger is configured at construction, then [`Logger::init`] is called
/// exactly once to resolve its destination before any leveled call. The four
/// leveled methods are independent entry points so that a backend can map
/// each severity onto a different mechanism (a test harness treats `warn`
/// and `error` as failures, for example).
///
/// Leveled calls never fail from the caller's point of view: a message below
/// the threshold is dropped, and a write error is discarded. They are
/// `#[track_caller]`, so a backend that records source locations reports the
/// call site even through `Box<dyn Logger>` or `Arc<dyn Logger>`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that an initialized logger can be
/// shared as `Arc<dyn Logger>`. Whether concurrent calls interleave cleanly
/// is up to the backend.
///
/// # Example
///
/// ```
/// use logfacade::log::{Logger, NullLogger};
/// use logfacade::{log_debug, log_info};
///
/// let mut logger = NullLogger;
/// logger.init().unwrap();
///
/// log_info!(logger, "Application started");
/// log_debug!(logger, "{} workers ready", 4);
/// ```
pub trait Logger: Send + Sync {
    /// Resolve configuration into a ready backend.
    ///
    /// Not idempotent: a second call may reopen or leak resources.
    fn init(&mut self) -> Result<(), InitError>;

    /// Log a debug-level message.
    #[track_caller]
    fn debug(&self, message: &str);

    /// Log an info-level message.
    #[track_caller]
    fn info(&self, message: &str);

    /// Log a warning-level message.
    #[track_caller]
    fn warn(&self, message: &str);

    /// Log an error-level message.
    #[track_caller]
    fn error(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn init(&mut self) -> Result<(), InitError> {
        (**self).init()
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    #[track_caller]
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    #[track_caller]
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Convenience macros for logging with format strings.
///
/// The message is formatted eagerly, even when the logger's threshold would
/// drop it. The [`Logger`] trait must be in scope at the call site.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&::std::format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&::std::format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&::std::format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&::std::format!($($arg)*))
    };
}
