//! Logger that reports into a running test.

use std::fmt;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use crate::error::InitError;
use crate::log::Logger;

/// Handle to an active test run.
///
/// `log` records a non-fatal note; `fail` records a message and marks the
/// run as failed without stopping it.
pub trait TestContext: Send + Sync {
    /// Record an informational message.
    fn log(&self, message: &str);

    /// Record a message and mark the run as failed.
    fn fail(&self, message: &str);
}

/// A [`TestContext`] for libtest.
///
/// Notes are printed to stdout, which the test harness captures and only
/// shows for failing tests. Failures are collected; if any are still pending
/// when the run is dropped, the drop panics and the enclosing test fails.
/// Use [`TestRun::take_failures`] to acknowledge failures a test expects.
///
/// # Example
///
/// ```
/// use logfacade::log::{Logger, TestHarnessLogger, TestRun};
/// use std::sync::Arc;
///
/// let run = Arc::new(TestRun::named("parses_config"));
/// let logger = TestHarnessLogger::new(run.clone()).unwrap();
///
/// logger.info("loaded 3 sections");
/// logger.warn("deprecated key");
///
/// assert!(run.failed());
/// assert_eq!(run.take_failures(), vec!["deprecated key".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct TestRun {
    name: Option<String>,
    notes: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl TestRun {
    /// Create an anonymous run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a run whose name prefixes its output.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            notes: Mutex::default(),
            failures: Mutex::default(),
        }
    }

    /// Whether any failure is pending.
    pub fn failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    /// Informational messages recorded so far.
    pub fn notes(&self) -> Vec<String> {
        self.notes.lock().clone()
    }

    /// Pending failure messages.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    /// Remove and return pending failures, clearing the failed state.
    pub fn take_failures(&self) -> Vec<String> {
        std::mem::take(&mut *self.failures.lock())
    }

    fn print(&self, message: &str) {
        match &self.name {
            Some(name) => println!("[{name}] {message}"),
            None => println!("{message}"),
        }
    }
}

impl TestContext for TestRun {
    fn log(&self, message: &str) {
        self.print(message);
        self.notes.lock().push(message.to_string());
    }

    fn fail(&self, message: &str) {
        self.print(message);
        self.failures.lock().push(message.to_string());
    }
}

impl Drop for TestRun {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        let failures = self.failures.get_mut();
        if failures.is_empty() {
            return;
        }
        panic!(
            "test run {}failed with {} error(s):\n{}",
            self.name
                .as_deref()
                .map(|n| format!("'{n}' "))
                .unwrap_or_default(),
            failures.len(),
            failures.join("\n")
        );
    }
}

/// Logger that routes messages into a [`TestContext`].
///
/// `debug` and `info` become notes; `warn` and `error` both mark the run as
/// failed. Unlike the other backends there is no threshold: a warning is as
/// fatal to the test as an error.
#[derive(Clone, Default)]
pub struct TestHarnessLogger {
    context: Option<Arc<dyn TestContext>>,
}

impl TestHarnessLogger {
    /// Bind `context` and initialize in one step.
    pub fn new(context: Arc<dyn TestContext>) -> Result<Self, InitError> {
        let mut logger = Self::unbound();
        logger.bind(context);
        logger.init()?;
        Ok(logger)
    }

    /// Create a logger with no context. `init` fails until one is bound.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Attach the test context.
    pub fn bind(&mut self, context: Arc<dyn TestContext>) {
        self.context = Some(context);
    }

    fn note(&self, message: &str) {
        if let Some(context) = &self.context {
            context.log(message);
        }
    }

    fn fail(&self, message: &str) {
        if let Some(context) = &self.context {
            context.fail(message);
        }
    }
}

impl fmt::Debug for TestHarnessLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestHarnessLogger")
            .field("bound", &self.context.is_some())
            .finish()
    }
}

impl Logger for TestHarnessLogger {
    fn init(&mut self) -> Result<(), InitError> {
        if self.context.is_none() {
            return Err(InitError::MissingTestContext);
        }
        Ok(())
    }

    fn debug(&self, message: &str) {
        self.note(message);
    }

    fn info(&self, message: &str) {
        self.note(message);
    }

    fn warn(&self, message: &str) {
        self.fail(message);
    }

    fn error(&self, message: &str) {
        self.fail(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound_logger() -> (TestHarnessLogger, Arc<TestRun>) {
        let run = Arc::new(TestRun::named("harness"));
        let logger = TestHarnessLogger::new(run.clone()).unwrap();
        (logger, run)
    }

    #[test]
    fn test_unbound_init_fails() {
        let mut logger = TestHarnessLogger::unbound();
        assert!(matches!(logger.init(), Err(InitError::MissingTestContext)));
    }

    #[test]
    fn test_bind_then_init_succeeds() {
        let run = Arc::new(TestRun::new());
        let mut logger = TestHarnessLogger::unbound();
        logger.bind(run);
        assert!(logger.init().is_ok());
    }

    #[test]
    fn test_debug_and_info_do_not_fail() {
        let (logger, run) = bound_logger();

        logger.debug("step one");
        logger.info("step two");

        assert!(!run.failed());
        assert_eq!(run.notes(), vec!["step one", "step two"]);
    }

    #[test]
    fn test_warn_fails_the_run() {
        let (logger, run) = bound_logger();

        logger.warn("suspicious");

        assert!(run.failed());
        assert_eq!(run.take_failures(), vec!["suspicious"]);
        assert!(!run.failed());
    }

    #[test]
    fn test_error_fails_the_run() {
        let (logger, run) = bound_logger();

        logger.error("broken");
        logger.info("still running");

        assert_eq!(run.failures(), vec!["broken"]);
        assert_eq!(run.notes(), vec!["still running"]);
        run.take_failures();
    }

    #[test]
    #[should_panic(expected = "failed with 1 error(s)")]
    fn test_dropping_failed_run_panics() {
        let (logger, run) = bound_logger();
        logger.error("unacknowledged");
        drop(logger);
        drop(run);
    }

    #[test]
    fn test_unbound_calls_are_ignored() {
        let logger = TestHarnessLogger::unbound();
        logger.error("nowhere to go");
    }

    #[test]
    fn test_debug_impl_hides_context() {
        let (logger, _run) = bound_logger();
        assert_eq!(format!("{:?}", logger), "TestHarnessLogger { bound: true }");
    }

    #[test]
    fn test_named_run_starts_empty() {
        let run = TestRun::named("fresh");

        assert_eq!(run.name.as_deref(), Some("fresh"));
        assert!(run.notes().is_empty());
        assert!(!run.failed());
    }
}
