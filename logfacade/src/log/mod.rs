//! Logging abstraction layer.
//!
//! Application code talks to the [`Logger`] trait; the backend is chosen by
//! whoever constructs the logger.
//!
//! # Backends
//!
//! - `NullLogger`: discards everything
//! - `StreamLogger`: plain lines to stderr (colored) or an appended file
//! - `StructuredLogger`: JSON lines through an owned `tracing` engine
//! - `TestHarnessLogger`: notes and failures in a running test
//!
//! # Lifecycle
//!
//! Construct with configuration, call [`Logger::init`] once, then log. Open
//! handles are released when the logger is dropped.
//!
//! ```
//! use logfacade::log::{Level, Logger, NullLogger, StreamLogger};
//! use logfacade::{log_debug, log_info};
//!
//! fn run(logger: &dyn Logger) {
//!     log_info!(logger, "Starting work");
//!     log_debug!(logger, "{} items queued", 3);
//! }
//!
//! let mut quiet = NullLogger;
//! quiet.init().unwrap();
//! run(&quiet);
//!
//! let mut loud = StreamLogger::new().with_threshold(Level::Info);
//! loud.init().unwrap();
//! run(&loud);
//! ```

mod harness;
mod level;
mod noop;
mod stream;
mod structured;
mod r#trait;

pub use harness::{TestContext, TestHarnessLogger, TestRun};
pub use level::{Level, ParseLevelError};
pub use noop::NullLogger;
pub use r#trait::Logger;
pub use stream::{StreamLogger, GREEN, RED, RESET, YELLOW};
pub use structured::{level_filter, CallingMode, StructuredLogger, STDERR_PATH, STDOUT_PATH};
