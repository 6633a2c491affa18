//! logfacade - a leveled logging facade with interchangeable backends
//!
//! Code that logs depends on the [`log::Logger`] trait only. The backend is
//! picked at construction time, either directly or from an INI file through
//! [`config::build_logger`].
//!
//! ```no_run
//! use logfacade::config::{build_logger, LoggingSettings};
//! use logfacade::log_warn;
//! use logfacade::log::Logger;
//!
//! let settings = LoggingSettings::load_from("app.ini".as_ref())?;
//! let logger = build_logger(&settings)?;
//! log_warn!(logger, "cache at {}%", 93);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod log;

pub use error::InitError;

/// Version of the logfacade library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
