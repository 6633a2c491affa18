//! Logger configuration.
//!
//! Settings come from the `[logging]` section of an INI file:
//!
//! ```ini
//! [logging]
//! backend = structured
//! level = info
//! paths = stderr, /var/log/app.json
//! sugared = false
//! ```
//!
//! [`build_logger`] turns them into an initialized `Box<dyn Logger>`.

mod build;
mod file;
mod parser;
mod settings;

pub use build::build_logger;
pub use file::ConfigError;
pub use parser::SECTION;
pub use settings::{Backend, LoggingSettings, ParseBackendError};
