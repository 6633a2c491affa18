//! Plain-text logger writing to stderr or an appended file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::InitError;
use crate::log::{Level, Logger};

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";
/// ANSI red, used for errors.
pub const RED: &str = "\x1b[31m";
/// ANSI yellow, used for warnings.
pub const YELLOW: &str = "\x1b[33m";
/// ANSI green, used for debug messages.
pub const GREEN: &str = "\x1b[32m";

#[derive(Debug)]
enum Destination {
    Stderr(io::Stderr),
    File(File),
}

impl Destination {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stderr(stderr) => {
                let mut stderr = stderr;
                stderr.write_all(line)
            }
            Destination::File(file) => {
                let mut file = file;
                file.write_all(line)
            }
        }
    }
}

/// Logger that writes one line per message to stderr or a file.
///
/// With no path, messages go to stderr and are colored by severity: errors
/// red, warnings yellow, debug green, info unstyled. With a path, the file is
/// opened for appending and lines are written without escape codes, since a
/// file may feed an aggregator that would keep them verbatim.
///
/// Each call performs a single unsynchronized write. Concurrent callers may
/// see their lines interleave on platforms where large writes are split.
///
/// The file handle is closed when the logger is dropped.
///
/// # Example
///
/// ```no_run
/// use logfacade::log::{Level, Logger, StreamLogger};
///
/// let mut logger = StreamLogger::to_path("/var/log/app.log").with_threshold(Level::Info);
/// logger.init()?;
/// logger.info("service started");
/// logger.debug("dropped: below the threshold");
/// # Ok::<(), logfacade::InitError>(())
/// ```
#[derive(Debug, Default)]
pub struct StreamLogger {
    path: PathBuf,
    threshold: Level,
    create: bool,
    colorize: bool,
    destination: Option<Destination>,
}

impl StreamLogger {
    /// Create a logger bound to stderr once initialized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger that appends to the file at `path`.
    ///
    /// An empty path means stderr.
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the minimum level that will be written. Default: `Debug`.
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create the file on `init` if it does not exist yet.
    ///
    /// Off by default: a missing file is reported as an open error.
    pub fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Change the threshold of an existing logger.
    pub fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    /// Current threshold.
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Configured destination path; empty for stderr.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether lines are wrapped in ANSI color codes.
    ///
    /// Only meaningful after `init`.
    pub fn is_colorized(&self) -> bool {
        self.colorize
    }

    fn emit(&self, level: Level, message: &str) {
        if !level.permits(self.threshold) {
            return;
        }
        let Some(destination) = &self.destination else {
            return;
        };
        let line = format_line(level, message, self.colorize);
        let _ = destination.write_line(line.as_bytes());
    }
}

impl Logger for StreamLogger {
    fn init(&mut self) -> Result<(), InitError> {
        if self.path.as_os_str().is_empty() {
            self.destination = Some(Destination::Stderr(io::stderr()));
            self.colorize = true;
            return Ok(());
        }

        let file = OpenOptions::new()
            .append(true)
            .create(self.create)
            .open(&self.path)
            .map_err(|e| InitError::open(self.path.clone(), e))?;
        self.destination = Some(Destination::File(file));
        self.colorize = false;
        Ok(())
    }

    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

fn color_for(level: Level) -> Option<&'static str> {
    match level {
        Level::Debug => Some(GREEN),
        Level::Warn => Some(YELLOW),
        Level::Error => Some(RED),
        Level::Info | Level::None => None,
    }
}

/// Render one output line, including the trailing newline.
pub(crate) fn format_line(level: Level, message: &str, colorize: bool) -> String {
    match color_for(level).filter(|_| colorize) {
        Some(color) => format!("{color}{message}{RESET}\n"),
        None => format!("{message}\n"),
    }
}
