//! Structured JSON logger backed by the `tracing` ecosystem.
//!
//! The adapter owns its engine: a `tracing_subscriber` JSON formatter wrapped
//! in a [`Dispatch`] that is entered only for the duration of each call. No
//! global subscriber is installed, so several adapters with different outputs
//! and thresholds can live in one process.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;

use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::InitError;
use crate::log::{Level, Logger};

/// Output path name that maps to the process's standard error.
pub const STDERR_PATH: &str = "stderr";
/// Output path name that maps to the process's standard output.
pub const STDOUT_PATH: &str = "stdout";

/// Calling convention used to hand messages to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallingMode {
    /// Typed fields: the caller is recorded as `caller.file` and `caller.line`.
    #[default]
    Strict,
    /// Loosely typed: the caller is preformatted into one `caller` string.
    Sugared,
}

type Emit = fn(&Location<'_>, &str);

/// One emit function per severity, chosen once at `init`.
#[derive(Clone, Copy)]
struct Emitters {
    debug: Emit,
    info: Emit,
    warn: Emit,
    error: Emit,
}

macro_rules! emitters {
    ($strict:ident, $sugared:ident, $level:expr) => {
        fn $strict(location: &Location<'_>, message: &str) {
            tracing::event!(
                $level,
                caller.file = location.file(),
                caller.line = location.line(),
                "{}",
                message
            );
        }

        fn $sugared(location: &Location<'_>, message: &str) {
            let caller = format!("{}:{}", location.file(), location.line());
            tracing::event!($level, caller = caller.as_str(), "{}", message);
        }
    };
}

emitters!(strict_debug, sugared_debug, tracing::Level::DEBUG);
emitters!(strict_info, sugared_info, tracing::Level::INFO);
emitters!(strict_warn, sugared_warn, tracing::Level::WARN);
emitters!(strict_error, sugared_error, tracing::Level::ERROR);

const STRICT: Emitters = Emitters {
    debug: strict_debug,
    info: strict_info,
    warn: strict_warn,
    error: strict_error,
};

const SUGARED: Emitters = Emitters {
    debug: sugared_debug,
    info: sugared_info,
    warn: sugared_warn,
    error: sugared_error,
};

impl CallingMode {
    fn emitters(self) -> Emitters {
        match self {
            CallingMode::Strict => STRICT,
            CallingMode::Sugared => SUGARED,
        }
    }
}

/// Map a facade level onto the engine's filter.
///
/// `None` maps to [`LevelFilter::OFF`], which no event can satisfy.
pub fn level_filter(level: Level) -> LevelFilter {
    match level {
        Level::Debug => LevelFilter::DEBUG,
        Level::Info => LevelFilter::INFO,
        Level::Warn => LevelFilter::WARN,
        Level::Error => LevelFilter::ERROR,
        Level::None => LevelFilter::OFF,
    }
}

#[derive(Debug)]
enum Sink {
    Stderr,
    Stdout,
    File(File),
}

impl Sink {
    fn open(path: &str) -> Result<Self, InitError> {
        match path {
            STDERR_PATH => Ok(Sink::Stderr),
            STDOUT_PATH => Ok(Sink::Stdout),
            _ => OpenOptions::new()
                .append(true)
                .create(true)
                .open(path)
                .map(Sink::File)
                .map_err(|e| InitError::open(path, e)),
        }
    }

    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stderr => io::stderr().write_all(buf),
            Sink::Stdout => io::stdout().write_all(buf),
            Sink::File(file) => {
                let mut file = file;
                file.write_all(buf)
            }
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            Sink::Stderr => io::stderr().flush(),
            Sink::Stdout => io::stdout().flush(),
            Sink::File(file) => {
                let mut file = file;
                file.flush()
            }
        }
    }
}

/// Fans every formatted event out to all configured sinks.
#[derive(Debug)]
struct OutputSinks(Vec<Sink>);

impl<'a> MakeWriter<'a> for OutputSinks {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter(&self.0)
    }
}

struct SinkWriter<'a>(&'a [Sink]);

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Best effort: one failing sink must not starve the others.
        for sink in self.0 {
            let _ = sink.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in self.0 {
            let _ = sink.flush();
        }
        Ok(())
    }
}

struct Engine {
    dispatch: Dispatch,
    emitters: Emitters,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("dispatch", &self.dispatch)
            .finish_non_exhaustive()
    }
}

/// Logger that emits JSON lines through an owned `tracing` engine.
///
/// Each line carries a timestamp, the level, the message, the module target
/// and the caller's source location. Output goes to every configured path:
/// files are opened for appending (and created if missing), while the names
/// `"stderr"` and `"stdout"` refer to the process streams. With no paths the
/// engine writes to stderr.
///
/// Without an explicit threshold the adapter accepts `Debug` and up when
/// output paths are configured, and `Info` and up on the stderr default.
///
/// The calling convention is frozen at `init`: every leveled call goes
/// through the emit function bound then, without re-checking the mode.
///
/// # Example
///
/// ```no_run
/// use logfacade::log::{Level, Logger, StructuredLogger};
///
/// let mut logger = StructuredLogger::new()
///     .with_paths(["stderr", "/var/log/app.json"])
///     .with_threshold(Level::Warn)
///     .with_sugared(true);
/// logger.init()?;
/// logger.warn("disk almost full");
/// # Ok::<(), logfacade::InitError>(())
/// ```
#[derive(Debug)]
pub struct StructuredLogger {
    mode: CallingMode,
    paths: Vec<String>,
    threshold: Option<Level>,
    engine: Option<Engine>,
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self {
            mode: CallingMode::Strict,
            paths: Vec::new(),
            threshold: None,
            engine: None,
        }
    }
}

impl StructuredLogger {
    /// Create an adapter with strict calls, stderr output and the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the sugared (true) or strict (false) calling convention.
    pub fn with_sugared(mut self, sugared: bool) -> Self {
        self.mode = if sugared {
            CallingMode::Sugared
        } else {
            CallingMode::Strict
        };
        self
    }

    /// Set the output paths. An empty list means stderr.
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum level the engine accepts.
    ///
    /// Default: `Debug` when output paths are set, `Info` otherwise.
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Calling convention in use.
    pub fn mode(&self) -> CallingMode {
        self.mode
    }

    /// Configured output paths.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Threshold in effect: the configured one, or the default for the
    /// current paths.
    pub fn threshold(&self) -> Level {
        self.threshold.unwrap_or(if self.paths.is_empty() {
            Level::Info
        } else {
            Level::Debug
        })
    }

    fn build_engine(&self) -> Result<Engine, InitError> {
        let sinks = if self.paths.is_empty() {
            vec![Sink::Stderr]
        } else {
            self.paths
                .iter()
                .enumerate()
                .map(|(index, path)| {
                    let path = path.trim();
                    if path.is_empty() {
                        return Err(InitError::EngineBuild(format!(
                            "output path #{index} is empty"
                        )));
                    }
                    Sink::open(path)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let subscriber = tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_max_level(level_filter(self.threshold()))
            .with_writer(OutputSinks(sinks))
            .finish();

        Ok(Engine {
            dispatch: Dispatch::new(subscriber),
            emitters: self.mode.emitters(),
        })
    }

    fn emit(&self, level: Level, location: &Location<'_>, message: &str) {
        if !level.permits(self.threshold()) {
            return;
        }
        let Some(engine) = &self.engine else {
            return;
        };
        let emit = match level {
            Level::Debug => engine.emitters.debug,
            Level::Info => engine.emitters.info,
            Level::Warn => engine.emitters.warn,
            Level::Error => engine.emitters.error,
            Level::None => return,
        };
        tracing::dispatcher::with_default(&engine.dispatch, || emit(location, message));
    }
}

impl Logger for StructuredLogger {
    fn init(&mut self) -> Result<(), InitError> {
        self.engine = Some(self.build_engine()?);
        Ok(())
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        self.emit(Level::Debug, Location::caller(), message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        self.emit(Level::Info, Location::caller(), message);
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        self.emit(Level::Warn, Location::caller(), message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        self.emit(Level::Error, Location::caller(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_logger(dir: &TempDir, threshold: Level, sugared: bool) -> (StructuredLogger, String) {
        let path = dir.path().join("out.json").to_string_lossy().into_owned();
        let mut logger = StructuredLogger::new()
            .with_paths([path.clone()])
            .with_threshold(threshold)
            .with_sugared(sugared);
        logger.init().unwrap();
        (logger, path)
    }

    #[test]
    fn test_structured_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StructuredLogger>();
    }

    #[test]
    fn test_defaults() {
        let logger = StructuredLogger::default();
        assert_eq!(logger.mode(), CallingMode::Strict);
        assert_eq!(logger.threshold(), Level::Info);
        assert!(logger.paths().is_empty());
    }

    #[test]
    fn test_paths_lower_default_threshold_to_debug() {
        let logger = StructuredLogger::new().with_paths(["stderr"]);
        assert_eq!(logger.threshold(), Level::Debug);

        let logger = logger.with_threshold(Level::Warn);
        assert_eq!(logger.threshold(), Level::Warn);
    }

    #[test]
    fn test_paths_without_threshold_emit_debug() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("debug.json").to_string_lossy().into_owned();
        let mut logger = StructuredLogger::new().with_paths([path.clone()]);
        logger.init().unwrap();

        logger.debug("verbose");

        let output = fs::read_to_string(path).unwrap();
        assert!(output.contains(r#""level":"DEBUG""#));
        assert!(output.contains(r#""message":"verbose""#));
    }

    #[test]
    fn test_level_filter_mapping() {
        assert_eq!(level_filter(Level::Debug), LevelFilter::DEBUG);
        assert_eq!(level_filter(Level::Info), LevelFilter::INFO);
        assert_eq!(level_filter(Level::Warn), LevelFilter::WARN);
        assert_eq!(level_filter(Level::Error), LevelFilter::ERROR);
        assert_eq!(level_filter(Level::None), LevelFilter::OFF);
    }

    #[test]
    fn test_writes_json_lines_to_file() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, Level::Debug, false);

        logger.info("hello engine");
        logger.error("broken pipe");

        let output = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""level":"INFO""#));
        assert!(lines[0].contains(r#""message":"hello engine""#));
        assert!(lines[1].contains(r#""level":"ERROR""#));
        assert!(lines[1].contains(r#""message":"broken pipe""#));
    }

    #[test]
    fn test_strict_mode_records_typed_caller() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, Level::Debug, false);

        logger.debug("strict");

        let output = fs::read_to_string(path).unwrap();
        assert!(output.contains(r#""caller.file":"#));
        assert!(output.contains(r#""caller.line":"#));
    }

    #[test]
    fn test_sugared_mode_records_caller_string() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, Level::Debug, true);

        logger.warn("sugared");

        let output = fs::read_to_string(path).unwrap();
        assert!(output.contains(r#""caller":""#));
        assert!(output.contains("structured.rs:"));
        assert!(output.contains(r#""message":"sugared""#));
    }

    #[test]
    fn test_threshold_filters_lower_levels() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, Level::Warn, false);

        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("kept");

        let output = fs::read_to_string(path).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains(r#""message":"kept""#));
    }

    #[test]
    fn test_none_threshold_suppresses_everything() {
        let dir = TempDir::new().unwrap();
        let (logger, path) = file_logger(&dir, Level::None, true);

        logger.debug("a");
        logger.info("b");
        logger.warn("c");
        logger.error("d");

        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_fans_out_to_every_path() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        let mut logger = StructuredLogger::new().with_paths([
            first.to_string_lossy().into_owned(),
            second.to_string_lossy().into_owned(),
        ]);
        logger.init().unwrap();

        logger.info("twice");

        for path in [first, second] {
            let output = fs::read_to_string(path).unwrap();
            assert!(output.contains(r#""message":"twice""#));
        }
    }

    #[test]
    fn test_unopenable_path_fails_init() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let mut logger = StructuredLogger::new().with_paths([path.to_string_lossy().into_owned()]);

        assert!(matches!(
            logger.init(),
            Err(InitError::OpenDestination { .. })
        ));
    }

    #[test]
    fn test_blank_path_fails_init() {
        let mut logger = StructuredLogger::new().with_paths(["stderr", "  "]);
        match logger.init() {
            Err(InitError::EngineBuild(reason)) => assert!(reason.contains("#1")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_default_output_is_stderr() {
        let mut logger = StructuredLogger::new();
        logger.init().unwrap();
        logger.info("to stderr");
    }

    #[test]
    fn test_calls_before_init_are_ignored() {
        let logger = StructuredLogger::new().with_threshold(Level::Debug);
        logger.error("not initialized");
    }
}
