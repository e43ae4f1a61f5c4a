//! Pluggable SDK logging.
//!
//! The SDK is silent by default. Install a logger process-wide with
//! [`set_logger`], or give a single client its own through the builder:
//!
//! ```
//! use std::sync::Arc;
//! use stedi_sdk::{ConsoleLogger, LogLevel, set_logger};
//!
//! set_logger(Arc::new(ConsoleLogger::new(LogLevel::Debug)));
//! ```

use serde_json::Value;
use std::{
    fmt,
    str::FromStr,
    sync::{Arc, PoisonError, RwLock},
};

/// Severity of a log entry, ordered `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError(String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level `{}` (expected debug, info, warn or error)",
            self.0
        )
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLogLevelError(s.to_owned())),
        }
    }
}

/// Logging backend used by the SDK.
///
/// Only [`Logger::log`] is required; the per-level helpers forward to it.
/// Logging is observability only and never changes what a call returns.
pub trait Logger: Send + Sync + 'static {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>);

    /// Whether entries at `level` would be emitted.
    ///
    /// The transport checks this before building expensive metadata.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn debug(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Debug, message, meta);
    }

    fn info(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Info, message, meta);
    }

    fn warn(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Warn, message, meta);
    }

    fn error(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Error, message, meta);
    }
}

/// Discards everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str, _meta: Option<&Value>) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Writes `[stedi-sdk] LEVEL: message` lines: debug and info to stdout,
/// warn and error to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    /// Entries below `min_level` are suppressed.
    #[must_use]
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub(crate) fn stream(level: LogLevel) -> Stream {
        match level {
            LogLevel::Debug | LogLevel::Info => Stream::Stdout,
            LogLevel::Warn | LogLevel::Error => Stream::Stderr,
        }
    }

    pub(crate) fn format_line(level: LogLevel, message: &str, meta: Option<&Value>) -> String {
        let mut line = format!("[stedi-sdk] {level}: {message}");
        let meta = meta.filter(|meta| match meta {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            _ => true,
        });
        if let Some(meta) = meta {
            let rendered =
                serde_json::to_string_pretty(meta).unwrap_or_else(|_| meta.to_string());
            line.push(' ');
            line.push_str(&rendered);
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stream {
    Stdout,
    Stderr,
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>) {
        if !self.enabled(level) {
            return;
        }
        let line = Self::format_line(level, message, meta);
        match Self::stream(level) {
            Stream::Stdout => println!("{line}"),
            Stream::Stderr => eprintln!("{line}"),
        }
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Forwards entries to `tracing` events with target `stedi_sdk`.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>) {
        let meta = meta.map(Value::to_string).unwrap_or_default();
        match level {
            LogLevel::Debug => tracing::debug!(target: "stedi_sdk", meta = %meta, "{message}"),
            LogLevel::Info => tracing::info!(target: "stedi_sdk", meta = %meta, "{message}"),
            LogLevel::Warn => tracing::warn!(target: "stedi_sdk", meta = %meta, "{message}"),
            LogLevel::Error => tracing::error!(target: "stedi_sdk", meta = %meta, "{message}"),
        }
    }
}

static GLOBAL: RwLock<Option<Arc<dyn Logger>>> = RwLock::new(None);

/// Replace the process-wide logger used by clients without their own.
///
/// Last write wins; there is no reset.
pub fn set_logger(logger: Arc<dyn Logger>) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Some(logger);
}

/// Current process-wide logger ([`NoopLogger`] until [`set_logger`] is called).
#[must_use]
pub fn logger() -> Arc<dyn Logger> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| Arc::new(NoopLogger))
}
