//! Caller-injected logging.
//!
//! The client itself never logs through these sinks; they exist so that
//! applications can pass one logging capability around explicitly instead of
//! reaching for process-wide state.

use chrono::Local;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Logging sink.
pub trait Logger: Send + Sync {
    fn info(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _args: fmt::Arguments<'_>) {}
    fn error(&self, _args: fmt::Arguments<'_>) {}
}

pub fn noop_logger() -> Arc<dyn Logger> {
    Arc::new(NoopLogger)
}

/// Timestamped lines on stdout (info) and stderr (error):
/// `[SYNQLY] 2024-05-01 12:00:00 message`.
#[derive(Debug, Clone)]
pub struct StdLogger {
    prefix: String,
}

impl StdLogger {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, args: fmt::Arguments<'_>) -> String {
        format!(
            "{} {} {}",
            self.prefix,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            args
        )
    }
}

impl Default for StdLogger {
    fn default() -> Self {
        Self::new("[SYNQLY]")
    }
}

impl Logger for StdLogger {
    fn info(&self, args: fmt::Arguments<'_>) {
        let _ = writeln!(std::io::stdout().lock(), "{}", self.line(args));
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        let _ = writeln!(std::io::stderr().lock(), "{}", self.line(args));
    }
}

/// Forwards to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!("{}", args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!("{}", args);
    }
}
