//! Destinations for annotated log records

use crate::Record;
use log::Level;
use serde::Deserialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Target used by [`LogSink::default`]
pub const DEFAULT_TARGET: &str = "errwrap";

/// Where `wrap_log` writes its records.
///
/// Implementations must accept concurrent calls; each call carries one whole
/// record.
pub trait Sink: Send + Sync {
    /// Write one record
    fn record(&self, record: Record);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn record(&self, record: Record) {
        (**self).record(record)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn record(&self, record: Record) {
        (**self).record(record)
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn record(&self, record: Record) {
        (**self).record(record)
    }
}

/// Settings for a [`LogSink`], loadable from any serde format.
///
/// ```rust
/// use errwrap_log::SinkConfig;
///
/// let config: SinkConfig = serde_json::from_str(r#"{ "level": "warn" }"#).unwrap();
/// assert_eq!(config.level, log::Level::Warn);
/// assert_eq!(config.target, "errwrap");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub level: Level,
    pub target: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            level: Level::Error,
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

/// Forwards records to the process-wide `log` facade.
///
/// Whatever logger the application installed decides format and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSink {
    level: Level,
    target: String,
}

impl LogSink {
    /// Create a sink logging at `level` under the default target
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: DEFAULT_TARGET.to_string(),
        }
    }

    /// Build a sink from its configuration
    pub fn from_config(config: &SinkConfig) -> Self {
        Self {
            level: config.level,
            target: config.target.clone(),
        }
    }

    /// Set the log target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Get the log level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Get the log target
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::from_config(&SinkConfig::default())
    }
}

impl Sink for LogSink {
    fn record(&self, record: Record) {
        log::log!(target: self.target.as_str(), self.level, "{}", record);
    }
}

/// Keeps records in memory, for tests and for callers that batch their output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records written so far
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Number of records written so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return every record
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.lock())
    }

    // A panic while holding the lock can't leave a half-pushed record.
    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn record(&self, record: Record) {
        self.lock().push(record);
    }
}
