use crate::{Fields, LogValue};

use chrono::{DateTime, Utc};
use taglog_config::LogLevel;

/// One log call, as seen by every sink.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub fields: Fields,
}

impl LogEntry {
    pub fn new<S: Into<String>>(timestamp: DateTime<Utc>, level: LogLevel, message: S) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            fields: Fields::new(),
        }
    }

    pub fn with_field<K: Into<String>, V: Into<LogValue>>(mut self, key: K, value: V) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
