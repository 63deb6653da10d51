// Console Logger
//
// Logger that forwards to `tracing`.

use super::logger::{LogLevel, Logger};
use std::collections::HashSet;
use std::sync::Mutex;

/// Console logger.
pub struct ConsoleLogger {
    level: LogLevel,
    warned: Mutex<HashSet<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            warned: Mutex::new(HashSet::new()),
        }
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn debug(&self, msg: &str) {
        if self.is_enabled(LogLevel::Debug) {
            tracing::debug!("{}", msg);
        }
    }

    fn info(&self, msg: &str) {
        if self.is_enabled(LogLevel::Info) {
            tracing::info!("{}", msg);
        }
    }

    fn warn(&self, msg: &str) {
        if self.is_enabled(LogLevel::Warn) {
            tracing::warn!("{}", msg);
        }
    }

    fn warn_once(&self, msg: &str) {
        let first = match self.warned.lock() {
            Ok(mut warned) => warned.insert(msg.to_string()),
            // poisoned set still deduplicates
            Err(poisoned) => poisoned.into_inner().insert(msg.to_string()),
        };
        if first {
            self.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        if self.is_enabled(LogLevel::Error) {
            tracing::error!("{}", msg);
        }
    }
}
