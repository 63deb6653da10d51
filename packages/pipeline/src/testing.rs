//! Test helpers shared by unit and integration tests.

use crate::logging::{LogLevel, Logger};
use std::collections::HashSet;
use std::sync::Mutex;

/// A logger that keeps every message for later inspection.
#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
    warned: Mutex<HashSet<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, level: LogLevel, msg: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((level, msg.to_string()));
        }
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .map(|records| {
                records
                    .iter()
                    .filter(|(l, _)| *l == level)
                    .map(|(_, msg)| msg.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }
}

impl Logger for RecordingLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Debug
    }

    fn debug(&self, msg: &str) {
        self.record(LogLevel::Debug, msg);
    }

    fn info(&self, msg: &str) {
        self.record(LogLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.record(LogLevel::Warn, msg);
    }

    fn warn_once(&self, msg: &str) {
        let first = self
            .warned
            .lock()
            .map(|mut warned| warned.insert(msg.to_string()))
            .unwrap_or(true);
        if first {
            self.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        self.record(LogLevel::Error, msg);
    }
}
