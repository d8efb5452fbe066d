//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a bounded ring and
//! mirrors every record to the browser console (stderr off the web).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.message
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    /// A global logger was already installed
    AlreadyInitialized,
    /// Convenience helpers were called before `init_logger`
    NotInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Bounded ring of recent records
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            level,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of the retained records, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        mirror(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn mirror(entry: &LogEntry) {
    let line = entry.to_string();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror(entry: &LogEntry) {
    eprintln!("{}", entry);
}

/// Install the global rolling logger
pub fn init_logger(capacity: usize, level: LevelFilter) -> Result<(), LoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::info!("{}", message);
    Ok(())
}
