//! Diagnostic sink handed to the search and grid routines instead of a global logger.

use std::sync::Mutex;
use tracing::Level;

pub trait DiagnosticSink {
    fn emit(&self, level: Level, message: &str);

    fn info(&self, message: &str) { self.emit(Level::INFO, message) }
    fn error(&self, message: &str) { self.emit(Level::ERROR, message) }
    fn debug(&self, message: &str) { self.emit(Level::DEBUG, message) }
}

/// Forwards to `tracing` under the `catalog_search` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "catalog_search", "{message}"),
            Level::WARN => tracing::warn!(target: "catalog_search", "{message}"),
            Level::INFO => tracing::info!(target: "catalog_search", "{message}"),
            Level::DEBUG => tracing::debug!(target: "catalog_search", "{message}"),
            _ => tracing::trace!(target: "catalog_search", "{message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _level: Level, _message: &str) {}
}

/// Keeps every event in memory; used by tests to assert on emitted diagnostics.
#[derive(Debug, Default)]
pub struct RecordingSink { events: Mutex<Vec<(Level, String)>> }

impl RecordingSink {
    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
    pub fn messages(&self) -> Vec<String> { self.events().into_iter().map(|(_, m)| m).collect() }
    pub fn contains(&self, needle: &str) -> bool { self.messages().iter().any(|m| m.contains(needle)) }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, level: Level, message: &str) {
        if let Ok(mut e) = self.events.lock() { e.push((level, message.to_string())); }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, level: Level, message: &str) { (**self).emit(level, message) }
}
