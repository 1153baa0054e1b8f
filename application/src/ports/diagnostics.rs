//! Diagnostics sink port.
//!
//! Reserved for operational problems (an unreadable document), not for the
//! expected absence of a localized variant.

use std::fmt;
use std::sync::Mutex;

/// Severity of a diagnostic entry, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        };
        f.write_str(s)
    }
}

/// Port for recording operational diagnostics.
pub trait DiagnosticsSink: Send + Sync {
    fn log(&self, namespace: &str, message: &str, severity: Severity);
}

/// A recorded diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub namespace: String,
    pub message: String,
    pub severity: Severity,
}

/// Keeps every entry in memory.
#[derive(Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entries recorded so far.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn log(&self, namespace: &str, message: &str, severity: Severity) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(DiagnosticEntry {
                namespace: namespace.to_string(),
                message: message.to_string(),
                severity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Fatal > Severity::Error);
        assert!(Severity::Debug < Severity::Info);
    }

    #[test]
    fn test_recording_diagnostics() {
        let sink = RecordingDiagnostics::new();
        sink.log("app", "boom", Severity::Fatal);
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, Severity::Fatal);
        assert_eq!(entries[0].message, "boom");
    }
}
