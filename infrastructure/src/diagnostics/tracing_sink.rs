//! [`DiagnosticsSink`] that forwards to `tracing`.

use disclaimer_application::{DiagnosticsSink, Severity};
use tracing::{debug, error, info, warn};

/// Emits each diagnostic as a `tracing` event with the namespace as a field.
///
/// `Fatal` has no tracing level of its own; it is an `error` event with
/// `fatal = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn log(&self, namespace: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Debug => debug!(namespace, "{}", message),
            Severity::Info => info!(namespace, "{}", message),
            Severity::Warn => warn!(namespace, "{}", message),
            Severity::Error => error!(namespace, fatal = false, "{}", message),
            Severity::Fatal => error!(namespace, fatal = true, "{}", message),
        }
    }
}
