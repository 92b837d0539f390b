//! Log sinks
//!
//! The tracer emits one line per enabled event through a [`LogSink`]. Sinks
//! are synchronous and side-effect-only; the tracer never retries or buffers
//! on their behalf.

use std::fmt;
use std::sync::Mutex;

/// Severity of an emitted line
///
/// Normal tracer events are all [`Severity::Log`]; the other levels exist for
/// sinks shared with the embedding host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational
    Log,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Log => "LOG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        })
    }
}

/// Destination for tracer output
pub trait LogSink: Send + Sync {
    /// Write one line at the given severity
    fn emit(&self, severity: Severity, message: &str);
}

/// Writes `SEVERITY:  message` lines to stderr
#[derive(Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn emit(&self, severity: Severity, message: &str) {
        eprintln!("{}:  {}", severity, message);
    }
}

/// Forwards events to the `tracing` ecosystem
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Log => tracing::info!(target: "log_functions", "{}", message),
            Severity::Warning => tracing::warn!(target: "log_functions", "{}", message),
            Severity::Error => tracing::error!(target: "log_functions", "{}", message),
        }
    }
}

/// Captures events in memory, in emission order
///
/// Lets an embedder (or a test) inspect exactly what the tracer emitted.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages emitted so far
    pub fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Events emitted so far, with severities
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().unwrap().clone()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Log.to_string(), "LOG");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_memory_sink_preserves_order_and_severity() {
        let sink = MemorySink::new();
        sink.emit(Severity::Log, "first");
        sink.emit(Severity::Warning, "second");

        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(
            sink.events(),
            vec![
                (Severity::Log, "first".to_string()),
                (Severity::Warning, "second".to_string()),
            ]
        );

        sink.clear();
        assert!(sink.messages().is_empty());
    }
}
