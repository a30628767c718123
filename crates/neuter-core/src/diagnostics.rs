//! Diagnostic sinks for advisory (non-fatal) warnings.

use std::path::Path;
use std::sync::Mutex;

use neuter_util::progress;

/// Name of the known-dependency setting used in warnings by default.
pub const DEFAULT_KNOWN_LABEL: &str = ":additional_dependencies";

/// Receives advisory warnings. Must tolerate calls from several threads.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Writes each warning as one status line on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, message: &str) {
        progress::status_warn("Warning", message);
    }
}

/// Keeps warnings in memory, in the order they were reported.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}

/// Warning text for a path reached during traversal but absent from the
/// known-dependency set.
pub fn unaccounted_message(path: &Path, label: &str) -> String {
    format!(
        "Included '{}', which is not listed in {label}. The pipeline may not invalidate properly.",
        path.display()
    )
}
