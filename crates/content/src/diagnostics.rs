//! Tracing-backed diagnostics for race loading.

use kindred_domain::TraitDiagnostics;

/// Logs missing required traits as warnings, tagged with the entry being loaded.
#[derive(Debug, Clone)]
pub struct TracingDiagnostics {
    entry: String,
}

impl TracingDiagnostics {
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
        }
    }
}

impl TraitDiagnostics for TracingDiagnostics {
    fn missing_field(&self, key: &str) {
        tracing::warn!(
            entry = %self.entry,
            key,
            "Race entry is missing a required trait or it is malformed"
        );
    }
}
