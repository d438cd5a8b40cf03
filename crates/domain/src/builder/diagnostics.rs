//! Diagnostic port for record construction.

/// Receives the key of a required field that was missing or malformed while
/// building a base race.
///
/// Purely observational: the builder's result does not depend on what the
/// sink does.
#[cfg_attr(test, mockall::automock)]
pub trait TraitDiagnostics: Send + Sync {
    fn missing_field(&self, key: &str);
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl TraitDiagnostics for NoopDiagnostics {
    fn missing_field(&self, _key: &str) {}
}
