//! Ordered accumulation of diagnostics for one parse.
//!
//! Unlike a compiler-wide queue there is no deduplication, no error limit
//! and no follow-on filtering: every report is kept, and the collection is
//! always in source order.

use crate::{Diagnostic, Severity};

/// Accumulates diagnostics in source order.
///
/// Reports are ordered by span start. Reports at the same position keep
/// their insertion order.
///
/// # Example
///
/// ```text
/// let mut collector = DiagnosticCollector::new();
/// collector.report(diagnostic);
/// // ... report more
/// let diagnostics = collector.into_vec();
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, keeping the collection sorted by span start.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.error_count += 1;
        }
        let start = diagnostic.span.start;
        // Reports nearly always arrive in order, so this is usually a push.
        let at = self
            .diagnostics
            .partition_point(|d| d.span.start <= start);
        self.diagnostics.insert(at, diagnostic);
    }

    /// All diagnostics in source order.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, yielding the ordered diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Extend<Diagnostic> for DiagnosticCollector {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.report(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests;
