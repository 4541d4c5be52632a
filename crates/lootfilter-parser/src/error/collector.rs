//! Collector for accumulating the diagnostics of one line.

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics while a line is validated.
///
/// Diagnostics are kept in the order they were emitted and never removed.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return the diagnostics in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use lootfilter_core::text::Range;

    use super::*;

    #[test]
    fn test_collector_new_is_empty() {
        let collector = DiagnosticCollector::new();
        assert!(collector.finish().is_empty());
    }

    #[test]
    fn test_collector_preserves_order() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::error(Range::default(), "first"));
        collector.emit(Diagnostic::warning(Range::default(), "second"));
        collector.emit(Diagnostic::hint(Range::default(), "third"));

        let messages: Vec<_> = collector
            .finish()
            .iter()
            .map(|diag| diag.message().to_string())
            .collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }
}
