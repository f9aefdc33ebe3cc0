//! Collector for accumulating the non-fatal diagnostics of one class node.
//!
//! Grammar warnings and per-method signature errors do not stop a node from
//! being emitted. The [`DiagnosticCollector`] logs each of them as it is
//! reported and hands the full list back to the caller at the end.

use log::{error, warn};

use crate::error::Diagnostic;

/// A collector for the diagnostics of a single class node.
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
    ///
    /// The diagnostic is logged at the level matching its severity.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            error!(diagnostic:% = diagnostic; "Skipped method");
        } else {
            warn!(diagnostic:% = diagnostic; "Skipped line");
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return every diagnostic in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
