//! Diagnostics through the `log` facade

use log::warn;

use crate::core::ports::{DiagnosticsSink, WarningEvent};

/// Forwards warnings to `log::warn!` and counts them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics {
    emitted: usize,
}

impl LogDiagnostics {
    /// Number of warnings emitted so far
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }
}

impl DiagnosticsSink for LogDiagnostics {
    fn warn(&mut self, event: &WarningEvent<'_>) -> anyhow::Result<()> {
        warn!("{}: {}", event.message(), event.cause);
        self.emitted += 1;
        Ok(())
    }
}
