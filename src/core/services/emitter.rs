//! Report emitter
//!
//! Writes a computed [`ReportModel`]: first one warning per render failure,
//! in the order the failures were met, then every entry in name order.
//! Sink errors are returned as they are; nothing is retried.

use crate::core::models::ReportModel;
use crate::core::ports::{DiagnosticsSink, OutputSink, WarningEvent};

/// Emit `model` through `sink`, reporting failures to `diagnostics`
pub fn emit<O, D>(model: &ReportModel, sink: &mut O, diagnostics: &mut D) -> anyhow::Result<()>
where
    O: OutputSink + ?Sized,
    D: DiagnosticsSink + ?Sized,
{
    for failure in model.failures() {
        diagnostics.warn(&WarningEvent::render_failure(failure))?;
    }

    sink.start()?;
    for entry in model.iter() {
        sink.add_property(entry.name, entry.value)?;
    }
    sink.complete()
}
