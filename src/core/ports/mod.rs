//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the report core and the
//! host environment: where properties come from, where report lines go,
//! and where warnings go.
//!
//! Implementations live in the `adapters` module.

mod diagnostics;
mod output_sink;
mod property_source;

pub use diagnostics::{DiagnosticsSink, RENDER_FAILURE_TEMPLATE, WarningEvent};
pub use output_sink::OutputSink;
pub use property_source::{PropertySource, RESERVED_PROPERTIES};
