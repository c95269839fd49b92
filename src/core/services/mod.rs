//! Report services
//!
//! Pure orchestration over the port traits:
//!
//! - [`builder`] - Build a sorted report model with per-entry failure containment
//! - [`emitter`] - Write warnings and report lines through the sinks
//! - [`task`] - Memoized single report invocation

pub mod builder;
pub mod emitter;
pub mod task;

pub use builder::{build_model, render};
pub use emitter::emit;
pub use task::PropertyReportTask;
