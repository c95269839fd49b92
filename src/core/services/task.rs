//! Property report task
//!
//! One report invocation. The model is computed on first access and then
//! shared by every caller, including callers on other threads; running the
//! task consumes it, so a new report always starts from a new task.

use std::fmt;
use std::sync::OnceLock;

use log::debug;

use super::{build_model, emit};
use crate::core::models::ReportModel;
use crate::core::ports::{DiagnosticsSink, OutputSink, PropertySource};

/// A single property report request
pub struct PropertyReportTask<'a, S: ?Sized> {
    source: &'a S,
    filter: Option<String>,
    model: OnceLock<ReportModel>,
}

impl<'a, S: PropertySource + ?Sized> PropertyReportTask<'a, S> {
    /// Create a task reporting `filter`, or every property when `None`
    #[must_use]
    pub const fn new(source: &'a S, filter: Option<String>) -> Self {
        Self {
            source,
            filter,
            model: OnceLock::new(),
        }
    }

    /// The single property this task reports, if any
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The report model, built on first call
    #[must_use]
    pub fn model(&self) -> &ReportModel {
        self.model.get_or_init(|| {
            debug!("Computing property report model (filter: {:?})", self.filter);
            build_model(self.source, self.filter.as_deref())
        })
    }

    /// Whether the model has been computed yet
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.model.get().is_some()
    }

    /// Emit warnings and report lines
    pub fn run<O, D>(self, sink: &mut O, diagnostics: &mut D) -> anyhow::Result<()>
    where
        O: OutputSink + ?Sized,
        D: DiagnosticsSink + ?Sized,
    {
        emit(self.model(), sink, diagnostics)
    }
}

impl<S: ?Sized> fmt::Debug for PropertyReportTask<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyReportTask")
            .field("filter", &self.filter)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
