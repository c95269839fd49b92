//! Diagnostics sink port
//!
//! Receives structured warnings about properties that failed to render.

use crate::core::models::{RenderError, RenderFailure};

/// Message template for render failures; `{}` holes take name and type
pub const RENDER_FAILURE_TEMPLATE: &str =
    "Rendering of the property '{}' with value type '{}' failed with exception";

/// A structured warning
#[derive(Debug, Clone, Copy)]
pub struct WarningEvent<'a> {
    /// Message template with `{}` placeholders
    pub template: &'static str,
    /// Property name
    pub name: &'a str,
    /// Declared type name of the value
    pub type_name: &'a str,
    /// The captured failure
    pub cause: &'a RenderError,
}

impl<'a> WarningEvent<'a> {
    /// Warning for a failed property render
    #[must_use]
    pub fn render_failure(failure: &'a RenderFailure) -> Self {
        Self {
            template: RENDER_FAILURE_TEMPLATE,
            name: &failure.name,
            type_name: &failure.type_name,
            cause: &failure.cause,
        }
    }

    /// The template with its placeholders filled in
    #[must_use]
    pub fn message(&self) -> String {
        let mut args = [self.name, self.type_name].into_iter();
        let mut out = String::with_capacity(self.template.len());
        for (i, part) in self.template.split("{}").enumerate() {
            if i > 0 {
                out.push_str(args.next().unwrap_or("{}"));
            }
            out.push_str(part);
        }
        out
    }
}

/// Destination for warnings
pub trait DiagnosticsSink {
    /// Emit one warning
    fn warn(&mut self, event: &WarningEvent<'_>) -> anyhow::Result<()>;
}
