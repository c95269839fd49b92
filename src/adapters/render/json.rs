//! JSON report renderer
//!
//! Collects the report and writes a single object when the report is
//! complete:
//!
//! ```json
//! {
//!   "title": "Properties",
//!   "properties": { "name": "demo" }
//! }
//! ```

use std::io::Write;

use serde::Serialize;

use crate::core::ports::OutputSink;

#[derive(Debug, Default, Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    properties: serde_json::Map<String, serde_json::Value>,
}

/// Writes the report as one pretty-printed JSON object
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
    report: JsonReport,
}

impl<W: Write> JsonRenderer<W> {
    /// Renderer without a title
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: JsonReport::default(),
        }
    }

    /// Include a title field
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.report.title = Some(title.into());
        self
    }

    /// Give back the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for JsonRenderer<W> {
    fn add_property(&mut self, name: &str, value: &str) -> anyhow::Result<()> {
        self.report
            .properties
            .insert(name.to_string(), serde_json::Value::String(value.to_string()));
        Ok(())
    }

    fn complete(&mut self) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
