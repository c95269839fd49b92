//! Output sink port
//!
//! Receives the rendered report lines. Layout (headers, indentation,
//! colour) belongs to the implementation.

/// Destination for report lines
pub trait OutputSink {
    /// Called once before the first property
    fn start(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Write one property line
    fn add_property(&mut self, name: &str, value: &str) -> anyhow::Result<()>;

    /// Called once after the last property
    fn complete(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
