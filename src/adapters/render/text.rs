//! Plain-text report renderer
//!
//! ```text
//!
//! ------------------------------------------------------------
//! Properties of 'properties.toml'
//! ------------------------------------------------------------
//!
//! name: demo
//! version: 1.2.0
//! ```

use std::io::Write;

use colored::Colorize;

use crate::core::ports::OutputSink;

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Properties";

const RULE_WIDTH: usize = 60;

/// Writes `name: value` lines, optionally under a header block
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    title: Option<String>,
    header: bool,
    color: bool,
}

impl<W: Write> TextRenderer<W> {
    /// Renderer with a header and no colour
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            title: None,
            header: true,
            color: false,
        }
    }

    /// Set the header title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable the header block
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Enable or disable coloured property names
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Give back the underlying writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for TextRenderer<W> {
    fn start(&mut self) -> anyhow::Result<()> {
        if !self.header {
            return Ok(());
        }

        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let rule = "-".repeat(RULE_WIDTH.max(title.len()));
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        if self.color {
            writeln!(self.out, "{}", title.bold())?;
        } else {
            writeln!(self.out, "{title}")?;
        }
        writeln!(self.out, "{rule}")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn add_property(&mut self, name: &str, value: &str) -> anyhow::Result<()> {
        if self.color {
            writeln!(self.out, "{}: {value}", name.cyan())?;
        } else {
            writeln!(self.out, "{name}: {value}")?;
        }
        Ok(())
    }

    fn complete(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
