//! Shared test fixtures and mocks
//!
//! Values with controllable rendering behaviour, a plain list-backed
//! property source, and sinks that record what they receive.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use propreport::core::models::{RenderError, Stringify};
use propreport::core::ports::{DiagnosticsSink, OutputSink, PropertySource, WarningEvent};

// =============================================================================
// Values
// =============================================================================

/// Value whose rendering always returns an error
pub struct Failing {
    pub type_name: &'static str,
    pub message: &'static str,
}

impl Failing {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            message: "cannot render",
        }
    }
}

impl Stringify for Failing {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.type_name)
    }

    fn stringify(&self) -> Result<String, RenderError> {
        Err(RenderError::failed(self.message))
    }
}

/// Value whose rendering panics
pub struct Panicking;

impl Stringify for Panicking {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Panicking")
    }

    fn stringify(&self) -> Result<String, RenderError> {
        panic!("boom");
    }
}

/// Value that fails to render and panics when asked for its type name
pub struct Nameless;

impl Stringify for Nameless {
    fn type_name(&self) -> Cow<'_, str> {
        panic!("no type name");
    }

    fn stringify(&self) -> Result<String, RenderError> {
        Err(RenderError::failed("no text either"))
    }
}

/// Value that counts how often it is rendered
pub struct Counting {
    pub text: String,
    pub calls: Arc<AtomicUsize>,
}

impl Counting {
    pub fn new(text: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                text: text.to_string(),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Stringify for Counting {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Counting")
    }

    fn stringify(&self) -> Result<String, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

// =============================================================================
// Source
// =============================================================================

/// Property source backed by a plain list, with no implicit entries
///
/// Counts lookups so tests can tell whether the source was consulted.
#[derive(Default)]
pub struct ListSource {
    entries: Vec<(String, Option<Box<dyn Stringify>>)>,
    lookups: Cell<usize>,
}

impl ListSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Stringify + 'static) -> Self {
        self.entries.push((name.to_string(), Some(Box::new(value))));
        self
    }

    pub fn with_null(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), None));
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl PropertySource for ListSource {
    fn entries(&self) -> Vec<(&str, Option<&dyn Stringify>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
            .collect()
    }

    fn get(&self, name: &str) -> Option<&dyn Stringify> {
        self.lookups.set(self.lookups.get() + 1);
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, value)| value.as_deref())
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Ordered record of everything the sinks received
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Output sink that records calls into a journal
pub struct RecordingSink {
    journal: Journal,
}

impl RecordingSink {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
        }
    }
}

impl OutputSink for RecordingSink {
    fn start(&mut self) -> anyhow::Result<()> {
        self.journal.borrow_mut().push("start".to_string());
        Ok(())
    }

    fn add_property(&mut self, name: &str, value: &str) -> anyhow::Result<()> {
        self.journal.borrow_mut().push(format!("{name}: {value}"));
        Ok(())
    }

    fn complete(&mut self) -> anyhow::Result<()> {
        self.journal.borrow_mut().push("complete".to_string());
        Ok(())
    }
}

/// Diagnostics sink that records warnings into a journal
pub struct RecordingDiagnostics {
    journal: Journal,
}

impl RecordingDiagnostics {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Rc::clone(journal),
        }
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn warn(&mut self, event: &WarningEvent<'_>) -> anyhow::Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("warn {} {} ({})", event.name, event.type_name, event.cause));
        Ok(())
    }
}

/// Output sink that fails on every line
pub struct ClosedSink;

impl OutputSink for ClosedSink {
    fn add_property(&mut self, _name: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("sink closed")
    }
}

/// Diagnostics sink that fails on every warning
pub struct ClosedDiagnostics;

impl DiagnosticsSink for ClosedDiagnostics {
    fn warn(&mut self, _event: &WarningEvent<'_>) -> anyhow::Result<()> {
        anyhow::bail!("diagnostics unavailable")
    }
}
