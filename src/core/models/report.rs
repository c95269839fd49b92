//! Report model
//!
//! The immutable result of one report computation: rendered entries sorted
//! by name plus the failures met while rendering, in encounter order.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::value::RenderError;

/// Value stored for the property that stands for the whole collection
pub const SELF_REFERENCE_PLACEHOLDER: &str = "{...}";

/// Rendered text of a missing or null value
pub const NULL_VALUE: &str = "null";

/// Suffix appended to the type name when rendering failed
pub const RENDER_FAILED_SUFFIX: &str = "[Rendering failed]";

/// Type name recorded when a value cannot report its own
pub const UNKNOWN_TYPE_NAME: &str = "<unknown>";

/// One rendered report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyEntry<'a> {
    /// Property name
    pub name: &'a str,
    /// Rendered value
    pub value: &'a str,
}

/// A property whose value could not be rendered
#[derive(Debug, Serialize)]
pub struct RenderFailure {
    /// Property name
    pub name: String,
    /// Declared type name of the value
    pub type_name: String,
    /// What went wrong
    #[serde(serialize_with = "serialize_cause")]
    pub cause: RenderError,
}

impl RenderFailure {
    /// Create a failure record
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, cause: RenderError) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            cause,
        }
    }

    /// Text shown in the report in place of the value
    #[must_use]
    pub fn fallback_value(&self) -> String {
        format!("{} {RENDER_FAILED_SUFFIX}", self.type_name)
    }
}

fn serialize_cause<S: Serializer>(cause: &RenderError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(cause)
}

/// Sorted snapshot of rendered properties
///
/// Every name that failed to render is still present in the entries, with
/// the value given by [`RenderFailure::fallback_value`].
#[derive(Debug, Default, Serialize)]
pub struct ReportModel {
    entries: BTreeMap<String, String>,
    failures: Vec<RenderFailure>,
}

impl ReportModel {
    pub(crate) fn put(&mut self, name: &str, value: impl Into<String>) {
        self.entries.insert(name.to_string(), value.into());
    }

    pub(crate) fn put_failure(&mut self, failure: RenderFailure) {
        self.entries.insert(failure.name.clone(), failure.fallback_value());
        self.failures.push(failure);
    }

    /// Rendered values keyed by property name
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Entries in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = PropertyEntry<'_>> {
        self.entries.iter().map(|(name, value)| PropertyEntry { name, value })
    }

    /// Rendered value of a single property
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Failures in the order they were met
    #[must_use]
    pub fn failures(&self) -> &[RenderFailure] {
        &self.failures
    }

    /// Number of properties in the report
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no properties
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
