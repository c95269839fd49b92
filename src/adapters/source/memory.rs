//! In-memory property set
//!
//! The concrete [`PropertySource`] used by the CLI and tests. Properties
//! keep their insertion order; the set exposes itself under
//! [`RESERVED_PROPERTIES`] after the stored properties.

use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::core::models::{NULL_VALUE, RenderError, Stringify};
use crate::core::ports::{PropertySource, RESERVED_PROPERTIES};

type BoxedValue = Box<dyn Stringify + Send + Sync>;

/// Insertion-ordered collection of properties
#[derive(Default)]
pub struct PropertySet {
    properties: Vec<(String, Option<BoxedValue>)>,
}

impl PropertySet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Set a property, replacing any previous value in place
    ///
    /// The reserved collection name cannot be assigned and is ignored.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Stringify + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert_boxed(name, Some(Box::new(value)))
    }

    /// Set a property that holds no value; it renders as `"null"`
    pub fn insert_null(&mut self, name: impl Into<String>) -> &mut Self {
        self.insert_boxed(name, None)
    }

    fn insert_boxed(&mut self, name: impl Into<String>, value: Option<BoxedValue>) -> &mut Self {
        let name = name.into();
        if name == RESERVED_PROPERTIES {
            debug!("Ignoring assignment to reserved property '{RESERVED_PROPERTIES}'");
            return self;
        }

        if let Some(slot) = self.properties.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
        self
    }

    /// Move every property of `other` into this set, overriding on conflict
    pub fn merge(&mut self, other: Self) -> &mut Self {
        for (name, value) in other.properties {
            self.insert_boxed(name, value);
        }
        self
    }

    /// Whether a property with this name is stored
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.properties.iter().any(|(n, _)| n == name)
    }

    /// Stored property names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(n, _)| n.as_str())
    }

    /// Number of stored properties, not counting the reserved entry
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertySource for PropertySet {
    fn entries(&self) -> Vec<(&str, Option<&dyn Stringify>)> {
        let mut entries: Vec<(&str, Option<&dyn Stringify>)> = self
            .properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref().map(erase)))
            .collect();
        entries.push((RESERVED_PROPERTIES, Some(self)));
        entries
    }

    fn get(&self, name: &str) -> Option<&dyn Stringify> {
        if name == RESERVED_PROPERTIES {
            return Some(self);
        }
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, value)| value.as_deref())
            .map(erase)
    }
}

fn erase<'a>(value: &'a (dyn Stringify + Send + Sync + 'static)) -> &'a dyn Stringify {
    value
}

impl Stringify for PropertySet {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("PropertySet")
    }

    fn stringify(&self) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(self.properties.len());
        for (name, value) in &self.properties {
            let text = match value {
                Some(value) => value.stringify()?,
                None => NULL_VALUE.to_string(),
            };
            parts.push(format!("{name}={text}"));
        }
        Ok(format!("{{{}}}", parts.join(", ")))
    }
}

impl fmt::Debug for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySet")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
