//! Property source port
//!
//! Defines where the properties of a report come from.

use crate::core::models::Stringify;

/// Name under which a source exposes the whole property collection
///
/// Its value refers back to the source itself, so it is never rendered.
pub const RESERVED_PROPERTIES: &str = "properties";

/// A read-only collection of named values
///
/// Implementations are snapshots: the report reads `entries` once, in
/// order, and does not expect them to change during a build.
pub trait PropertySource {
    /// All properties in source order
    ///
    /// A `None` value is a property that exists but holds nothing.
    fn entries(&self) -> Vec<(&str, Option<&dyn Stringify>)>;

    /// Look up a single property
    ///
    /// Returns `None` both for missing properties and for null values.
    fn get(&self, name: &str) -> Option<&dyn Stringify>;
}
