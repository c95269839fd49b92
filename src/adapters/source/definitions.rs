//! Command-line property definitions
//!
//! Parses `NAME=VALUE` pairs as given to `-P`. Values are kept as strings;
//! everything after the first `=` belongs to the value.

use super::PropertySet;
use crate::adapters::SourceError;
use crate::core::models::PropertyValue;

/// Split a `NAME=VALUE` definition
pub fn parse_definition(definition: &str) -> Result<(String, String), SourceError> {
    let Some((name, value)) = definition.split_once('=') else {
        return Err(SourceError::MalformedDefinition(definition.to_string()));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(SourceError::EmptyName(definition.to_string()));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Collect definitions into their own set; a later definition of the same
/// name wins
pub fn parse_definitions<I, D>(definitions: I) -> Result<PropertySet, SourceError>
where
    I: IntoIterator<Item = D>,
    D: AsRef<str>,
{
    let mut set = PropertySet::new();
    for definition in definitions {
        let (name, value) = parse_definition(definition.as_ref())?;
        set.insert(name, PropertyValue::String(value));
    }
    Ok(set)
}
