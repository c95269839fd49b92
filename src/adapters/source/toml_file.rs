//! TOML property files
//!
//! Every top-level key of the document becomes one property. Nested tables
//! and arrays keep their structure as [`PropertyValue::Table`] and
//! [`PropertyValue::List`].
//!
//! ```toml
//! version = "1.2.0"
//! retries = 3
//!
//! [database]
//! host = "localhost"
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use super::PropertySet;
use crate::adapters::SourceError;
use crate::core::models::PropertyValue;

impl From<toml::Value> for PropertyValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::String(s),
            toml::Value::Integer(i) => Self::Integer(i),
            toml::Value::Float(x) => Self::Float(x),
            toml::Value::Boolean(b) => Self::Boolean(b),
            toml::Value::Datetime(dt) => Self::Datetime(dt.to_string()),
            toml::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => {
                Self::Table(table.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            },
        }
    }
}

/// Parse properties from TOML text
pub fn parse_properties(content: &str) -> Result<PropertySet, SourceError> {
    let table: toml::Table = toml::from_str(content)?;
    let mut set = PropertySet::new();
    for (name, value) in table {
        set.insert(name, PropertyValue::from(value));
    }
    Ok(set)
}

/// Load properties from a TOML file
pub fn load_properties(path: &Path) -> Result<PropertySet, SourceError> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_properties(&content)?;
    debug!("Loaded {} properties from {}", set.len(), path.display());
    Ok(set)
}
