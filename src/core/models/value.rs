//! Property values and the stringify capability
//!
//! Every property value, whatever its concrete type, is rendered through
//! [`Stringify`]. Rendering either yields a string or a [`RenderError`];
//! the report builder decides what to do with the error.
//!
//! # Examples
//!
//! ```
//! use propreport::core::models::{Displayed, PropertyValue, Stringify};
//!
//! let value = PropertyValue::List(vec![PropertyValue::from(1), PropertyValue::from("two")]);
//! assert_eq!(value.stringify().unwrap(), "[1, two]");
//! assert_eq!(value.type_name(), "List");
//!
//! let displayed = Displayed(42_u8);
//! assert_eq!(displayed.stringify().unwrap(), "42");
//! assert_eq!(displayed.type_name(), "u8");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use thiserror::Error;

/// Errors raised while turning a property value into text
#[derive(Debug, Error)]
pub enum RenderError {
    /// A `Display` implementation returned an error
    #[error("formatter error")]
    Format(#[from] fmt::Error),

    /// Rendering panicked; holds the panic message
    #[error("panicked while rendering: {0}")]
    Panicked(String),

    /// The value reported its own failure
    #[error("{0}")]
    Failed(String),
}

impl RenderError {
    /// Create a failure reported by a value implementation
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Capability to render a value as report text
///
/// Implementations must not assume they are called at most once; callers
/// that need single evaluation (the report task) cache the result.
pub trait Stringify {
    /// Declared type name of the value, used in diagnostics and fallback text
    fn type_name(&self) -> Cow<'_, str>;

    /// Render the value
    fn stringify(&self) -> Result<String, RenderError>;
}

/// Dynamically typed property value produced by the source adapters
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Text
    String(String),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Boolean flag
    Boolean(bool),
    /// Date/time kept in its source notation
    Datetime(String),
    /// Ordered list of values
    List(Vec<PropertyValue>),
    /// Nested key/value table, sorted by key
    Table(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Name of the variant, as reported in diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Boolean(_) => "Boolean",
            Self::Datetime(_) => "Datetime",
            Self::List(_) => "List",
            Self::Table(_) => "Table",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Datetime(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            // Debug keeps the fractional part: 1.0 stays "1.0"
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            },
            Self::Table(table) => {
                f.write_char('{')?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_char('}')
            },
        }
    }
}

impl Stringify for PropertyValue {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind())
    }

    fn stringify(&self) -> Result<String, RenderError> {
        Ok(self.to_string())
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Adapts any [`fmt::Display`] type into a property value
///
/// The type name is the Rust type path of `T`. An error returned by the
/// `Display` implementation becomes [`RenderError::Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Stringify for Displayed<T> {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<T>())
    }

    fn stringify(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        write!(out, "{}", self.0)?;
        Ok(out)
    }
}
