//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `source/` - Property sets from memory, TOML files and `NAME=VALUE` definitions
//! - `render/` - Text and JSON output sinks
//! - `logging` - Diagnostics sink backed by the `log` facade

mod error;
pub mod logging;
pub mod render;
pub mod source;

pub use error::SourceError;
pub use logging::LogDiagnostics;
pub use render::{JsonRenderer, TextRenderer};
pub use source::{PropertySet, load_properties, parse_definitions, parse_properties};
