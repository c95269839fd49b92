//! Property source adapters
//!
//! - [`memory`] - In-memory [`PropertySet`]
//! - [`toml_file`] - Load a `PropertySet` from a TOML file
//! - [`definitions`] - `NAME=VALUE` command-line definitions

pub mod definitions;
pub mod memory;
pub mod toml_file;

pub use definitions::{parse_definition, parse_definitions};
pub use memory::PropertySet;
pub use toml_file::{load_properties, parse_properties};
