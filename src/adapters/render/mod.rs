//! Output sink adapters
//!
//! - [`text`] - Human-readable `name: value` lines
//! - [`json`] - Machine-readable JSON object

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::{DEFAULT_TITLE, TextRenderer};
