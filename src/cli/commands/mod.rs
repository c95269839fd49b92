//! Command implementations

mod properties;

pub use properties::properties;
