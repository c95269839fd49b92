//! Domain models for propreport
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Stringify`] - How a property value becomes report text
//! - [`PropertyValue`] - Dynamic value produced by the source adapters
//! - [`ReportModel`] - Sorted rendered entries plus recorded failures
//! - [`RenderFailure`] - A property whose value could not be rendered

mod report;
mod value;

pub use report::{
    NULL_VALUE, PropertyEntry, RENDER_FAILED_SUFFIX, RenderFailure, ReportModel,
    SELF_REFERENCE_PLACEHOLDER, UNKNOWN_TYPE_NAME,
};
pub use value::{Displayed, PropertyValue, RenderError, Stringify};
