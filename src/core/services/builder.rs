//! Report model builder
//!
//! Turns a property source into a [`ReportModel`]. A value that fails to
//! render, by returning an error or by panicking, is recorded as a
//! [`RenderFailure`] and replaced by a fallback string; it never aborts
//! the build. Panics caught here skip the panic hook, so nothing reaches
//! stderr before the deferred warning.

use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::thread;

use log::debug;

use crate::core::models::{
    NULL_VALUE, RenderError, RenderFailure, ReportModel, SELF_REFERENCE_PLACEHOLDER, Stringify,
    UNKNOWN_TYPE_NAME,
};
use crate::core::ports::{PropertySource, RESERVED_PROPERTIES};

thread_local! {
    static RENDERING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Build the report model for `source`
///
/// With a `filter`, only that property is reported; a name the source does
/// not know renders as `"null"`. The reserved collection name always
/// renders as `"{...}"` without touching its value.
///
/// # Examples
///
/// ```
/// use propreport::adapters::PropertySet;
/// use propreport::core::models::PropertyValue;
/// use propreport::core::services::build_model;
///
/// let mut set = PropertySet::new();
/// set.insert("b", PropertyValue::from(1));
/// set.insert("a", PropertyValue::from("x"));
///
/// let model = build_model(&set, None);
/// let names: Vec<_> = model.iter().map(|e| e.name).collect();
/// assert_eq!(names, ["a", "b", "properties"]);
/// assert_eq!(model.get("properties"), Some("{...}"));
/// ```
#[must_use]
pub fn build_model<S: PropertySource + ?Sized>(source: &S, filter: Option<&str>) -> ReportModel {
    let mut model = ReportModel::default();

    match filter {
        Some(name) if name == RESERVED_PROPERTIES => {
            model.put(name, SELF_REFERENCE_PLACEHOLDER);
        },
        Some(name) => put_property(&mut model, name, source.get(name)),
        None => {
            for (name, value) in source.entries() {
                if name == RESERVED_PROPERTIES {
                    model.put(name, SELF_REFERENCE_PLACEHOLDER);
                } else {
                    put_property(&mut model, name, value);
                }
            }
        },
    }

    debug!(
        "Built property report: {} entries, {} render failures",
        model.len(),
        model.failures().len()
    );
    model
}

fn put_property(model: &mut ReportModel, name: &str, value: Option<&dyn Stringify>) {
    let Some(value) = value else {
        model.put(name, NULL_VALUE);
        return;
    };

    match render(value) {
        Ok(text) => model.put(name, text),
        Err(cause) => {
            let type_name = contained(|| value.type_name().into_owned())
                .unwrap_or_else(|_| UNKNOWN_TYPE_NAME.to_string());
            debug!("Failed to render property '{name}' of type '{type_name}': {cause}");
            model.put_failure(RenderFailure::new(name, type_name, cause));
        },
    }
}

/// Render one value, containing both returned errors and panics
pub fn render(value: &dyn Stringify) -> Result<String, RenderError> {
    contained(|| value.stringify())
        .unwrap_or_else(|payload| Err(RenderError::Panicked(panic_message(&*payload))))
}

/// Run `call`, catching a panic without reporting it through the panic hook
fn contained<T>(call: impl FnOnce() -> T) -> thread::Result<T> {
    QUIET_HOOK.call_once(install_quiet_hook);

    let outer = RENDERING.replace(true);
    let result = panic::catch_unwind(AssertUnwindSafe(call));
    RENDERING.set(outer);
    result
}

/// Wrap the current hook so it stays silent while a value is rendering
fn install_quiet_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !RENDERING.try_with(Cell::get).unwrap_or(false) {
            previous(info);
        }
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
