//! Panic hook behaviour while rendering
//!
//! Runs as its own test binary: it replaces the process-wide panic hook,
//! which would interfere with tests running alongside it.

use std::borrow::Cow;
use std::panic;
use std::sync::Mutex;

use propreport::adapters::PropertySet;
use propreport::core::models::{PropertyValue, RenderError, Stringify};
use propreport::core::services::build_model;

static REPORTED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct Exploding;

impl Stringify for Exploding {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Exploding")
    }

    fn stringify(&self) -> Result<String, RenderError> {
        panic!("boom");
    }
}

fn reported() -> Vec<String> {
    REPORTED.lock().unwrap().clone()
}

#[test]
fn rendering_panics_bypass_the_panic_hook() {
    panic::set_hook(Box::new(|info| {
        REPORTED.lock().unwrap().push(info.to_string());
    }));

    let mut set = PropertySet::new();
    set.insert("bad", Exploding);
    set.insert("ok", PropertyValue::from("fine"));

    let model = build_model(&set, None);

    assert_eq!(model.get("bad"), Some("Exploding [Rendering failed]"));
    assert_eq!(model.get("ok"), Some("fine"));
    assert!(reported().is_empty(), "hook saw: {:?}", reported());

    // Panics outside rendering still reach the previous hook
    let outside = panic::catch_unwind(|| Exploding.stringify());

    assert!(outside.is_err());
    let seen = reported();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("boom"));
}
