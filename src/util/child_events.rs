//! Intake of child-widget DOM events.
//!
//! Foreign widgets mounted inside the bar (or slotted into it by the host)
//! report intent with bubbling `CustomEvent`s. Each one named in
//! [`CHILD_EVENT_NAMES`] is caught on the bar's root element, validated with
//! [`NavEvent::from_detail`], and handed to the coordinator callback.
//! Malformed events are logged and dropped.

#[cfg(test)]
#[path = "child_events_test.rs"]
mod child_events_test;

use leptos::prelude::{Callback, NodeRef};
use serde_json::Value;

use crate::state::events::{CHILD_EVENT_NAMES, EventError, NavEvent};

/// Listen for child events on the element behind `root` once it mounts.
///
/// No-op outside the browser.
pub fn listen(root: NodeRef<leptos::html::Div>, on_event: Callback<NavEvent>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{Effect, Get};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move || {
            let Some(element) = root.get() else {
                return;
            };
            for &name in CHILD_EVENT_NAMES {
                let handler = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                    let text = ev
                        .dyn_ref::<web_sys::CustomEvent>()
                        .and_then(|custom| js_sys::JSON::stringify(&custom.detail()).ok())
                        .and_then(|s| s.as_string());
                    route(name, text.as_deref(), on_event);
                }) as Box<dyn FnMut(web_sys::Event)>);
                if let Err(e) = element.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref()) {
                    leptos::logging::warn!("child event listener failed: {name} {e:?}");
                }
                // Lives as long as the bar's root element.
                handler.forget();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (root, on_event);
    }
}

/// Validate one raw DOM event and forward it. Rejected events are logged.
#[cfg(feature = "hydrate")]
fn route(name: &str, detail: Option<&str>, on_event: Callback<NavEvent>) {
    use leptos::prelude::Callable;

    match parse_child_event(name, detail) {
        Ok(event) => on_event.run(event),
        Err(e) => leptos::logging::warn!("ignored child event {name}: {e}"),
    }
}

/// Parse a DOM event name plus its serialized `detail`.
///
/// A missing or unparseable `detail` is treated as `null`.
///
/// # Errors
///
/// Returns the [`EventError`] from [`NavEvent::from_detail`].
pub fn parse_child_event(name: &str, detail: Option<&str>) -> Result<NavEvent, EventError> {
    NavEvent::from_detail(name, &detail_value(detail))
}

fn detail_value(text: Option<&str>) -> Value {
    text.and_then(|t| serde_json::from_str(t).ok()).unwrap_or(Value::Null)
}
