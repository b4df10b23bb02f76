//! Upward relay of analytics events as DOM `CustomEvent`s.
//!
//! Events are dispatched on the navigation bar's root element with
//! `bubbles` and `composed` set, so listeners on the host element or any
//! ancestor (across shadow roots) receive them.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::NodeRef;

use crate::state::events::AnalyticsEvent;

/// Dispatch `event` from the element behind `root`.
///
/// No-op when the element is not mounted or outside the browser.
pub fn dispatch(root: NodeRef<leptos::html::Div>, event: &AnalyticsEvent) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;

        let Some(element) = root.get_untracked() else {
            return;
        };
        if let Err(e) = dispatch_custom_event(&element, event) {
            leptos::logging::warn!("analytics dispatch failed: {} {e:?}", event.kind.event_name());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (root, event);
    }
}

#[cfg(feature = "hydrate")]
fn dispatch_custom_event(target: &web_sys::EventTarget, event: &AnalyticsEvent) -> Result<(), wasm_bindgen::JsValue> {
    let detail = js_sys::JSON::parse(&detail_json(event))?;
    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);
    let custom = web_sys::CustomEvent::new_with_event_init_dict(event.kind.event_name(), &init)?;
    target.dispatch_event(&custom)?;
    Ok(())
}

/// Serialized `detail` payload, passed through unchanged.
pub(crate) fn detail_json(event: &AnalyticsEvent) -> String {
    event.detail.to_string()
}
