//! Browser entry point: mount `TopNav` into a host element.
//!
//! SYSTEM CONTEXT
//! ==============
//! The embedding page owns a plain element carrying the navigation
//! attributes. `mountTopNav` reads them once, renders the bar inside the
//! element, and hands back a handle the page uses to push later attribute
//! changes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::components::top_nav::TopNav;
use crate::state::attrs::{OBSERVED_ATTRIBUTES, TopNavAttrs};

/// Handle returned to JS for forwarding attribute changes.
#[wasm_bindgen]
pub struct TopNavHandle {
    attrs: RwSignal<TopNavAttrs>,
}

#[wasm_bindgen]
impl TopNavHandle {
    /// Apply an attribute write (`value = null` for removal).
    ///
    /// A value that fails to decode is rejected and the previous value kept.
    #[wasm_bindgen(js_name = setAttribute)]
    pub fn set_attribute(&self, name: &str, value: Option<String>) -> Result<(), JsValue> {
        let mut next = self.attrs.get_untracked();
        if let Err(e) = next.set_attribute(name, value.as_deref()) {
            leptos::logging::warn!("topnav attribute rejected: {e}");
            return Err(JsValue::from_str(&e.to_string()));
        }
        self.attrs.set(next);
        Ok(())
    }
}

/// Mount the navigation bar inside `host`.
#[wasm_bindgen(js_name = mountTopNav)]
pub fn mount_topnav(host: web_sys::HtmlElement) -> TopNavHandle {
    init_logging();

    let attrs = RwSignal::new(read_host_attributes(&host));
    leptos::mount::mount_to(host, move || view! { <TopNav attrs=attrs /> }).forget();
    log::debug!("topnav mounted");

    TopNavHandle { attrs }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // A second mount on the same page finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Initial attribute values from the host element. Undecodable values are
/// logged and left at their defaults.
fn read_host_attributes(host: &web_sys::HtmlElement) -> TopNavAttrs {
    let mut attrs = TopNavAttrs::default();
    for name in OBSERVED_ATTRIBUTES {
        let Some(value) = host.get_attribute(name) else {
            continue;
        };
        if let Err(e) = attrs.set_attribute(name, Some(&value)) {
            leptos::logging::warn!("topnav attribute rejected: {e}");
        }
    }
    attrs
}
