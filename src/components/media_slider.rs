//! Slide-out panel listing the links for the selected media type.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slider contents come from the non-standard keys of the `menus` blob
//! (`audio`, `video`, ...). Their shape is owned by the embedding page, so
//! anything that does not look like a list of menu entries is skipped.

#[cfg(test)]
#[path = "media_slider_test.rs"]
mod media_slider_test;

use leptos::prelude::*;
use navattrs::MenuEntry;
use serde_json::Value;

use crate::components::dropdown_menu::entry_analytics_detail;
use crate::state::attrs::TopNavAttrs;
use crate::state::events::{AnalyticsEvent, NavEvent};
use crate::state::nav::NavigationState;

/// Object keys that may hold entry lists inside a media slice.
const LINK_GROUP_KEYS: &[&str] = &["iconLinks", "featuredLinks", "links"];

#[component]
pub fn MediaSlider(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    #[prop(into)] nav: Signal<NavigationState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let slider_open = move || nav.with(|n| n.media_slider_open);

    let entries = move || {
        let Some(selected) = nav.with(|n| n.selected_media_option.clone()) else {
            return Vec::new();
        };
        attrs.with(|a| {
            let Some(slice) = a.menus.media_slice(&selected) else {
                return Vec::new();
            };
            slider_entries(slice)
                .into_iter()
                .map(|entry| {
                    let href = entry.url.as_deref().map(|url| a.link(url));
                    let detail = entry_analytics_detail(&selected, &entry);
                    view! {
                        <li class="media-slider__item">
                            <a
                                href=href
                                tabindex=move || if slider_open() { None } else { Some("-1") }
                                on:click=move |_| {
                                    on_event.run(NavEvent::Analytics(AnalyticsEvent::click(detail.clone())));
                                }
                            >
                                {entry.title}
                            </a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="media-slider" class:media-slider--open=slider_open aria-hidden=move || if slider_open() { "false" } else { "true" }>
            <ul class="media-slider__items">{entries}</ul>
        </div>
    }
}

/// Flatten a media slice into menu entries.
///
/// Accepts either a bare array of entries or an object holding arrays under
/// the [`LINK_GROUP_KEYS`]. Elements that are not entry objects are skipped.
pub(crate) fn slider_entries(slice: &Value) -> Vec<MenuEntry> {
    let groups: Vec<&Vec<Value>> = match slice {
        Value::Array(items) => vec![items],
        Value::Object(map) => LINK_GROUP_KEYS.iter().filter_map(|key| map.get(*key)?.as_array()).collect(),
        _ => Vec::new(),
    };
    groups
        .into_iter()
        .flatten()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
