//! Shared list rendering for menu-entry dropdowns.

#[cfg(test)]
#[path = "dropdown_menu_test.rs"]
mod dropdown_menu_test;

use leptos::prelude::*;
use navattrs::MenuEntry;

use crate::state::attrs::TopNavAttrs;
use crate::state::events::{AnalyticsEvent, NavEvent};

/// Selects which slice of the menu definitions a dropdown shows.
pub type MenuItems = fn(&TopNavAttrs) -> &[MenuEntry];

/// Vertical list of menu entries. Entries leave the tab order while closed.
#[component]
pub fn DropdownMenu(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    items: MenuItems,
    menu_name: &'static str,
    #[prop(into)] open: Signal<bool>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let link_tab_index = move || if open.get() { None } else { Some("-1") };

    view! {
        <ul class="dropdown-menu" class:dropdown-menu--open=move || open.get() attr:data-menu=menu_name>
            {move || {
                attrs.with(|a| {
                    items(a)
                        .iter()
                        .map(|entry| {
                            let href = entry.url.as_deref().map(|url| a.link(url));
                            let title = entry.title.clone();
                            let detail = entry_analytics_detail(menu_name, entry);
                            view! {
                                <li class="dropdown-menu__item">
                                    <a
                                        href=href
                                        tabindex=link_tab_index
                                        on:click=move |_| {
                                            on_event.run(NavEvent::Analytics(AnalyticsEvent::click(detail.clone())));
                                        }
                                    >
                                        {title}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </ul>
    }
}

/// Analytics payload for a click on `entry` inside `menu_name`.
pub(crate) fn entry_analytics_detail(menu_name: &str, entry: &MenuEntry) -> serde_json::Value {
    let event = entry.analytics_event.as_deref().unwrap_or(menu_name);
    serde_json::json!({
        "event": event,
        "label": entry.title,
    })
}
