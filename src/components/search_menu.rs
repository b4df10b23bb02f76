//! Search scope picker.
//!
//! DESIGN
//! ======
//! The selected scope lives in the coordinator (`NavigationState::search_in`)
//! so the primary search form can submit it; this menu only requests changes.

use leptos::prelude::*;

use crate::state::attrs::TopNavAttrs;
use crate::state::events::{AnalyticsEvent, NavEvent};
use crate::state::nav::{MenuId, NavigationState};

#[derive(Clone, Copy)]
struct SearchScopeDef {
    value: &'static str,
    label: &'static str,
}

const SEARCH_SCOPES: &[SearchScopeDef] = &[
    SearchScopeDef { value: "", label: "Search metadata" },
    SearchScopeDef { value: "TXT", label: "Search text contents" },
    SearchScopeDef { value: "TV", label: "Search TV news captions" },
    SearchScopeDef { value: "RADIO", label: "Search radio transcripts" },
    SearchScopeDef { value: "WEB", label: "Search archived web sites" },
];

#[component]
pub fn SearchMenu(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    #[prop(into)] nav: Signal<NavigationState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let open = move || nav.with(NavigationState::is_search_menu_open);
    let hide_search = move || attrs.with(|a| a.hide_search);

    let scopes = SEARCH_SCOPES
        .iter()
        .map(|def| {
            let def = *def;
            view! {
                <label class="search-menu__scope">
                    <input
                        type="radio"
                        name="sin"
                        value=def.value
                        prop:checked=move || nav.with(|n| n.search_in == def.value)
                        tabindex=move || nav.with(|n| n.tab_index(MenuId::Search))
                        on:change=move |_| {
                            on_event.run(NavEvent::SearchInChanged { search_in: def.value.to_owned() });
                        }
                    />
                    {def.label}
                </label>
            }
        })
        .collect::<Vec<_>>();

    let on_advanced_click = move |_| {
        on_event.run(NavEvent::Analytics(AnalyticsEvent::click(serde_json::json!({
            "event": "AdvancedSearch",
            "label": "search",
        }))));
    };

    view! {
        <div
            class="search-menu"
            class:search-menu--open=open
            class:search-menu--hidden=hide_search
            tabindex=move || nav.with(|n| n.tab_index(MenuId::Search))
        >
            <fieldset class="search-menu__scopes">{scopes}</fieldset>
            <a
                class="search-menu__advanced"
                href=move || attrs.with(|a| a.link("/advancedsearch.php"))
                tabindex=move || nav.with(|n| n.tab_index(MenuId::Search))
                on:click=on_advanced_click
            >
                "Advanced Search"
            </a>
        </div>
    }
}
