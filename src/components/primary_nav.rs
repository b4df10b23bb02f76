//! Always-visible bar: logo, media-type buttons, search box, identity toggle.

#[cfg(test)]
#[path = "primary_nav_test.rs"]
mod primary_nav_test;

use leptos::prelude::*;

use crate::state::attrs::TopNavAttrs;
use crate::state::events::{AnalyticsEvent, NavEvent};
use crate::state::nav::{MenuId, NavigationState};

#[derive(Clone, Copy)]
struct MediaTypeDef {
    id: &'static str,
    label: &'static str,
}

const MEDIA_TYPES: &[MediaTypeDef] = &[
    MediaTypeDef { id: "web", label: "Wayback Machine" },
    MediaTypeDef { id: "texts", label: "Texts" },
    MediaTypeDef { id: "video", label: "Video" },
    MediaTypeDef { id: "audio", label: "Audio" },
    MediaTypeDef { id: "software", label: "Software" },
    MediaTypeDef { id: "images", label: "Images" },
    MediaTypeDef { id: "more", label: "More" },
];

/// Primary navigation row.
#[component]
pub fn PrimaryNav(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    #[prop(into)] nav: Signal<NavigationState>,
    on_event: Callback<NavEvent>,
    secondary_logo: Option<ChildrenFn>,
) -> impl IntoView {
    let base_host = move || attrs.with(|a| a.base_host.clone());
    let hide_search = move || attrs.with(|a| a.hide_search);
    let signed_in = move || attrs.with(TopNavAttrs::is_signed_in);

    let media_buttons = MEDIA_TYPES
        .iter()
        .map(|def| {
            let def = *def;
            let selected = move || nav.with(|n| n.selected_media_option.as_deref() == Some(def.id));
            view! {
                <button
                    class="primary-nav__media-type"
                    class:primary-nav__media-type--selected=selected
                    attr:data-mediatype=def.id
                    aria-expanded=move || if selected() { "true" } else { "false" }
                    on:click=move |_| {
                        on_event.run(NavEvent::MediaTypeSelected { media_type: def.id.to_owned() });
                    }
                >
                    {def.label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let second_logo = move || {
        if !attrs.with(TopNavAttrs::allow_secondary_identity_slot) {
            return None;
        }
        secondary_logo
            .as_ref()
            .map(|slot| view! { <span class="primary-nav__secondary-logo">{slot()}</span> })
    };

    // Memo so unrelated attribute writes do not reach the draft.
    let host_query = Memo::new(move |_| attrs.with(|a| a.search_query.clone()));
    let draft = RwSignal::new(SearchDraft::new(&host_query.get_untracked()));
    Effect::new(move || {
        let host = host_query.get();
        draft.update(|d| {
            d.sync_host(&host);
        });
    });

    let on_search_submit = move |_ev: leptos::ev::SubmitEvent| {
        let query = draft.with_untracked(|d| d.text.clone());
        let search_in = nav.with_untracked(|n| n.search_in.clone());
        on_event.run(NavEvent::Analytics(AnalyticsEvent::submit(search_submit_detail(&query, &search_in))));
    };

    let identity = move || {
        if signed_in() {
            let (avatar, screen_name) = attrs.with(|a| (a.profile_image_url(), a.screen_name.clone()));
            view! {
                <button
                    class="primary-nav__user-toggle"
                    aria-expanded=move || if nav.with(|n| n.is_user_menu_open()) { "true" } else { "false" }
                    on:click=move |_| on_event.run(NavEvent::MenuToggled { menu: MenuId::User })
                >
                    <img class="primary-nav__avatar" src=avatar alt="" />
                    <span class="primary-nav__screen-name">{screen_name}</span>
                </button>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="primary-nav__login-toggle"
                    aria-expanded=move || if nav.with(|n| n.is_signed_out_open()) { "true" } else { "false" }
                    on:click=move |_| on_event.run(NavEvent::MenuToggled { menu: MenuId::Login })
                >
                    "Sign in"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <nav class="primary-nav">
            <a class="primary-nav__logo" href=base_host>
                "Internet Archive"
            </a>
            {second_logo}
            <button
                class="primary-nav__media-toggle"
                aria-expanded=move || if nav.with(|n| n.is_open(MenuId::Media)) { "true" } else { "false" }
                on:click=move |_| on_event.run(NavEvent::MenuToggled { menu: MenuId::Media })
            >
                "Media"
            </button>
            <div class="primary-nav__media-types">{media_buttons}</div>
            <Show when=move || !hide_search()>
                <button
                    class="primary-nav__search-toggle"
                    aria-expanded=move || if nav.with(|n| n.is_search_menu_open()) { "true" } else { "false" }
                    on:click=move |_| on_event.run(NavEvent::MenuToggled { menu: MenuId::Search })
                >
                    "Search options"
                </button>
                <form
                    class="primary-nav__search"
                    method="get"
                    action=move || attrs.with(|a| search_action(&a.base_host))
                    on:submit=on_search_submit
                >
                    <input
                        class="primary-nav__search-input"
                        type="text"
                        name="query"
                        placeholder="Search"
                        prop:value=move || draft.with(|d| d.text.clone())
                        on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                    />
                    <input type="hidden" name="sin" prop:value=move || nav.with(|n| n.search_in.clone()) />
                    <button class="primary-nav__search-submit" type="submit">
                        "Go"
                    </button>
                </form>
            </Show>
            {identity}
        </nav>
    }
}

/// Search box contents: the user's local edits over the host's `searchquery`.
///
/// Local text survives until the host writes a different query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SearchDraft {
    host_query: String,
    text: String,
}

impl SearchDraft {
    fn new(host_query: &str) -> Self {
        Self { host_query: host_query.to_owned(), text: host_query.to_owned() }
    }

    /// Adopt `host_query` if it differs from the last one seen. Returns
    /// whether the local text was replaced.
    fn sync_host(&mut self, host_query: &str) -> bool {
        if self.host_query == host_query {
            return false;
        }
        host_query.clone_into(&mut self.host_query);
        host_query.clone_into(&mut self.text);
        true
    }
}

/// Search form target on the navigation host.
fn search_action(base_host: &str) -> String {
    format!("{base_host}/search")
}

/// Analytics payload for a search submission.
fn search_submit_detail(query: &str, search_in: &str) -> serde_json::Value {
    let label = if search_in.is_empty() { "metadata" } else { search_in };
    serde_json::json!({
        "event": "SearchSubmit",
        "label": label,
        "query": query,
    })
}
