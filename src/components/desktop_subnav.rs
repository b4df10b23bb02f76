//! Secondary link row under the primary nav on wide screens.

use leptos::prelude::*;

use crate::components::dropdown_menu::entry_analytics_detail;
use crate::state::attrs::TopNavAttrs;
use crate::state::events::{AnalyticsEvent, NavEvent};

#[component]
pub fn DesktopSubnav(#[prop(into)] attrs: Signal<TopNavAttrs>, on_event: Callback<NavEvent>) -> impl IntoView {
    view! {
        <ul class="desktop-subnav">
            {move || {
                attrs.with(|a| {
                    a.desktop_subnav_menu_items()
                        .iter()
                        .map(|entry| {
                            let href = entry.url.as_deref().map(|url| a.link(url));
                            let title = entry.title.clone();
                            let detail = entry_analytics_detail("more", entry);
                            view! {
                                <li class="desktop-subnav__item">
                                    <a
                                        href=href
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
