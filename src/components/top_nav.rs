//! Coordinating component for the whole navigation bar.
//!
//! DESIGN
//! ======
//! `TopNav` owns the only writable `NavigationState`. Children get a read-only
//! `Signal` of it plus a `Callback<NavEvent>`; every change goes through
//! `NavigationState::apply`. Analytics events are not state: they are relayed
//! upward as DOM events and to the optional `on_analytics` callback.
//! Foreign widgets inside the bar reach the same callback through DOM events
//! caught on the root element (`util::child_events`).

use leptos::prelude::*;

use crate::components::desktop_subnav::DesktopSubnav;
use crate::components::media_slider::MediaSlider;
use crate::components::primary_nav::PrimaryNav;
use crate::components::search_menu::SearchMenu;
use crate::components::signed_out_dropdown::SignedOutDropdown;
use crate::components::user_menu::UserMenu;
use crate::state::attrs::TopNavAttrs;
use crate::state::events::{AnalyticsEvent, NavEvent};
use crate::state::nav::NavigationState;
use crate::util::{analytics, child_events};

/// Top navigation bar.
///
/// `secondary_logo` is rendered in the identity area only when the
/// `secondidentityslotmode` attribute is `"allow"`.
#[component]
pub fn TopNav(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    #[prop(optional)] on_analytics: Option<Callback<AnalyticsEvent>>,
    #[prop(optional)] secondary_logo: Option<ChildrenFn>,
) -> impl IntoView {
    let nav_state = RwSignal::new(NavigationState::default());
    let nav: Signal<NavigationState> = nav_state.into();
    let root_ref = NodeRef::<leptos::html::Div>::new();

    let on_event = Callback::new(move |event: NavEvent| {
        let mut relayed = None;
        nav_state.update(|s| relayed = s.apply(event));
        if let Some(event) = relayed {
            analytics::dispatch(root_ref, &event);
            if let Some(on_analytics) = on_analytics.as_ref() {
                on_analytics.run(event);
            }
        }
    });
    child_events::listen(root_ref, on_event);

    let close_layer_class = move || nav.with(NavigationState::close_layer_class);
    let on_close_layer = move |_| on_event.run(NavEvent::CloseMenus);
    let signed_in = move || attrs.with(TopNavAttrs::is_signed_in);

    view! {
        <div class="ia-topnav" node_ref=root_ref>
            <div class="topnav">
                <PrimaryNav attrs=attrs nav=nav on_event=on_event secondary_logo=secondary_logo />
                <MediaSlider attrs=attrs nav=nav on_event=on_event />
            </div>
            <Show
                when=signed_in
                fallback=move || view! { <SignedOutDropdown attrs=attrs nav=nav on_event=on_event /> }
            >
                <UserMenu attrs=attrs nav=nav on_event=on_event />
            </Show>
            <SearchMenu attrs=attrs nav=nav on_event=on_event />
            <DesktopSubnav attrs=attrs on_event=on_event />
            <div id="close-layer" class=close_layer_class on:click=on_close_layer></div>
        </div>
    }
}
