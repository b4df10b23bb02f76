//! Dropdown shown instead of the user menu when nobody is signed in.

use leptos::prelude::*;

use crate::components::dropdown_menu::DropdownMenu;
use crate::state::attrs::TopNavAttrs;
use crate::state::events::NavEvent;
use crate::state::nav::{MenuId, NavigationState};

#[component]
pub fn SignedOutDropdown(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    #[prop(into)] nav: Signal<NavigationState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let open = Signal::derive(move || nav.with(NavigationState::is_signed_out_open));

    view! {
        <div
            class="signed-out-dropdown"
            class:signed-out-dropdown--open=move || open.get()
            class:signed-out-dropdown--hide-search=move || attrs.with(|a| a.hide_search)
            tabindex=move || nav.with(|n| n.tab_index(MenuId::Login))
        >
            <DropdownMenu
                attrs=attrs
                items=TopNavAttrs::signed_out_menu_items
                menu_name="signedOut"
                open=open
                on_event=on_event
            />
        </div>
    }
}
