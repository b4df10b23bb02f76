//! Dropdown shown to signed-in users.

use leptos::prelude::*;

use crate::components::dropdown_menu::DropdownMenu;
use crate::state::attrs::TopNavAttrs;
use crate::state::events::NavEvent;
use crate::state::nav::{MenuId, NavigationState};

#[component]
pub fn UserMenu(
    #[prop(into)] attrs: Signal<TopNavAttrs>,
    #[prop(into)] nav: Signal<NavigationState>,
    on_event: Callback<NavEvent>,
) -> impl IntoView {
    let open = Signal::derive(move || nav.with(NavigationState::is_user_menu_open));
    let screen_name = move || attrs.with(|a| a.screen_name.clone());

    view! {
        <div
            class="user-menu"
            class:user-menu--open=move || open.get()
            class:user-menu--hide-search=move || attrs.with(|a| a.hide_search)
            tabindex=move || nav.with(|n| n.tab_index(MenuId::User))
        >
            <h3 class="user-menu__screen-name">{screen_name}</h3>
            <DropdownMenu
                attrs=attrs
                items=TopNavAttrs::user_menu_items
                menu_name="user"
                open=open
                on_event=on_event
            />
        </div>
    }
}
