//! Overlay coordination state for the top navigation bar.
//!
//! DESIGN
//! ======
//! Exactly one writer (the `TopNav` coordinator) mutates this struct, and only
//! through the methods below. Child widgets see it through read-only signals
//! and request changes by emitting a [`NavEvent`].
//!
//! Open-menu transitions:
//!
//! ```text
//! none ──toggle(m)──▶ m ──toggle(m)──▶ none
//!                     m ──toggle(n)──▶ n        (m closed, n opened)
//! any  ──close_all──▶ none
//! ```
//!
//! Any transition that does not land on `media` also closes the media slider
//! and clears its selected option.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::events::{AnalyticsEvent, NavEvent};

/// Identifier of an exclusive overlay menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuId {
    User,
    Login,
    Search,
    Media,
}

impl MenuId {
    /// Parse a DOM menu name (`detail.menuName`).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "user" => Some(Self::User),
            "login" => Some(Self::Login),
            "search" => Some(Self::Search),
            "media" => Some(Self::Media),
            _ => None,
        }
    }
}

/// Coordinator-owned navigation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub open_menu: Option<MenuId>,
    pub media_slider_open: bool,
    pub selected_media_option: Option<String>,
    /// Active search scope chosen in the search menu.
    pub search_in: String,
}

impl NavigationState {
    /// Open `menu`, or close it if it is already the open one.
    pub fn toggle_menu(&mut self, menu: MenuId) {
        self.open_menu = if self.open_menu == Some(menu) { None } else { Some(menu) };
        if self.open_menu != Some(MenuId::Media) {
            self.close_media_slider();
        }
    }

    pub fn open_media_slider(&mut self) {
        self.media_slider_open = true;
    }

    pub fn close_media_slider(&mut self) {
        self.media_slider_open = false;
        self.selected_media_option = None;
    }

    /// Select a media type in the slider. Re-selecting the current option
    /// closes the slider.
    pub fn select_media_option(&mut self, option: &str) {
        if self.selected_media_option.as_deref() == Some(option) {
            self.close_media_slider();
            return;
        }
        self.selected_media_option = Some(option.to_owned());
        self.open_media_slider();
    }

    pub fn set_search_scope(&mut self, scope: &str) {
        scope.clone_into(&mut self.search_in);
    }

    /// Close every overlay. Bound to the click-outside layer.
    pub fn close_all(&mut self) {
        self.open_menu = None;
        self.close_media_slider();
    }

    /// Apply a child-originated event. Returns the analytics payload to relay
    /// upward, unchanged, when the event is an analytics event.
    pub fn apply(&mut self, event: NavEvent) -> Option<AnalyticsEvent> {
        match event {
            NavEvent::MenuToggled { menu } => self.toggle_menu(menu),
            NavEvent::MediaTypeSelected { media_type } => self.select_media_option(&media_type),
            NavEvent::SearchInChanged { search_in } => self.set_search_scope(&search_in),
            NavEvent::CloseMenus => self.close_all(),
            NavEvent::Analytics(analytics) => return Some(analytics),
        }
        None
    }

    #[must_use]
    pub fn is_open(&self, menu: MenuId) -> bool {
        self.open_menu == Some(menu)
    }

    #[must_use]
    pub fn is_user_menu_open(&self) -> bool {
        self.is_open(MenuId::User)
    }

    #[must_use]
    pub fn is_signed_out_open(&self) -> bool {
        self.is_open(MenuId::Login)
    }

    #[must_use]
    pub fn is_search_menu_open(&self) -> bool {
        self.is_open(MenuId::Search)
    }

    /// `tabindex` for a menu's interactive content: reachable only while open.
    #[must_use]
    pub fn tab_index(&self, menu: MenuId) -> &'static str {
        if self.is_open(menu) { "" } else { "-1" }
    }

    /// Whether the click-outside dimmer layer is shown.
    #[must_use]
    pub fn close_layer_visible(&self) -> bool {
        self.open_menu.is_some() || self.media_slider_open
    }

    #[must_use]
    pub fn close_layer_class(&self) -> &'static str {
        if self.close_layer_visible() { "visible" } else { "" }
    }
}
