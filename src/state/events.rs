//! Events emitted by child widgets and relayed analytics events.
//!
//! Child widgets inside this crate emit [`NavEvent`] values directly. Widgets
//! living outside it (plain custom elements slotted into the bar) emit DOM
//! `CustomEvent`s; [`NavEvent::from_detail`] validates those at the
//! coordinator boundary before anything touches state.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde_json::Value;

use crate::state::nav::MenuId;

/// Error returned by [`NavEvent::from_detail`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventError {
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("event {event} is missing string field `{field}`")]
    MissingField { event: &'static str, field: &'static str },
    #[error("unknown menu: {0}")]
    UnknownMenu(String),
}

/// Which analytics event is being relayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyticsKind {
    Click,
    Submit,
}

impl AnalyticsKind {
    /// DOM event name dispatched on the host element.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Click => "analyticsClick",
            Self::Submit => "analyticsSubmit",
        }
    }
}

/// Analytics payload relayed upward without transformation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub kind: AnalyticsKind,
    pub detail: Value,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn click(detail: Value) -> Self {
        Self { kind: AnalyticsKind::Click, detail }
    }

    #[must_use]
    pub fn submit(detail: Value) -> Self {
        Self { kind: AnalyticsKind::Submit, detail }
    }
}

/// DOM event names the coordinator listens for on its root element.
pub const CHILD_EVENT_NAMES: &[&str] =
    &["menuToggled", "mediaTypeSelected", "searchInChanged", "closeMenus", "trackClick", "trackSubmit"];

/// A request from a child widget to the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    MenuToggled { menu: MenuId },
    MediaTypeSelected { media_type: String },
    SearchInChanged { search_in: String },
    CloseMenus,
    Analytics(AnalyticsEvent),
}

impl NavEvent {
    /// Build an event from a DOM event name and its `detail` payload.
    ///
    /// # Errors
    ///
    /// Returns [`EventError`] for unknown event names, missing or non-string
    /// payload fields, and unknown menu names.
    pub fn from_detail(name: &str, detail: &Value) -> Result<Self, EventError> {
        match name {
            "menuToggled" => {
                let menu_name = string_field(detail, "menuToggled", "menuName")?;
                let menu = MenuId::parse(menu_name).ok_or_else(|| EventError::UnknownMenu(menu_name.to_owned()))?;
                Ok(Self::MenuToggled { menu })
            }
            "mediaTypeSelected" => Ok(Self::MediaTypeSelected {
                media_type: string_field(detail, "mediaTypeSelected", "mediatype")?.to_owned(),
            }),
            "searchInChanged" => Ok(Self::SearchInChanged {
                search_in: string_field(detail, "searchInChanged", "searchIn")?.to_owned(),
            }),
            "closeMenus" => Ok(Self::CloseMenus),
            "trackClick" => Ok(Self::Analytics(AnalyticsEvent::click(detail.clone()))),
            "trackSubmit" => Ok(Self::Analytics(AnalyticsEvent::submit(detail.clone()))),
            other => Err(EventError::UnknownEvent(other.to_owned())),
        }
    }
}

fn string_field<'a>(detail: &'a Value, event: &'static str, field: &'static str) -> Result<&'a str, EventError> {
    detail
        .get(field)
        .and_then(Value::as_str)
        .ok_or(EventError::MissingField { event, field })
}
