//! # topnav
//!
//! Leptos + WASM site navigation bar.
//!
//! `TopNav` coordinates the primary nav, user menu, signed-out dropdown,
//! search menu, media slider and desktop sub-navigation: it keeps at most one
//! menu open, owns the media slider selection, and relays analytics events
//! to the page. Attributes arrive from the host element, with the `config`,
//! `menus` and `searchquery` values base64 encoded (see the `navattrs` crate).

pub mod components;
#[cfg(feature = "hydrate")]
pub mod mount;
pub mod state;
pub mod util;
