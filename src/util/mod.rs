//! Browser glue shared by the components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys` calls out of component bodies; every helper has a
//! non-hydrate fallback so SSR builds and native tests compile the same code.

pub mod analytics;
pub mod child_events;
