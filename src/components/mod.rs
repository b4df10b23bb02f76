//! Navigation bar component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `top_nav` is the coordinator; every other component is a leaf that renders
//! from read-only signals and reports intent through a `NavEvent` callback.

pub mod desktop_subnav;
pub mod dropdown_menu;
pub mod media_slider;
pub mod primary_nav;
pub mod search_menu;
pub mod signed_out_dropdown;
pub mod top_nav;
pub mod user_menu;
