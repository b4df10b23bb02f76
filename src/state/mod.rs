//! Navigation bar state modules.
//!
//! DESIGN
//! ======
//! `attrs` holds what the embedding page supplies, `nav` holds what the
//! coordinator owns, and `events` is the only way children ask for changes.

pub mod attrs;
pub mod events;
pub mod nav;
