//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Feedback')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')

pub(crate) mod state;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::Feedback;
pub(crate) use update::update;
pub(crate) use view::view;
