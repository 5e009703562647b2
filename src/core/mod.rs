//! core/mod.rs
//!
//! The brain of the app:
//! - Own the vote tally (`VoteStateManager`)
//! - Derive total / positive rate / which view to show
//! - Return plain data for the GUI to render
//!
//! No GUI code and no IO lives here. The GUI only calls `record_vote`,
//! `reset`, and the read-only getters.

pub mod tally;
pub mod types;

pub use tally::{DerivedStats, DisplayState, VoteStateManager};
pub use types::VoteCategory;
