//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use crate::core::{VoteCategory, VoteStateManager};

/// App state.
///
/// The only thing the widget remembers is the tally, and that lives inside
/// the manager. Views never touch it directly.
#[derive(Debug, Default)]
pub(crate) struct Feedback {
    pub votes: VoteStateManager,
}

/// Message = “something happened”.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Message {
    /// User clicked one of the option buttons.
    Vote(VoteCategory),
    /// User clicked “Reset”.
    Reset,
}
