//! Vote + reset handlers.

use iced::Task;
use log::{debug, info};

use crate::core::VoteCategory;

use super::super::state::{Feedback, Message};

pub(crate) fn record_vote(state: &mut Feedback, category: VoteCategory) -> Task<Message> {
    let tally = state.votes.record_vote(category);
    debug!(
        "vote recorded: {category} -> good={} neutral={} bad={}",
        tally.good, tally.neutral, tally.bad
    );
    Task::none()
}

pub(crate) fn reset(state: &mut Feedback) -> Task<Message> {
    let discarded = state.votes.total();
    state.votes.reset();
    info!("votes reset ({discarded} discarded)");
    Task::none()
}
