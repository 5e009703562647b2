//! GUI renderer (reads state, produces widgets; no mutation).

mod cafe_info;
pub(crate) mod constants;
mod notification;
mod options;
mod stats;

use iced::Element;
use iced::widget::{Column, column};

use crate::core::{DerivedStats, DisplayState, VoteStateManager};

use super::state::{Feedback, Message};
use constants::{PADDING, SECTION_SPACING};

/// What goes under the option buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Body {
    Notification,
    Stats(DerivedStats),
}

pub(crate) fn select_body(votes: &VoteStateManager) -> Body {
    match votes.display_state() {
        DisplayState::Empty => Body::Notification,
        DisplayState::HasVotes => Body::Stats(votes.stats()),
    }
}

pub(crate) fn view(state: &Feedback) -> Column<'_, Message> {
    let info = cafe_info::build_cafe_info();
    let options = options::build_options(&state.votes);

    let body: Element<'_, Message> = match select_body(&state.votes) {
        Body::Notification => notification::build_notification().into(),
        Body::Stats(s) => stats::build_stats(s).into(),
    };

    column![info, options, body]
        .spacing(SECTION_SPACING)
        .padding(PADDING)
}
