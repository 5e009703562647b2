//! Option buttons (one per category) + Reset.

use iced::widget::{Row, button, row};

use crate::core::{VoteCategory, VoteStateManager};

use super::super::state::Message;
use super::constants::BUTTON_SPACING;

/// Reset is only shown once there is something to reset.
pub(crate) fn build_options(votes: &VoteStateManager) -> Row<'static, Message> {
    let mut buttons = row![].spacing(BUTTON_SPACING);

    for category in VoteCategory::ALL {
        buttons = buttons.push(button(category.label()).on_press(Message::Vote(category)));
    }

    if votes.can_reset() {
        buttons = buttons.push(button("Reset").on_press(Message::Reset));
    }

    buttons
}
