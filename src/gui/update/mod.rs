//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Feedback, Message};

mod votes;

pub(crate) fn update(state: &mut Feedback, message: Message) -> Task<Message> {
    match message {
        Message::Vote(category) => votes::record_vote(state, category),
        Message::Reset => votes::reset(state),
    }
}
