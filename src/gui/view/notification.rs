//! Placeholder shown while nobody has voted.

use iced::widget::{Container, container, text};

use super::super::state::Message;
use super::constants::BODY_TEXT;

pub(crate) fn build_notification() -> Container<'static, Message> {
    container(text("No feedback yet").size(BODY_TEXT))
}
