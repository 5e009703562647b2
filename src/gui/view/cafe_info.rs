//! Header panel (cafe name + prompt). Static.

use iced::widget::{Container, column, container, text};

use super::super::state::Message;
use super::constants::{APP_TITLE, BODY_TEXT, LINE_SPACING, TITLE_TEXT};

pub(crate) fn build_cafe_info() -> Container<'static, Message> {
    let col = column![
        text(APP_TITLE).size(TITLE_TEXT),
        text("Please leave your feedback about our service by selecting one of the options below.")
            .size(BODY_TEXT),
    ]
    .spacing(LINE_SPACING);

    container(col)
}
