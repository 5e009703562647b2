//! Cafe Feedback GUI
//!
//! # What this program is
//! A tiny desktop widget (built with the `iced` GUI library) where a visitor
//! rates a cafe as Good, Neutral or Bad. Votes are counted in memory and the
//! widget shows the counts, the total, and the share of positive votes.
//!
//! # How Iced works
//! - `Feedback` = the entire memory of the app (here: one vote tally)
//! - `Message` = “something happened” (a vote button or Reset was clicked)
//! - `update(state, message)` = applies it to the tally
//! - `view(state)` = draws the UI from the current tally
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Behavior
//! - Nobody voted yet: a "No feedback yet" notice is shown.
//! - At least one vote: per-category counts, total, and positive rate.
//! - Reset appears once there is a vote, and zeroes everything.
//!
//! # Architecture constraints
//! - All counting lives in `core::*`. The GUI never edits the tally itself.
//! - No persistence: closing the window forgets every vote.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see each vote.

mod core;
mod gui;

use log::{error, info};

use crate::gui::view::constants::{APP_TITLE, WINDOW_H, WINDOW_W};
use crate::gui::{Feedback, update, view};

fn main() -> iced::Result {
    env_logger::init();
    info!("starting {APP_TITLE}");

    let result = iced::application(Feedback::default, update, view)
        .title(APP_TITLE)
        .window_size((WINDOW_W, WINDOW_H))
        .run();

    if let Err(e) = &result {
        error!("application exited with error: {e}");
    }
    result
}
