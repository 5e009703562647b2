//! Stats panel: per-category counts, total, positive rate.

use iced::widget::{Column, column, text};

use crate::core::{DerivedStats, VoteCategory};

use super::super::state::Message;
use super::constants::{LINE_SPACING, STAT_TEXT};

pub(crate) fn build_stats(stats: DerivedStats) -> Column<'static, Message> {
    let mut col = column![].spacing(LINE_SPACING);

    for category in VoteCategory::ALL {
        col = col.push(stat_line(category.label(), stats.tally.count(category)));
    }

    col.push(stat_line("Total", stats.total))
        .push(text(format!("Positive: {}%", stats.positive_rate)).size(STAT_TEXT))
}

fn stat_line(label: &str, value: u64) -> iced::widget::Text<'static> {
    text(format!("{label}: {value}")).size(STAT_TEXT)
}
