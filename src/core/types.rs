//! Core data types shared between the tally logic and the UI.
//!
//! Rule of thumb:
//! - These are “boring bags of data”
//! - No GUI code
//! - No counting logic (that lives in `tally.rs`)
//!
//! 'VoteCategory' is the closed set of things a user can vote for.

use std::fmt;

/// One of the three sentiment buckets.
///
/// Because this is an enum, an "invalid category" can't even be written down
/// at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteCategory {
    Good,
    Neutral,
    Bad,
}

impl VoteCategory {
    /// Display order: buttons and stat lines both follow this.
    pub const ALL: [VoteCategory; 3] = [Self::Good, Self::Neutral, Self::Bad];

    /// Capitalised label for buttons / stat lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
        }
    }

    /// Lowercase key ("good", "neutral", "bad").
    pub fn key(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Bad => "bad",
        }
    }
}

impl fmt::Display for VoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
