//! Vote tally + the state manager that owns it.
//!
//! The whole "brain" of the widget:
//! - `VoteTally` is a plain `Copy` value (three counters)
//! - `VoteStateManager` owns exactly one tally and is the only thing that
//!   replaces it
//! - everything the UI shows (total, positive rate, which view) is derived
//!   from the tally on demand, never stored

use super::types::VoteCategory;

/// Current count per category.
///
/// Counts are unsigned, so "never negative" is a type fact, not a check.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub good: u64,
    pub neutral: u64,
    pub bad: u64,
}

impl VoteTally {
    /// All counters at zero.
    pub const EMPTY: VoteTally = VoteTally {
        good: 0,
        neutral: 0,
        bad: 0,
    };

    /// Count for one category.
    pub fn count(&self, category: VoteCategory) -> u64 {
        match category {
            VoteCategory::Good => self.good,
            VoteCategory::Neutral => self.neutral,
            VoteCategory::Bad => self.bad,
        }
    }

    /// Copy of `self` with `category` bumped by one.
    /// Saturates instead of wrapping.
    pub fn with_vote(self, category: VoteCategory) -> Self {
        match category {
            VoteCategory::Good => Self {
                good: self.good.saturating_add(1),
                ..self
            },
            VoteCategory::Neutral => Self {
                neutral: self.neutral.saturating_add(1),
                ..self
            },
            VoteCategory::Bad => Self {
                bad: self.bad.saturating_add(1),
                ..self
            },
        }
    }
}

/// Which of the two views the UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// No votes yet: show the notification.
    Empty,
    /// At least one vote: show the stats.
    HasVotes,
}

/// Everything one render cycle needs, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub tally: VoteTally,
    pub total: u64,
    pub positive_rate: u8,
}

/// Sum of all three counters.
pub fn total(tally: &VoteTally) -> u64 {
    tally
        .good
        .saturating_add(tally.neutral)
        .saturating_add(tally.bad)
}

/// Percentage of `good` among all votes, 0..=100.
///
/// - total == 0 -> 0 (no division)
/// - otherwise round(good / total * 100), halves round up
///
/// Integer math in u128: floor((200 * good + total) / (2 * total)).
/// The total here is exact even when `total()` would saturate.
pub fn positive_rate(tally: &VoteTally) -> u8 {
    let good = u128::from(tally.good);
    let total = good + u128::from(tally.neutral) + u128::from(tally.bad);
    if total == 0 {
        return 0;
    }

    let rate = (200 * good + total) / (2 * total);
    u8::try_from(rate).unwrap_or(100)
}

/// Empty vs HasVotes, keyed only off `total`.
pub fn display_state(tally: &VoteTally) -> DisplayState {
    if total(tally) == 0 {
        DisplayState::Empty
    } else {
        DisplayState::HasVotes
    }
}

/// Owns the tally. The only way to change it is `record_vote` / `reset`.
#[derive(Debug, Default)]
pub struct VoteStateManager {
    tally: VoteTally,
}

impl VoteStateManager {
    /// Add one vote for `category` and return the new tally.
    pub fn record_vote(&mut self, category: VoteCategory) -> VoteTally {
        self.tally = self.tally.with_vote(category);
        self.tally
    }

    /// Zero every counter. No undo.
    pub fn reset(&mut self) -> VoteTally {
        self.tally = VoteTally::EMPTY;
        self.tally
    }

    pub fn tally(&self) -> VoteTally {
        self.tally
    }

    pub fn total(&self) -> u64 {
        total(&self.tally)
    }

    pub fn positive_rate(&self) -> u8 {
        positive_rate(&self.tally)
    }

    pub fn display_state(&self) -> DisplayState {
        display_state(&self.tally)
    }

    /// Reset only makes sense once something was voted.
    pub fn can_reset(&self) -> bool {
        self.total() > 0
    }

    pub fn stats(&self) -> DerivedStats {
        DerivedStats {
            tally: self.tally,
            total: self.total(),
            positive_rate: self.positive_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tally(good: u64, neutral: u64, bad: u64) -> VoteTally {
        VoteTally { good, neutral, bad }
    }

    #[test]
    fn test_fresh_manager_is_empty() {
        let m = VoteStateManager::default();
        assert_eq!(m.tally(), VoteTally::EMPTY);
        assert_eq!(m.total(), 0);
        assert_eq!(m.positive_rate(), 0);
        assert_eq!(m.display_state(), DisplayState::Empty);
        assert!(!m.can_reset());
    }

    #[test]
    fn test_vote_sequence_scenario() {
        let mut m = VoteStateManager::default();

        assert_eq!(m.record_vote(VoteCategory::Good), tally(1, 0, 0));
        assert_eq!(m.total(), 1);
        assert_eq!(m.positive_rate(), 100);
        assert_eq!(m.display_state(), DisplayState::HasVotes);

        assert_eq!(m.record_vote(VoteCategory::Neutral), tally(1, 1, 0));
        assert_eq!(m.total(), 2);
        assert_eq!(m.positive_rate(), 50);

        assert_eq!(m.record_vote(VoteCategory::Bad), tally(1, 1, 1));
        assert_eq!(m.total(), 3);
        assert_eq!(m.positive_rate(), 33);

        assert_eq!(m.reset(), VoteTally::EMPTY);
        assert_eq!(m.total(), 0);
        assert_eq!(m.display_state(), DisplayState::Empty);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut m = VoteStateManager::default();
        m.record_vote(VoteCategory::Bad);
        m.record_vote(VoteCategory::Bad);
        let once = m.reset();
        let twice = m.reset();
        assert_eq!(once, twice);
        assert_eq!(twice, VoteTally::EMPTY);
        assert!(!m.can_reset());
    }

    #[test]
    fn test_can_reset_after_any_vote() {
        for c in VoteCategory::ALL {
            let mut m = VoteStateManager::default();
            m.record_vote(c);
            assert!(m.can_reset(), "{c} should enable reset");
        }
    }

    #[test]
    fn test_positive_rate_rounds_half_up() {
        assert_eq!(positive_rate(&tally(1, 7, 0)), 13); // 12.5
        assert_eq!(positive_rate(&tally(2, 0, 1)), 67); // 66.67
        assert_eq!(positive_rate(&tally(1, 0, 2)), 33); // 33.33
        assert_eq!(positive_rate(&tally(0, 3, 3)), 0);
    }

    #[test]
    fn test_positive_rate_exact_at_counter_ceiling() {
        assert_eq!(positive_rate(&tally(u64::MAX, u64::MAX, 0)), 50);
        assert_eq!(positive_rate(&tally(u64::MAX, 0, 0)), 100);
        assert_eq!(positive_rate(&tally(1, u64::MAX, u64::MAX)), 0);
    }

    #[test]
    fn test_positive_rate_zero_total() {
        assert_eq!(positive_rate(&VoteTally::EMPTY), 0);
    }

    #[test]
    fn test_with_vote_leaves_original_untouched() {
        let before = tally(4, 5, 6);
        let after = before.with_vote(VoteCategory::Neutral);
        assert_eq!(before, tally(4, 5, 6));
        assert_eq!(after, tally(4, 6, 6));
    }

    #[test]
    fn test_with_vote_saturates() {
        let full = tally(u64::MAX, 0, 0);
        assert_eq!(full.with_vote(VoteCategory::Good).good, u64::MAX);
    }

    #[test]
    fn test_stats_bundle() {
        let mut m = VoteStateManager::default();
        m.record_vote(VoteCategory::Good);
        m.record_vote(VoteCategory::Good);
        m.record_vote(VoteCategory::Bad);
        assert_eq!(
            m.stats(),
            DerivedStats {
                tally: tally(2, 0, 1),
                total: 3,
                positive_rate: 67,
            }
        );
    }

    fn category() -> impl Strategy<Value = VoteCategory> {
        prop_oneof![
            Just(VoteCategory::Good),
            Just(VoteCategory::Neutral),
            Just(VoteCategory::Bad),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_counts_every_vote(votes in prop::collection::vec(category(), 0..200)) {
            let mut m = VoteStateManager::default();
            for c in &votes {
                m.record_vote(*c);
            }
            prop_assert_eq!(m.total(), votes.len() as u64);
        }

        #[test]
        fn prop_vote_touches_only_its_category(
            good in 0u64..1000,
            neutral in 0u64..1000,
            bad in 0u64..1000,
            c in category(),
        ) {
            let before = tally(good, neutral, bad);
            let after = before.with_vote(c);
            for other in VoteCategory::ALL {
                if other == c {
                    prop_assert_eq!(after.count(other), before.count(other) + 1);
                } else {
                    prop_assert_eq!(after.count(other), before.count(other));
                }
            }
        }

        #[test]
        fn prop_rate_within_bounds(good in 0u64..10_000, neutral in 0u64..10_000, bad in 0u64..10_000) {
            let t = tally(good, neutral, bad);
            let rate = positive_rate(&t);
            prop_assert!(rate <= 100);
            if total(&t) == 0 {
                prop_assert_eq!(rate, 0);
            }
        }

        #[test]
        fn prop_display_state_tracks_total(votes in prop::collection::vec(category(), 0..20)) {
            let mut m = VoteStateManager::default();
            for c in &votes {
                m.record_vote(*c);
            }
            let expected = if votes.is_empty() { DisplayState::Empty } else { DisplayState::HasVotes };
            prop_assert_eq!(m.display_state(), expected);
            m.reset();
            prop_assert_eq!(m.tally(), VoteTally::EMPTY);
        }
    }
}
