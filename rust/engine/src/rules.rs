use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;

/// The four budgeted actions a player may take once per turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Draw several cards from the deck.
    Draw,
    /// Take one random card from another player.
    Steal,
    /// Draw one card; must be followed by [`ActionKind::DrawDiscardDiscard`].
    DrawDiscardDraw,
    /// Return one card to the deck after a draw-discard draw.
    DrawDiscardDiscard,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Draw,
        ActionKind::Steal,
        ActionKind::DrawDiscardDraw,
        ActionKind::DrawDiscardDiscard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Draw => "draw",
            ActionKind::Steal => "steal",
            ActionKind::DrawDiscardDraw => "draw_discard_draw",
            ActionKind::DrawDiscardDiscard => "draw_discard_discard",
        }
    }

    fn index(self) -> usize {
        match self {
            ActionKind::Draw => 0,
            ActionKind::Steal => 1,
            ActionKind::DrawDiscardDraw => 2,
            ActionKind::DrawDiscardDiscard => 3,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many times each action kind has been used in the current turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionBudget {
    used: [u8; 4],
}

impl ActionBudget {
    /// Uses allowed per action kind per turn.
    pub const LIMIT: u8 = 1;

    pub fn used(&self, kind: ActionKind) -> u8 {
        self.used[kind.index()]
    }

    pub fn is_available(&self, kind: ActionKind) -> bool {
        self.used(kind) < Self::LIMIT
    }

    pub fn record(&mut self, kind: ActionKind) {
        let slot = &mut self.used[kind.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.used = [0; 4];
    }

    pub fn is_fresh(&self) -> bool {
        self.used.iter().all(|&n| n == 0)
    }
}

/// Why an action was refused. Refusals never mutate game state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ActionRejected {
    #[error("The game is already over")]
    GameOver,
    #[error("Action {0} was already used this turn")]
    AlreadyUsed(ActionKind),
    #[error("The deck is empty")]
    DeckEmpty,
    #[error("Hand is full")]
    HandFull,
    #[error("No other player has cards to steal")]
    NothingToSteal,
    #[error("Player {0} cannot be stolen from")]
    InvalidTarget(usize),
    #[error("Draw-discard needs its draw first")]
    DiscardWithoutDraw,
    #[error("Card is not in the current hand")]
    CardNotInHand,
    #[error("Cards do not form a valid group")]
    InvalidGroup,
}

/// The two shapes a discardable group can take.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Three or more cards of one color with consecutive ascending numbers.
    Run,
    /// Four or more cards of one number, every color different.
    Set,
}

pub const MIN_RUN_LEN: usize = 3;
pub const MIN_SET_LEN: usize = 4;

/// Classifies a group of cards, checking for a run first.
///
/// Run order is taken as supplied: every adjacent pair must step up by
/// exactly one, so `[5, 4, 6]` is not a run even though it sorts into one.
///
/// ```
/// use notty_engine::cards::{Card, Color};
/// use notty_engine::rules::{classify_group, GroupKind};
///
/// let run: Vec<Card> = (4..=6).map(|n| Card::new(Color::Blue, n).unwrap()).collect();
/// assert_eq!(classify_group(&run), Some(GroupKind::Run));
///
/// let set = [Color::Red, Color::Green, Color::Blue, Color::Black]
///     .map(|c| Card::new(c, 4).unwrap());
/// assert_eq!(classify_group(&set), Some(GroupKind::Set));
/// ```
pub fn classify_group(cards: &[Card]) -> Option<GroupKind> {
    if is_run(cards) {
        Some(GroupKind::Run)
    } else if is_set(cards) {
        Some(GroupKind::Set)
    } else {
        None
    }
}

pub fn card_group_is_valid(cards: &[Card]) -> bool {
    classify_group(cards).is_some()
}

fn is_run(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    cards.len() >= MIN_RUN_LEN
        && cards.iter().all(|c| c.color() == first.color())
        && cards
            .windows(2)
            .all(|w| i16::from(w[1].number()) - i16::from(w[0].number()) == 1)
}

fn is_set(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    let colors: HashSet<_> = cards.iter().map(|c| c.color()).collect();
    cards.len() >= MIN_SET_LEN
        && colors.len() == cards.len()
        && cards.iter().all(|c| c.number() == first.number())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color::{self, *};

    fn cards(pairs: &[(Color, u8)]) -> Vec<Card> {
        pairs.iter().map(|&(c, n)| Card::new(c, n).unwrap()).collect()
    }

    #[test]
    fn run_of_three_is_valid() {
        assert!(card_group_is_valid(&cards(&[(Red, 1), (Red, 2), (Red, 3)])));
    }

    #[test]
    fn longer_run_is_valid() {
        let g = cards(&[(Black, 5), (Black, 6), (Black, 7), (Black, 8), (Black, 9)]);
        assert_eq!(classify_group(&g), Some(GroupKind::Run));
    }

    #[test]
    fn run_of_two_is_too_short() {
        assert!(!card_group_is_valid(&cards(&[(Red, 1), (Red, 2)])));
    }

    #[test]
    fn run_must_be_supplied_in_ascending_order() {
        assert!(!card_group_is_valid(&cards(&[(Red, 5), (Red, 4), (Red, 6)])));
        assert!(!card_group_is_valid(&cards(&[(Red, 3), (Red, 2), (Red, 1)])));
    }

    #[test]
    fn run_with_mixed_colors_is_invalid() {
        assert!(!card_group_is_valid(&cards(&[(Red, 1), (Green, 2), (Red, 3)])));
    }

    #[test]
    fn run_with_gap_is_invalid() {
        assert!(!card_group_is_valid(&cards(&[(Blue, 1), (Blue, 2), (Blue, 4)])));
    }

    #[test]
    fn set_of_four_distinct_colors_is_valid() {
        let g = cards(&[(Red, 1), (Green, 1), (Blue, 1), (Yellow, 1)]);
        assert_eq!(classify_group(&g), Some(GroupKind::Set));
    }

    #[test]
    fn set_of_five_is_valid() {
        let g = cards(&[(Red, 7), (Green, 7), (Blue, 7), (Yellow, 7), (Black, 7)]);
        assert!(card_group_is_valid(&g));
    }

    #[test]
    fn set_of_three_is_too_short() {
        assert!(!card_group_is_valid(&cards(&[(Red, 1), (Green, 1), (Blue, 1)])));
    }

    #[test]
    fn set_with_repeated_color_is_invalid() {
        let g = cards(&[(Red, 4), (Green, 4), (Red, 4), (Blue, 4)]);
        assert!(!card_group_is_valid(&g));
    }

    #[test]
    fn empty_group_is_invalid() {
        assert!(!card_group_is_valid(&[]));
    }

    #[test]
    fn budget_tracks_and_resets() {
        let mut budget = ActionBudget::default();
        assert!(budget.is_fresh());
        budget.record(ActionKind::Steal);
        assert_eq!(budget.used(ActionKind::Steal), 1);
        assert!(!budget.is_available(ActionKind::Steal));
        assert!(budget.is_available(ActionKind::Draw));
        budget.reset();
        assert!(budget.is_fresh());
        for kind in ActionKind::ALL {
            assert_eq!(budget.used(kind), 0);
        }
    }
}
