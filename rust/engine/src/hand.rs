use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::Card;

/// Per-card outcome of a bulk hand operation, in the order supplied.
pub type CardOutcomes = Vec<(Card, bool)>;

/// The cards held by one player, capped at [`Hand::MAX_CARDS`].
///
/// Order is display-only: the hand is reshuffled after every successful add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub const MAX_CARDS: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full(&self) -> bool {
        self.size() >= Self::MAX_CARDS
    }

    /// Adds `card` and reshuffles.
    ///
    /// At capacity the card is rejected unless `allow_overflow` is set; the
    /// steal action uses overflow to push a hand past the cap.
    pub fn add_card<R: Rng + ?Sized>(&mut self, card: Card, allow_overflow: bool, rng: &mut R) -> bool {
        if self.is_full() && !allow_overflow {
            return false;
        }
        self.cards.push(card);
        self.shuffle(rng);
        true
    }

    /// Adds each card independently without overflow. Rejected cards are
    /// reported as `false` and left with the caller.
    pub fn add_cards<R: Rng + ?Sized>(&mut self, cards: &[Card], rng: &mut R) -> CardOutcomes {
        cards
            .iter()
            .map(|&c| (c, self.add_card(c, false, rng)))
            .collect()
    }

    /// Removes one card equal to `card`. Duplicates are interchangeable, so
    /// which copy goes does not matter.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remove_cards(&mut self, cards: &[Card]) -> CardOutcomes {
        cards.iter().map(|c| (*c, self.remove_card(c))).collect()
    }

    /// True when every card in `cards` can be matched to a distinct card in
    /// the hand, counting duplicates.
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        let mut remaining = self.cards.clone();
        cards.iter().all(|c| match remaining.iter().position(|r| r == c) {
            Some(i) => {
                remaining.swap_remove(i);
                true
            }
            None => false,
        })
    }

    /// Removes the last card. Used by steal after the hand is shuffled.
    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
