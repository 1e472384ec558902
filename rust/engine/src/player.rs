use crate::hand::Hand;

/// A seat at the table: a name, a cosmetic human/computer label and a hand.
///
/// `is_human` drives no game logic; it only tells a presentation layer how
/// to label the seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    is_human: bool,
    hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, is_human: bool) -> Self {
        Self {
            name: name.into(),
            is_human,
            hand: Hand::new(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Direct hand access for arranging a table before it is handed to
    /// [`crate::game::Game::from_parts`]. During play, hands change only
    /// through the game's action methods.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_human {
            "human"
        } else {
            "computer"
        }
    }
}
