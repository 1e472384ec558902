use thiserror::Error;

use crate::cards::Card;

/// Fatal errors raised while constructing engine values.
///
/// These abort the construction they come from: no partially built card or
/// game is ever returned. Illegal moves during play are not errors; they are
/// reported as rejected actions (see [`crate::rules::ActionRejected`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Game requires {min}-{max} players, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    #[error("Card pool holds {found} cards, expected {expected}")]
    CardsNotConserved { expected: usize, found: usize },
    #[error("Card pool does not match the deck: {missing} is missing, {extra} is one too many")]
    CardPoolMismatch { missing: Card, extra: Card },
}
