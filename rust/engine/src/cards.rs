use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// One of the five card colors in a Notty deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Black,
    Blue,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Black => "black",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "black" => Ok(Color::Black),
            "blue" => Ok(Color::Blue),
            other => Err(EngineError::InvalidCard(format!(
                "unknown color '{}', must be one of red, green, yellow, black, blue",
                other
            ))),
        }
    }
}

/// Lowest card number.
pub const MIN_NUMBER: u8 = 1;
/// Highest card number.
pub const MAX_NUMBER: u8 = 9;

/// A single Notty card: a color and a number from 1 to 9.
///
/// Cards are plain values. Two cards with the same color and number are
/// interchangeable, so equality and hashing are structural.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    color: Color,
    number: u8,
}

impl Card {
    /// Builds a card, rejecting numbers outside `1..=9`.
    ///
    /// ```
    /// use notty_engine::cards::{Card, Color};
    ///
    /// let card = Card::new(Color::Blue, 4).unwrap();
    /// assert_eq!(card.to_string(), "blue 4");
    /// assert!(Card::new(Color::Blue, 10).is_err());
    /// ```
    pub fn new(color: Color, number: u8) -> Result<Self, EngineError> {
        if !all_numbers().contains(&number) {
            return Err(EngineError::InvalidCard(format!(
                "invalid number {}, must be between {} and {}",
                number, MIN_NUMBER, MAX_NUMBER
            )));
        }
        Ok(Self { color, number })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.number)
    }
}

/// Parses the `"<color> <number>"` form produced by `Display`.
impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(color), Some(number), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EngineError::InvalidCard(format!(
                "expected '<color> <number>', got '{}'",
                s.trim()
            )));
        };
        let number: u8 = number
            .parse()
            .map_err(|_| EngineError::InvalidCard(format!("invalid number '{}'", number)))?;
        Card::new(color.parse()?, number)
    }
}

#[derive(Deserialize)]
struct RawCard {
    color: Color,
    number: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = EngineError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.color, raw.number)
    }
}

pub fn all_colors() -> [Color; 5] {
    [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Black,
        Color::Blue,
    ]
}

pub fn all_numbers() -> RangeInclusive<u8> {
    MIN_NUMBER..=MAX_NUMBER
}

/// Copies of each color/number combination in a full deck.
pub const COPIES_PER_CARD: usize = 2;
/// Cards in a full deck: 5 colors, 9 numbers, 2 copies.
pub const DECK_SIZE: usize = 90;

/// Every card of a full deck in enumeration order: colors as declared,
/// numbers ascending, the copies of each card adjacent.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &color in &all_colors() {
        for number in all_numbers() {
            for _ in 0..COPIES_PER_CARD {
                v.push(Card { color, number });
            }
        }
    }
    v
}
