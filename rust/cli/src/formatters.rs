//! Card, hand and table formatters for terminal display.
//!
//! Cards print as a one-letter color code followed by the number (`R5`,
//! `K9` for black 5 and 9). Player labels use Unicode markers with an ASCII
//! fallback for terminals that cannot render them.
//!
//! ```rust
//! use notty_engine::cards::{Card, Color};
//! use notty_cli::formatters::{format_card, format_hand};
//!
//! let blue_four = Card::new(Color::Blue, 4).unwrap();
//! assert_eq!(format_card(&blue_four), "B4");
//! assert_eq!(format_hand(&[blue_four]), "[B4]");
//! ```

use notty_engine::cards::{Card, Color};
use notty_engine::game::Game;
use notty_engine::player::Player;
use notty_engine::rules::ActionKind;

/// Check if the terminal supports Unicode markers.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// One-letter color code. Black is `K` so it does not clash with blue.
pub fn color_code(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Green => 'G',
        Color::Yellow => 'Y',
        Color::Black => 'K',
        Color::Blue => 'B',
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", color_code(card.color()), card.number())
}

/// Format a hand in bracket notation, keeping the hand's own order.
pub fn format_hand(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn player_marker(player: &Player) -> &'static str {
    match (supports_unicode(), player.is_human()) {
        (true, true) => "👤",
        (true, false) => "🤖",
        (false, true) => "[H]",
        (false, false) => "[C]",
    }
}

/// One line per seat: marker, index, name, card count. The current seat is
/// flagged with `>`.
pub fn format_table<R: rand::Rng>(game: &Game<R>) -> String {
    let mut lines = vec![format!("Deck: {} cards", game.deck_size())];
    for (i, p) in game.players().iter().enumerate() {
        let cursor = if i == game.current_player_index() { '>' } else { ' ' };
        lines.push(format!(
            "{} {} #{} {} ({} cards)",
            cursor,
            player_marker(p),
            i,
            p.name(),
            p.hand().size()
        ));
    }
    lines.join("\n")
}

/// Lists the budgeted actions still open to the current player.
pub fn format_available<R: rand::Rng>(game: &Game<R>) -> String {
    let open: Vec<&str> = ActionKind::ALL
        .iter()
        .filter(|&&k| game.check_action(k).is_ok())
        .map(action_command)
        .collect();
    if open.is_empty() {
        "Available: pass".to_string()
    } else {
        format!("Available: {}, group, pass", open.join(", "))
    }
}

/// The play-loop command that triggers `kind`.
pub fn action_command(kind: &ActionKind) -> &'static str {
    match kind {
        ActionKind::Draw => "draw",
        ActionKind::Steal => "steal",
        ActionKind::DrawDiscardDraw => "dd draw",
        ActionKind::DrawDiscardDiscard => "dd discard",
    }
}
