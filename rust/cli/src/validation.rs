//! Input parsing for the interactive `play` command.
//!
//! Cards can be typed either in long form (`red 5`) or as the short codes the
//! table display uses (`R5`, `K9` for black). Parsing never touches the game;
//! whether an action is allowed is decided by the engine afterwards.

use notty_engine::cards::{Card, Color};

/// One line of play-loop input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Show the current player's hand
    Hand,
    /// Show the table and the open actions
    Status,
    /// Show the command list
    Help,
    /// Draw cards; `None` uses the configured maximum
    Draw(Option<usize>),
    /// Steal from the player at this seat index
    Steal(usize),
    /// First half of draw-discard
    DrawDiscardDraw,
    /// Second half of draw-discard
    DrawDiscardDiscard(Card),
    /// Discard a run or set
    Group(Vec<Card>),
    /// End the turn
    Pass,
}

/// Result type for parsing user input in the play loop.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(PlayCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub const COMMAND_HELP: &str = "Commands: hand, status, draw [n], steal <seat>, dd draw, \
dd discard <card>, group <card> <card> ..., pass, help, q";

/// Parse user input into a play command.
///
/// ```rust
/// # use notty_cli::validation::{parse_play_command, ParseResult, PlayCommand};
/// assert_eq!(
///     parse_play_command("draw 2"),
///     ParseResult::Command(PlayCommand::Draw(Some(2)))
/// );
/// assert_eq!(parse_play_command("q"), ParseResult::Quit);
/// match parse_play_command("dance") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    let args = &parts[1..];

    match head {
        "q" | "quit" => ParseResult::Quit,
        "hand" | "h" => ParseResult::Command(PlayCommand::Hand),
        "status" | "s" => ParseResult::Command(PlayCommand::Status),
        "help" | "?" => ParseResult::Command(PlayCommand::Help),
        "pass" | "p" => ParseResult::Command(PlayCommand::Pass),
        "draw" | "d" => match args {
            [] => ParseResult::Command(PlayCommand::Draw(None)),
            [n] => match n.parse::<usize>() {
                Ok(count) if count > 0 => ParseResult::Command(PlayCommand::Draw(Some(count))),
                Ok(_) => ParseResult::Invalid("Draw count must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid draw count '{}'", n)),
            },
            _ => ParseResult::Invalid("Usage: draw [n]".to_string()),
        },
        "steal" => match args {
            [seat] => match seat.trim_start_matches('#').parse::<usize>() {
                Ok(seat) => ParseResult::Command(PlayCommand::Steal(seat)),
                Err(_) => ParseResult::Invalid(format!("Invalid seat '{}'", seat)),
            },
            _ => ParseResult::Invalid(
                "Steal requires a seat number (e.g., 'steal 1')".to_string(),
            ),
        },
        "dd" => match args {
            ["draw"] => ParseResult::Command(PlayCommand::DrawDiscardDraw),
            ["discard", rest @ ..] => match parse_cards(rest) {
                Ok(cards) if cards.len() == 1 => {
                    ParseResult::Command(PlayCommand::DrawDiscardDiscard(cards[0]))
                }
                Ok(_) => ParseResult::Invalid("dd discard takes exactly one card".to_string()),
                Err(msg) => ParseResult::Invalid(msg),
            },
            _ => ParseResult::Invalid("Usage: dd draw | dd discard <card>".to_string()),
        },
        "group" | "g" => match parse_cards(args) {
            Ok(cards) if !cards.is_empty() => ParseResult::Command(PlayCommand::Group(cards)),
            Ok(_) => ParseResult::Invalid("Group requires cards (e.g., 'group r1 r2 r3')".into()),
            Err(msg) => ParseResult::Invalid(msg),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. {}",
            other, COMMAND_HELP
        )),
    }
}

/// Parses a sequence of cards in long (`red 5`) or short (`r5`) form, in
/// the order given.
pub fn parse_cards(tokens: &[&str]) -> Result<Vec<Card>, String> {
    let mut cards = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if let Ok(color) = token.parse::<Color>() {
            let number = tokens
                .get(i + 1)
                .ok_or_else(|| format!("Missing number after '{}'", token))?;
            cards.push(build_card(color, number)?);
            i += 2;
        } else {
            cards.push(parse_short_card(token)?);
            i += 1;
        }
    }
    Ok(cards)
}

fn parse_short_card(token: &str) -> Result<Card, String> {
    let mut chars = token.chars();
    let color = match chars.next().map(|c| c.to_ascii_lowercase()) {
        Some('r') => Color::Red,
        Some('g') => Color::Green,
        Some('y') => Color::Yellow,
        Some('k') => Color::Black,
        Some('b') => Color::Blue,
        _ => return Err(format!("Unrecognized card '{}'", token)),
    };
    build_card(color, chars.as_str())
}

fn build_card(color: Color, number: &str) -> Result<Card, String> {
    let n: u8 = number
        .parse()
        .map_err(|_| format!("Invalid card number '{}'", number))?;
    Card::new(color, n).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_play_command("PASS"), ParseResult::Command(PlayCommand::Pass));
        assert_eq!(parse_play_command("hand"), ParseResult::Command(PlayCommand::Hand));
        assert_eq!(parse_play_command("status"), ParseResult::Command(PlayCommand::Status));
        assert_eq!(parse_play_command("quit"), ParseResult::Quit);
        assert_eq!(parse_play_command("draw"), ParseResult::Command(PlayCommand::Draw(None)));
        assert_eq!(
            parse_play_command("dd draw"),
            ParseResult::Command(PlayCommand::DrawDiscardDraw)
        );
    }

    #[test]
    fn parses_steal_seat() {
        assert_eq!(parse_play_command("steal #2"), ParseResult::Command(PlayCommand::Steal(2)));
        assert!(matches!(parse_play_command("steal"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("steal bob"), ParseResult::Invalid(_)));
    }

    #[test]
    fn rejects_bad_draw_counts() {
        assert!(matches!(parse_play_command("draw 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("draw lots"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("draw 1 2"), ParseResult::Invalid(_)));
    }

    #[test]
    fn parses_long_and_short_cards_in_order() {
        assert_eq!(
            parse_play_command("group red 1 r2 RED 3"),
            ParseResult::Command(PlayCommand::Group(vec![
                card("red 1"),
                card("red 2"),
                card("red 3")
            ]))
        );
        assert_eq!(
            parse_play_command("dd discard k9"),
            ParseResult::Command(PlayCommand::DrawDiscardDiscard(card("black 9")))
        );
    }

    #[test]
    fn rejects_bad_cards() {
        assert!(matches!(parse_play_command("group r0 r1 r2"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("group x1"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("group red"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("group"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_command("dd discard r1 r2"), ParseResult::Invalid(_)));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert_eq!(
            parse_play_command("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
