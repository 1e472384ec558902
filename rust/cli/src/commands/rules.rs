//! Rules command handler: a plain-text summary of how a turn works.

use crate::error::CliError;
use notty_engine::game::{INITIAL_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use notty_engine::hand::Hand;
use notty_engine::rules::{MIN_RUN_LEN, MIN_SET_LEN};
use std::io::Write;

pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "Notty: {}-{} players, 90 cards (5 colors, 1-9, two of each).",
        MIN_PLAYERS, MAX_PLAYERS
    )?;
    writeln!(
        out,
        "Each player starts with {} cards. Empty your hand to win.",
        INITIAL_HAND_SIZE
    )?;
    writeln!(out)?;
    writeln!(out, "Once per turn each:")?;
    writeln!(
        out,
        "  draw [n]           draw up to n cards from the deck (hand holds {} max)",
        Hand::MAX_CARDS
    )?;
    writeln!(out, "  steal <seat>       take a random card from another player")?;
    writeln!(out, "  dd draw            draw one card, then")?;
    writeln!(out, "  dd discard <card>  put one card from your hand back into the deck")?;
    writeln!(out)?;
    writeln!(out, "Any number of times:")?;
    writeln!(
        out,
        "  group <cards>      discard a run ({}+ consecutive numbers, one color, in order)",
        MIN_RUN_LEN
    )?;
    writeln!(
        out,
        "                     or a set ({}+ different colors, one number)",
        MIN_SET_LEN
    )?;
    writeln!(out)?;
    writeln!(out, "pass ends your turn. Cards are written like R5 or 'red 5' (K is black).")?;
    Ok(())
}
