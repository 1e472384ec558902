//! Deal command handler.
//!
//! Starts a game and prints the opening table with every hand face up. With
//! `--json` the engine snapshot is printed instead. The same seed always
//! produces the same output.

use crate::commands::resolve_table;
use crate::error::CliError;
use crate::formatters::{format_hand, format_table};
use notty_engine::game::Game;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// // Internal command handler - not part of public API
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), None, false, &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<&str>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let table = resolve_table(seed, players)?;
    let game = Game::new(table.config.to_players(), Some(table.seed))?;

    if json {
        let snapshot = serde_json::to_string_pretty(&game.snapshot())
            .map_err(std::io::Error::other)?;
        writeln!(out, "{}", snapshot)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", table.seed)?;
    writeln!(out, "{}", format_table(&game))?;
    for (i, p) in game.players().iter().enumerate() {
        writeln!(
            out,
            "#{} {} ({}): {}",
            i,
            p.name(),
            p.kind_label(),
            format_hand(p.hand().cards())
        )?;
    }
    Ok(())
}
