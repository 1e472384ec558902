//! # Play Command
//!
//! Hot-seat Notty at the terminal. Every seat types its own commands; the
//! engine decides what is allowed and the loop only reports the outcome.
//!
//! ## Features
//!
//! - Input parsing with clear error messages (see [`crate::validation`])
//! - Refused actions are explained and the turn continues
//! - Win check after every action that changes a hand
//! - Graceful quit handling (`q` or `quit`); input closing mid-game is
//!   reported as an interruption

use crate::commands::resolve_table;
use crate::error::CliError;
use crate::formatters::{format_available, format_card, format_hand, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{COMMAND_HELP, ParseResult, PlayCommand, parse_play_command};
use notty_engine::game::Game;
use notty_engine::rules::{ActionKind, ActionRejected, classify_group};
use std::io::{BufRead, Write};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    Winner,
    Quit,
    InputClosed,
}

/// Handle the play command: interactive hot-seat gameplay
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `players` - Comma-separated seat names overriding the configuration
/// * `out` - Output stream for the table display
/// * `err` - Error stream for refused actions and input errors
/// * `stdin` - Input stream for player commands
pub fn handle_play_command(
    seed: Option<u64>,
    players: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let table = resolve_table(seed, players)?;
    let max_draw = usize::from(table.config.max_draw);
    let mut game = Game::new(table.config.to_players(), Some(table.seed))?;

    writeln!(
        out,
        "play: players={} seed={}",
        game.players().len(),
        table.seed
    )?;

    let mut turns = 1u32;
    let mut show_turn = true;
    let end = loop {
        if show_turn {
            write_turn_header(&game, out)?;
            show_turn = false;
        }
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break SessionEnd::InputClosed;
        };
        let command = match parse_play_command(&line) {
            ParseResult::Command(c) => c,
            ParseResult::Quit => break SessionEnd::Quit,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let before = game.current_player_index();
        if apply_command(&mut game, command, max_draw, out, err)? && game.check_win_condition() {
            break SessionEnd::Winner;
        }
        if game.current_player_index() != before {
            turns += 1;
            show_turn = true;
        }
    };

    match end {
        SessionEnd::Winner => {
            if let Some(winner) = game.winner() {
                writeln!(out, "Winner: {}", winner.name())?;
            }
        }
        SessionEnd::Quit => writeln!(out, "Quit.")?,
        SessionEnd::InputClosed => writeln!(out, "Input closed.")?,
    }
    writeln!(out, "Turns played: {}", turns)?;
    if end == SessionEnd::InputClosed {
        return Err(CliError::Interrupted(
            "input closed before the game ended".to_string(),
        ));
    }
    Ok(())
}

fn write_turn_header<R: rand::Rng>(game: &Game<R>, out: &mut dyn Write) -> Result<(), CliError> {
    let current = game.current_player();
    writeln!(out)?;
    writeln!(
        out,
        "Turn: {} (#{})",
        current.name(),
        game.current_player_index()
    )?;
    writeln!(out, "{}", format_table(game))?;
    writeln!(out, "Hand: {}", format_hand(current.hand().cards()))?;
    writeln!(out, "{}", format_available(game))?;
    Ok(())
}

/// Runs one parsed command. Returns whether a hand changed, which is when
/// the caller must check for a winner.
fn apply_command<R: rand::Rng>(
    game: &mut Game<R>,
    command: PlayCommand,
    max_draw: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    let me = game.current_player_index();
    match command {
        PlayCommand::Hand => {
            writeln!(out, "Hand: {}", format_hand(game.current_player().hand().cards()))?;
            Ok(false)
        }
        PlayCommand::Status => {
            writeln!(out, "{}", format_table(game))?;
            writeln!(out, "{}", format_available(game))?;
            Ok(false)
        }
        PlayCommand::Help => {
            writeln!(out, "{}", COMMAND_HELP)?;
            Ok(false)
        }
        PlayCommand::Draw(count) => {
            let count = count.unwrap_or(max_draw);
            if count > max_draw {
                ui::write_error(err, &format!("You may draw at most {} cards", max_draw))?;
                return Ok(false);
            }
            let before = game.current_player().hand().size();
            if !game.player_draws_multiple(count) {
                write_refusal(err, game.check_action(ActionKind::Draw).err())?;
                return Ok(false);
            }
            let drawn = game.current_player().hand().size() - before;
            writeln!(out, "Drew {} card(s)", drawn)?;
            Ok(true)
        }
        PlayCommand::Steal(target) => {
            if !game.player_steals(target) {
                write_refusal(err, game.check_steal(target).err())?;
                return Ok(false);
            }
            let victim = game
                .player(target)
                .map(|p| p.name().to_string())
                .unwrap_or_default();
            writeln!(out, "Stole a card from {}", victim)?;
            Ok(true)
        }
        PlayCommand::DrawDiscardDraw => {
            if !game.player_draw_discard_draws() {
                write_refusal(err, game.check_action(ActionKind::DrawDiscardDraw).err())?;
                return Ok(false);
            }
            writeln!(out, "Drew 1 card, now discard one with 'dd discard <card>'")?;
            Ok(true)
        }
        PlayCommand::DrawDiscardDiscard(card) => {
            if !game.player_draw_discard_discards(card) {
                let reason = game
                    .check_action(ActionKind::DrawDiscardDiscard)
                    .err()
                    .unwrap_or(ActionRejected::CardNotInHand);
                write_refusal(err, Some(reason))?;
                return Ok(false);
            }
            writeln!(out, "Discarded {}", format_card(&card))?;
            Ok(true)
        }
        PlayCommand::Group(cards) => {
            let kind = classify_group(&cards);
            if !game.player_discards_group(&cards) {
                write_refusal(err, game.check_group(&cards).err())?;
                return Ok(false);
            }
            let label = kind.map_or_else(|| "group".to_string(), |k| format!("{:?}", k));
            writeln!(out, "Discarded {}: {}", label, format_hand(&cards))?;
            Ok(true)
        }
        PlayCommand::Pass => {
            if game.player_passes() {
                writeln!(out, "Player #{} passes", me)?;
            } else {
                write_refusal(err, Some(ActionRejected::GameOver))?;
            }
            Ok(false)
        }
    }
}

/// Reports an action the engine refused. The reason is looked up after the
/// fact; the engine's answer is the `false` it already returned.
fn write_refusal(err: &mut dyn Write, reason: Option<ActionRejected>) -> Result<(), CliError> {
    match reason {
        Some(reason) => ui::write_rejected(err, &reason)?,
        None => ui::write_rejected(err, &"action refused")?,
    }
    Ok(())
}
