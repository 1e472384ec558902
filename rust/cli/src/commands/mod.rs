//! Command handler modules for the Notty CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod play;
mod rules;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rules::handle_rules_command;

use crate::config::{self, Config};
use crate::error::CliError;

/// Resolved table settings shared by `play` and `deal`.
#[derive(Debug, Clone)]
pub(crate) struct TableSettings {
    pub config: Config,
    pub seed: u64,
}

/// Loads configuration and applies command-line overrides on top. Flags win
/// over environment and file values. A missing seed is drawn at random so it
/// can be printed for replay.
pub(crate) fn resolve_table(
    seed: Option<u64>,
    players: Option<&str>,
) -> Result<TableSettings, CliError> {
    let mut config = config::load()?;
    if let Some(list) = players {
        config.players = config::parse_player_list(list);
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config::validate(&config)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    Ok(TableSettings { config, seed })
}
