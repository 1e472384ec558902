//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "notty",
    version,
    about = "Notty card game: draw, steal and discard until your hand is empty"
)]
pub struct NottyCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a hot-seat game at the terminal
    Play {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Comma-separated player names (2-3); the first seat is human
        #[arg(long)]
        players: Option<String>,
    },
    /// Deal a fresh table and print every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<String>,
        /// Print the table snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
    /// Print the rules summary
    Rules,
}
