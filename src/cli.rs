//! Command-line interface for noughts.

use noughts::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = noughts::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Skip mode selection: two-player or vs-computer
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Let the computer play itself and print the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_mode() {
        let cli = Cli::try_parse_from(["noughts", "play", "--mode", "vs-computer", "--seed", "3"])
            .unwrap();
        match cli.command {
            Command::Play { mode, seed, delay_ms } => {
                assert_eq!(mode, Some(GameMode::VsComputer));
                assert_eq!(seed, Some(3));
                assert_eq!(delay_ms, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_reject_unknown_mode() {
        assert!(Cli::try_parse_from(["noughts", "play", "--mode", "online"]).is_err());
    }
}
